//! Localized strings for the Training Timer.
//!
//! Bundles for `en-US`, `es-AR` and `pt-BR` are compiled into the binary.
//! Unknown locales fall back to `es-AR`.

pub mod routing;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::warn;

const EN_US_BUNDLE: &str = include_str!("locales/en-US.json");
const ES_AR_BUNDLE: &str = include_str!("locales/es-AR.json");
const PT_BR_BUNDLE: &str = include_str!("locales/pt-BR.json");

// ============================================================================
// I18nError
// ============================================================================

/// Errors raised by translation loading and locale routing.
#[derive(Debug, Error)]
pub enum I18nError {
    /// The locale is not one of the supported locales.
    #[error("unsupported locale '{0}'")]
    UnsupportedLocale(String),

    /// A compiled-in bundle failed to parse.
    #[error("translation bundle for {locale} is invalid: {source}")]
    Bundle {
        locale: Locale,
        #[source]
        source: serde_json::Error,
    },
}

impl I18nError {
    /// Returns true if the error should surface as a not-found page.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::UnsupportedLocale(_))
    }
}

// ============================================================================
// Locale
// ============================================================================

/// Supported locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locale {
    #[serde(rename = "en-US")]
    EnUs,
    #[serde(rename = "es-AR")]
    EsAr,
    #[serde(rename = "pt-BR")]
    PtBr,
}

impl Locale {
    /// All supported locales, in detection order.
    pub const ALL: [Locale; 3] = [Locale::EnUs, Locale::EsAr, Locale::PtBr];

    /// Locale used when none is requested or detected.
    pub const DEFAULT: Locale = Locale::EsAr;

    /// Full locale tag, e.g. "en-US".
    pub fn tag(&self) -> &'static str {
        match self {
            Locale::EnUs => "en-US",
            Locale::EsAr => "es-AR",
            Locale::PtBr => "pt-BR",
        }
    }

    /// Language subtag shown on the language switcher, e.g. "en".
    pub fn short_code(&self) -> &'static str {
        match self {
            Locale::EnUs => "en",
            Locale::EsAr => "es",
            Locale::PtBr => "pt",
        }
    }

    /// Parses an exact supported tag.
    pub fn from_tag(tag: &str) -> Option<Locale> {
        Self::ALL.into_iter().find(|locale| locale.tag() == tag)
    }

    /// Parses a tag, falling back to [`Locale::DEFAULT`].
    pub fn resolve(tag: &str) -> Locale {
        Self::from_tag(tag).unwrap_or_else(|| {
            warn!("Unknown locale '{}', using {}", tag, Self::DEFAULT);
            Self::DEFAULT
        })
    }

    /// Locales offered by the language switcher while `self` is active.
    pub fn others(&self) -> Vec<Locale> {
        Self::ALL.into_iter().filter(|l| l != self).collect()
    }

    fn bundle_source(&self) -> &'static str {
        match self {
            Locale::EnUs => EN_US_BUNDLE,
            Locale::EsAr => ES_AR_BUNDLE,
            Locale::PtBr => PT_BR_BUNDLE,
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

// ============================================================================
// Translations
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavLinks {
    pub home: String,
    pub anchor_title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeStrings {
    pub greeting: String,
    pub page_title: String,
    pub meta_description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStrings {
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControllerStrings {
    pub start: String,
    pub pause: String,
    pub stop: String,
    pub reset: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerStrings {
    pub sets: String,
    pub cycles: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageStrings {
    pub all_sessions_complete: String,
}

/// Typed translation bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Translations {
    pub nav_links: NavLinks,
    pub home: HomeStrings,
    pub dashboard: DashboardStrings,
    pub controllers: ControllerStrings,
    pub timer: TimerStrings,
    pub messages: MessageStrings,
}

/// Loads the bundle for a locale tag; unknown tags get the `es-AR` bundle.
pub fn get_static_translations(locale: &str) -> Result<Translations, I18nError> {
    load_bundle(Locale::resolve(locale))
}

/// Async flavour of [`get_static_translations`].
pub async fn get_translations(locale: &str) -> Result<Translations, I18nError> {
    get_static_translations(locale)
}

/// Loads the bundle of a supported locale.
pub fn load_bundle(locale: Locale) -> Result<Translations, I18nError> {
    serde_json::from_str(locale.bundle_source())
        .map_err(|source| I18nError::Bundle { locale, source })
}

// ============================================================================
// Translator
// ============================================================================

/// Dotted-key lookup over a bundle, e.g. `t("controllers.start")`.
#[derive(Debug, Clone)]
pub struct Translator {
    locale: Locale,
    bundle: Value,
}

impl Translator {
    pub fn new(locale: Locale) -> Result<Self, I18nError> {
        let bundle = serde_json::from_str(locale.bundle_source())
            .map_err(|source| I18nError::Bundle { locale, source })?;
        Ok(Self { locale, bundle })
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Returns the string at `key`, or `key` itself when it is missing or
    /// does not name a string.
    pub fn t(&self, key: &str) -> String {
        key.split('.')
            .try_fold(&self.bundle, |value, part| value.get(part))
            .and_then(Value::as_str)
            .map_or_else(|| key.to_string(), str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod locale_tests {
        use super::*;

        #[test]
        fn test_tags_and_short_codes() {
            assert_eq!(Locale::EnUs.tag(), "en-US");
            assert_eq!(Locale::EsAr.short_code(), "es");
            assert_eq!(Locale::PtBr.to_string(), "pt-BR");
        }

        #[test]
        fn test_from_tag_is_exact() {
            assert_eq!(Locale::from_tag("pt-BR"), Some(Locale::PtBr));
            assert_eq!(Locale::from_tag("pt"), None);
            assert_eq!(Locale::from_tag("EN-us"), None);
        }

        #[test]
        fn test_resolve_falls_back_to_spanish() {
            assert_eq!(Locale::resolve("en-US"), Locale::EnUs);
            assert_eq!(Locale::resolve("invalid-locale"), Locale::EsAr);
        }

        #[test]
        fn test_others_excludes_current() {
            assert_eq!(Locale::EnUs.others(), vec![Locale::EsAr, Locale::PtBr]);
            assert_eq!(Locale::PtBr.others(), vec![Locale::EnUs, Locale::EsAr]);
        }
    }

    mod bundle_tests {
        use super::*;

        #[test]
        fn test_greetings() {
            assert_eq!(get_static_translations("en-US").unwrap().home.greeting, "Hello world");
            assert_eq!(get_static_translations("es-AR").unwrap().home.greeting, "Hola mundo");
            assert_eq!(get_static_translations("pt-BR").unwrap().home.greeting, "Olá mundo");
        }

        #[test]
        fn test_unknown_locale_gets_spanish() {
            let translations = get_static_translations("invalid-locale").unwrap();
            assert_eq!(translations.home.greeting, "Hola mundo");
        }

        #[tokio::test]
        async fn test_async_loader_matches_static() {
            for locale in Locale::ALL {
                assert_eq!(
                    get_translations(locale.tag()).await.unwrap(),
                    get_static_translations(locale.tag()).unwrap()
                );
            }
            let fallback = get_translations("xx-XX").await.unwrap();
            assert_eq!(fallback.home.greeting, "Hola mundo");
        }

        #[test]
        fn test_bundles_share_keys() {
            fn keys(value: &Value, prefix: &str, out: &mut Vec<String>) {
                if let Some(map) = value.as_object() {
                    for (k, v) in map {
                        keys(v, &format!("{}{}.", prefix, k), out);
                    }
                } else {
                    out.push(prefix.trim_end_matches('.').to_string());
                }
            }

            let mut reference = Vec::new();
            keys(&Translator::new(Locale::EnUs).unwrap().bundle, "", &mut reference);
            reference.sort();

            for locale in Locale::ALL {
                let mut found = Vec::new();
                keys(&Translator::new(locale).unwrap().bundle, "", &mut found);
                found.sort();
                assert_eq!(found, reference, "keys differ for {}", locale);
            }
        }
    }

    mod translator_tests {
        use super::*;

        #[test]
        fn test_t_resolves_nested_keys() {
            let t = Translator::new(Locale::EnUs).unwrap();
            assert_eq!(t.t("controllers.start"), "Start");
            assert_eq!(t.t("navLinks.anchorTitle"), "Training Timer");
        }

        #[test]
        fn test_t_returns_key_when_missing() {
            let t = Translator::new(Locale::PtBr).unwrap();
            assert_eq!(t.t("controllers.rewind"), "controllers.rewind");
            assert_eq!(t.t("nothing"), "nothing");
        }

        #[test]
        fn test_t_returns_key_for_non_string() {
            let t = Translator::new(Locale::EsAr).unwrap();
            assert_eq!(t.t("controllers"), "controllers");
        }
    }

    #[test]
    fn test_unsupported_locale_is_not_found() {
        assert!(I18nError::UnsupportedLocale("fr-FR".to_string()).is_not_found());
    }
}
