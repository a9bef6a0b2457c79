//! Locale-prefixed routing.
//!
//! Paths are served under a locale prefix (`/en-US/...`). Unprefixed paths
//! redirect to the locale detected from `Accept-Language`, and pages reject
//! unsupported prefixes as not found.

use tracing::debug;

use super::{I18nError, Locale};

/// Outcome of routing a request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    /// Serve the path as is.
    Pass,
    /// Redirect to the given locale-prefixed path.
    Redirect(String),
}

/// Picks the first supported locale mentioned by an `Accept-Language` header.
///
/// Matching is by substring on either the full tag or the language subtag,
/// in [`Locale::ALL`] order.
pub fn detect_locale(accept_language: Option<&str>) -> Locale {
    accept_language
        .and_then(|header| {
            Locale::ALL.into_iter().find(|locale| {
                header.contains(locale.tag()) || header.contains(locale.short_code())
            })
        })
        .unwrap_or(Locale::DEFAULT)
}

/// Routes a request path, adding a locale prefix when it has none.
pub fn route(pathname: &str, accept_language: Option<&str>) -> RouteDecision {
    if is_passthrough(pathname) || locale_prefix(pathname).is_some() {
        return RouteDecision::Pass;
    }

    let locale = detect_locale(accept_language);
    let target = if pathname == "/" {
        format!("/{}", locale)
    } else {
        format!("/{}{}", locale, pathname)
    };
    debug!(from = pathname, to = %target, "locale redirect");
    RouteDecision::Redirect(target)
}

/// Accepts a locale path segment or reports it as not found.
pub fn guard_locale(segment: &str) -> Result<Locale, I18nError> {
    Locale::from_tag(segment).ok_or_else(|| I18nError::UnsupportedLocale(segment.to_string()))
}

/// Locales to pre-render pages for.
pub fn static_locales() -> Vec<Locale> {
    Locale::ALL.to_vec()
}

/// Rewrites a locale-prefixed path for another locale.
///
/// `/en-US/some-page` becomes `/es-AR/some-page`; the bare `/en-US` and the
/// root `/` become `/es-AR` with no trailing slash.
pub fn switch_path(pathname: &str, current: Locale, target: Locale) -> String {
    let base = pathname.replacen(&format!("/{}", current), "", 1);
    if base.is_empty() || base == "/" {
        format!("/{}", target)
    } else {
        format!("/{}{}", target, base)
    }
}

fn locale_prefix(pathname: &str) -> Option<Locale> {
    Locale::ALL.into_iter().find(|locale| {
        let prefix = format!("/{}", locale);
        pathname == prefix || pathname.starts_with(&format!("{}/", prefix))
    })
}

fn is_passthrough(pathname: &str) -> bool {
    pathname.starts_with("/_next/")
        || pathname.starts_with("/api/")
        || pathname.contains('.')
        || pathname.starts_with("/favicon")
}
