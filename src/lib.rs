//! Training Timer Library
//!
//! This library provides the core functionality for the Training Timer.
//! It includes:
//! - Timer core: duration codec, session length, phase sequencing,
//!   manual navigation, the dashboard engine and its tick driver
//! - Type definitions for settings, timer state, views and notices
//! - Localized strings and locale-prefixed routing
//! - Audio cue seam (silent by default)
//! - CLI command parsing, display and the interactive session runner

pub mod cli;
pub mod cue;
pub mod i18n;
pub mod timer;
pub mod types;

// Re-export commonly used types for convenience
pub use types::{
    MessageState, Phase, SettingKey, SettingValue, SettingsError, TimerSettings, TimerState, View,
};

pub use timer::{
    format_duration, parse_duration, total_session_seconds, DashboardEngine, DurationError,
    TickDriver, TimerEvent,
};

pub use i18n::{get_static_translations, get_translations, I18nError, Locale, Translations};

pub use cue::{Cue, CueError, CuePlayer, MockCuePlayer, SilentCuePlayer};
