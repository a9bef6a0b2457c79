//! "MM:SS" duration codec.

use thiserror::Error;

/// Errors produced when a duration string is not "MM:SS" or a session
/// length cannot be counted.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DurationError {
    /// No ':' between minutes and seconds.
    #[error("duration '{0}' must look like MM:SS")]
    MissingSeparator(String),

    /// The minutes part is not a non-negative integer.
    #[error("invalid minutes in duration '{0}'")]
    InvalidMinutes(String),

    /// The seconds part is not a non-negative integer.
    #[error("invalid seconds in duration '{0}'")]
    InvalidSeconds(String),

    /// The planned session is too long to count in seconds.
    #[error("session length overflows with {sets} sets and {cycles} cycles")]
    SessionOverflow { sets: u32, cycles: u32 },
}

/// Parses "MM:SS" into seconds.
///
/// Each side is read as an integer without range checks, so "01:75" is 135
/// seconds and "120:00" is two hours.
pub fn parse_duration(s: &str) -> Result<u32, DurationError> {
    let (minutes, seconds) = s
        .split_once(':')
        .ok_or_else(|| DurationError::MissingSeparator(s.to_string()))?;

    let minutes: u32 = minutes
        .trim()
        .parse()
        .map_err(|_| DurationError::InvalidMinutes(s.to_string()))?;
    let seconds: u32 = seconds
        .trim()
        .parse()
        .map_err(|_| DurationError::InvalidSeconds(s.to_string()))?;

    minutes
        .checked_mul(60)
        .and_then(|m| m.checked_add(seconds))
        .ok_or_else(|| DurationError::InvalidMinutes(s.to_string()))
}

/// Formats seconds as "MM:SS".
///
/// Minutes use floor division and seconds keep the sign of the input, so
/// negative totals render as e.g. "-1:-5" instead of panicking.
pub fn format_duration(seconds: i64) -> String {
    let minutes = seconds.div_euclid(60);
    let secs = seconds % 60;
    format!("{:02}:{:02}", minutes, secs)
}
