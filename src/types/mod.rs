//! Core data types for the Training Timer.
//!
//! This module defines the data structures used for:
//! - Timer phases and their display attributes
//! - User-editable timer settings with validation
//! - Runtime timer state shown on the dashboard
//! - Dashboard views and the reps-mode notice

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::timer::duration::{parse_duration, DurationError};

// ============================================================================
// Phase
// ============================================================================

/// Countdown stage of a training session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Phase {
    /// Countdown before the session starts
    #[default]
    Prepare,
    /// Warm-up block, runs once per session
    Warmup,
    /// Work block of a set
    Work,
    /// Rest block of a set
    Rest,
    /// Rest between two cycles
    CycleRest,
}

impl Phase {
    /// Returns the string representation of the phase.
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Prepare => "prepare",
            Phase::Warmup => "warmup",
            Phase::Work => "work",
            Phase::Rest => "rest",
            Phase::CycleRest => "cycleRest",
        }
    }

    /// Returns the display color of the phase as a hex string.
    pub fn color(&self) -> &'static str {
        match self {
            Phase::Prepare | Phase::Rest => "#EA6418",
            Phase::Warmup | Phase::CycleRest => "#F2994A",
            Phase::Work => "#219653",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// TimerSettings
// ============================================================================

/// Errors raised while editing timer settings.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SettingsError {
    /// The value kind does not match the setting.
    #[error("setting '{key}' expects a {expected} value")]
    TypeMismatch {
        /// Setting that was edited
        key: SettingKey,
        /// Kind of value the setting accepts
        expected: &'static str,
    },

    /// A duration setting does not parse as "MM:SS".
    #[error("setting '{key}' is not a valid duration: {source}")]
    InvalidDuration {
        /// Setting holding the bad duration
        key: SettingKey,
        /// Parse failure
        #[source]
        source: DurationError,
    },
}

/// User-editable timer settings.
///
/// Durations are kept as "MM:SS" strings, the form the settings screen edits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerSettings {
    /// Countdown before the session
    pub prepare: String,
    /// Warm-up duration
    pub warm_up: String,
    /// Work duration per set
    pub work: String,
    /// Rest duration per set
    pub rest: String,
    /// Work/rest repetitions per cycle
    pub sets: u32,
    /// Number of cycles in the session
    pub cycles: u32,
    /// Rest between cycles
    pub cycle_rest: String,
    /// Work phase resumes manually
    pub work_reps: bool,
    /// Rest phase resumes manually
    pub rest_reps: bool,
}

impl Default for TimerSettings {
    fn default() -> Self {
        Self {
            prepare: "00:03".to_string(),
            warm_up: "05:00".to_string(),
            work: "00:30".to_string(),
            rest: "00:20".to_string(),
            sets: 3,
            cycles: 5,
            cycle_rest: "00:30".to_string(),
            work_reps: false,
            rest_reps: true,
        }
    }
}

impl TimerSettings {
    /// Sets the prepare duration.
    pub fn with_prepare(mut self, duration: impl Into<String>) -> Self {
        self.prepare = duration.into();
        self
    }

    /// Sets the warm-up duration.
    pub fn with_warm_up(mut self, duration: impl Into<String>) -> Self {
        self.warm_up = duration.into();
        self
    }

    /// Sets the work duration.
    pub fn with_work(mut self, duration: impl Into<String>) -> Self {
        self.work = duration.into();
        self
    }

    /// Sets the rest duration.
    pub fn with_rest(mut self, duration: impl Into<String>) -> Self {
        self.rest = duration.into();
        self
    }

    /// Sets the cycle-rest duration.
    pub fn with_cycle_rest(mut self, duration: impl Into<String>) -> Self {
        self.cycle_rest = duration.into();
        self
    }

    /// Sets the number of sets per cycle.
    pub fn with_sets(mut self, sets: u32) -> Self {
        self.sets = sets;
        self
    }

    /// Sets the number of cycles.
    pub fn with_cycles(mut self, cycles: u32) -> Self {
        self.cycles = cycles;
        self
    }

    /// Returns the duration string that drives the given phase.
    pub fn duration_for(&self, phase: Phase) -> &str {
        match phase {
            Phase::Prepare => &self.prepare,
            Phase::Warmup => &self.warm_up,
            Phase::Work => &self.work,
            Phase::Rest => &self.rest,
            Phase::CycleRest => &self.cycle_rest,
        }
    }

    /// Parses the duration of the given phase into seconds.
    pub fn seconds_for(&self, phase: Phase) -> Result<u32, DurationError> {
        parse_duration(self.duration_for(phase))
    }

    /// Validates every duration field.
    ///
    /// Returns the first malformed field.
    pub fn validate(&self) -> Result<(), SettingsError> {
        let fields = [
            (SettingKey::Prepare, &self.prepare),
            (SettingKey::WarmUp, &self.warm_up),
            (SettingKey::Work, &self.work),
            (SettingKey::Rest, &self.rest),
            (SettingKey::CycleRest, &self.cycle_rest),
        ];
        for (key, value) in fields {
            parse_duration(value).map_err(|source| SettingsError::InvalidDuration { key, source })?;
        }
        Ok(())
    }

    /// Replaces a single field, checking that the value kind matches.
    ///
    /// Duration text is stored as given; malformed text is reported by
    /// [`TimerSettings::validate`] and degrades at use sites.
    pub fn apply(&mut self, key: SettingKey, value: SettingValue) -> Result<(), SettingsError> {
        match (key, value) {
            (SettingKey::Prepare, SettingValue::Text(v)) => self.prepare = v,
            (SettingKey::WarmUp, SettingValue::Text(v)) => self.warm_up = v,
            (SettingKey::Work, SettingValue::Text(v)) => self.work = v,
            (SettingKey::Rest, SettingValue::Text(v)) => self.rest = v,
            (SettingKey::CycleRest, SettingValue::Text(v)) => self.cycle_rest = v,
            (SettingKey::Sets, SettingValue::Number(v)) => self.sets = v,
            (SettingKey::Cycles, SettingValue::Number(v)) => self.cycles = v,
            (SettingKey::WorkReps, SettingValue::Flag(v)) => self.work_reps = v,
            (SettingKey::RestReps, SettingValue::Flag(v)) => self.rest_reps = v,
            (key, _) => {
                return Err(SettingsError::TypeMismatch {
                    key,
                    expected: key.expected_kind(),
                })
            }
        }
        Ok(())
    }
}

/// Names a single field of [`TimerSettings`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SettingKey {
    Prepare,
    WarmUp,
    Work,
    Rest,
    Sets,
    Cycles,
    CycleRest,
    WorkReps,
    RestReps,
}

impl SettingKey {
    /// Returns the camelCase field name.
    pub fn as_str(&self) -> &'static str {
        match self {
            SettingKey::Prepare => "prepare",
            SettingKey::WarmUp => "warmUp",
            SettingKey::Work => "work",
            SettingKey::Rest => "rest",
            SettingKey::Sets => "sets",
            SettingKey::Cycles => "cycles",
            SettingKey::CycleRest => "cycleRest",
            SettingKey::WorkReps => "workReps",
            SettingKey::RestReps => "restReps",
        }
    }

    fn expected_kind(&self) -> &'static str {
        match self {
            SettingKey::Sets | SettingKey::Cycles => "number",
            SettingKey::WorkReps | SettingKey::RestReps => "boolean",
            _ => "duration",
        }
    }
}

impl std::fmt::Display for SettingKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// New value for a settings field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingValue {
    /// "MM:SS" duration text
    Text(String),
    /// Set or cycle count
    Number(u32),
    /// Reps toggle
    Flag(bool),
}

// ============================================================================
// TimerState
// ============================================================================

/// Display state of the dashboard timer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerState {
    /// Remaining time of the current phase ("MM:SS")
    pub current_time: String,
    /// Session total before the first tick, elapsed time afterwards ("MM:SS")
    pub total_time: String,
    pub current_set: u32,
    pub total_sets: u32,
    pub current_cycle: u32,
    pub total_cycles: u32,
    /// True only while the tick driver is armed
    pub is_playing: bool,
    /// Whether the last play/pause toggle paused a running timer
    pub is_paused: bool,
    pub phase: Phase,
}

impl Default for TimerState {
    fn default() -> Self {
        Self {
            current_time: "00:00".to_string(),
            total_time: "00:00".to_string(),
            current_set: 1,
            total_sets: 8,
            current_cycle: 1,
            total_cycles: 4,
            is_playing: false,
            is_paused: false,
            phase: Phase::Prepare,
        }
    }
}

// ============================================================================
// MessageState
// ============================================================================

/// Notice shown when a reps toggle is switched on.
pub const REPS_NOTICE: &str = "Notice that on reps mode you need to resume manually the session.";

/// Transient notice overlay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageState {
    pub is_visible: bool,
    pub text: String,
    pub show_dont_show_again: bool,
    pub is_dont_show_again_checked: bool,
}

impl Default for MessageState {
    fn default() -> Self {
        Self {
            is_visible: false,
            text: REPS_NOTICE.to_string(),
            show_dont_show_again: true,
            is_dont_show_again_checked: false,
        }
    }
}

impl MessageState {
    /// A freshly shown reps notice.
    pub fn reps_notice() -> Self {
        Self {
            is_visible: true,
            ..Self::default()
        }
    }
}

// ============================================================================
// View
// ============================================================================

/// Viewport width below which the layout is treated as mobile.
pub const MOBILE_BREAKPOINT: u32 = 768;

/// Dashboard screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum View {
    #[default]
    Timer,
    TimerSettings,
    GeneralSettings,
    About,
}

impl View {
    /// Title shown above the view content.
    pub fn page_title(&self) -> &'static str {
        match self {
            View::Timer => "Timer",
            View::TimerSettings => "Timer Settings",
            View::GeneralSettings => "General Settings",
            View::About => "About",
        }
    }

    /// View to show after the settings "done" button, by viewport width.
    pub fn after_done(viewport_width: u32) -> Self {
        if viewport_width < MOBILE_BREAKPOINT {
            View::Timer
        } else {
            View::TimerSettings
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
