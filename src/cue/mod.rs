//! Audio cues for the Training Timer.
//!
//! Cues mark phase changes, the end of a session and, on request, every
//! second. Playback is not
//! implemented: [`SilentCuePlayer`] only logs the cue it would play, and
//! [`MockCuePlayer`] records cues for tests. Front-ends depend on the
//! [`CuePlayer`] trait so a real backend can be slotted in later.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use thiserror::Error;
use tracing::debug;

use crate::timer::TimerEvent;

/// Errors that can occur while playing a cue.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CueError {
    /// The cue could not be played.
    #[error("cue playback failed: {0}")]
    Playback(String),
}

/// Sound played by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    /// A new phase started
    PhaseChange,
    /// The whole session finished
    SessionComplete,
    /// One second passed
    Tick,
}

impl Cue {
    /// Asset path of the cue sound.
    pub fn asset(&self) -> &'static str {
        match self {
            Cue::PhaseChange => "/sounds/notification.mp3",
            Cue::SessionComplete => "/sounds/complete.mp3",
            Cue::Tick => "/sounds/tick.mp3",
        }
    }

    /// Cue matching a dashboard event, if the event has one.
    ///
    /// Ticks stay silent unless `tick_cue` is set.
    pub fn for_event(event: &TimerEvent, tick_cue: bool) -> Option<Cue> {
        match event {
            TimerEvent::PhaseStarted { .. } => Some(Cue::PhaseChange),
            TimerEvent::SessionCompleted { .. } => Some(Cue::SessionComplete),
            TimerEvent::Tick { .. } if tick_cue => Some(Cue::Tick),
            _ => None,
        }
    }
}

/// Trait for cue playback implementations.
pub trait CuePlayer {
    /// Plays a cue without blocking.
    fn play(&self, cue: Cue) -> Result<(), CueError>;
}

/// Cue player that produces no sound.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentCuePlayer;

impl CuePlayer for SilentCuePlayer {
    fn play(&self, cue: Cue) -> Result<(), CueError> {
        debug!(asset = cue.asset(), "cue (silent)");
        Ok(())
    }
}

/// Mock cue player for testing.
#[derive(Debug, Default)]
pub struct MockCuePlayer {
    played: Mutex<Vec<Cue>>,
    should_fail: AtomicBool,
}

impl MockCuePlayer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail.store(should_fail, Ordering::SeqCst);
    }

    #[must_use]
    pub fn played(&self) -> Vec<Cue> {
        self.played
            .lock()
            .map(|played| played.clone())
            .unwrap_or_default()
    }
}

impl CuePlayer for MockCuePlayer {
    fn play(&self, cue: Cue) -> Result<(), CueError> {
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(CueError::Playback("mock failure".to_string()));
        }
        self.played
            .lock()
            .map_err(|e| CueError::Playback(e.to_string()))?
            .push(cue);
        Ok(())
    }
}
