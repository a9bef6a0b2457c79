//! Dashboard engine for the Training Timer.
//!
//! This module owns every piece of dashboard state:
//! - Settings and the derived timer display state
//! - Countdown and elapsed-time bookkeeping
//! - Phase transitions and manual navigation
//! - Views, the menu and the reps-mode notice
//!
//! Every change is reported on an event channel so front-ends can redraw.

use anyhow::{Context, Result};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::types::{
    MessageState, Phase, SettingKey, SettingValue, TimerSettings, TimerState, View,
};

use super::duration::format_duration;
use super::navigation::{self, Position};
use super::phase::{next_phase, Progress, Transition};
use super::session::total_session_seconds;

/// Shown in place of the session total when a duration does not parse.
pub const INVALID_TIME: &str = "--:--";

// ============================================================================
// TimerEvent
// ============================================================================

/// Dashboard events for front-ends and cues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerEvent {
    /// Timer started or resumed
    Played,
    /// Timer paused
    Paused,
    /// Progress reset by stop
    Stopped,
    /// A new phase started after the previous one ran out
    PhaseStarted {
        phase: Phase,
        set: u32,
        cycle: u32,
        /// Length of the new phase in seconds
        duration_seconds: u32,
    },
    /// The last rest of the last cycle finished
    SessionCompleted {
        elapsed_seconds: u32,
    },
    /// One second elapsed
    Tick {
        remaining_seconds: u32,
        elapsed_seconds: u32,
    },
    /// Set/cycle pointer moved by next or previous
    Navigated {
        set: u32,
        cycle: u32,
    },
    /// Settings were edited and the countdown reset
    SettingsChanged {
        /// Planned session length, `None` when a duration is malformed
        total_seconds: Option<i64>,
    },
    /// The reps-mode notice became visible
    NoticeShown {
        text: String,
    },
}

// ============================================================================
// DashboardEngine
// ============================================================================

/// Owns the dashboard settings and timer state.
pub struct DashboardEngine {
    settings: TimerSettings,
    state: TimerState,
    message: MessageState,
    view: View,
    menu_open: bool,
    /// Seconds left in the current phase
    remaining_seconds: u32,
    /// Seconds counted since the last reset
    elapsed_seconds: u32,
    /// Planned session length, `None` when a duration is malformed
    session_seconds: Option<i64>,
    event_tx: mpsc::UnboundedSender<TimerEvent>,
}

impl DashboardEngine {
    /// Creates an engine with the given settings and event channel.
    ///
    /// The countdown starts reset: prepare phase, first set and cycle.
    pub fn new(settings: TimerSettings, event_tx: mpsc::UnboundedSender<TimerEvent>) -> Self {
        let mut engine = Self {
            settings,
            state: TimerState::default(),
            message: MessageState::default(),
            view: View::default(),
            menu_open: false,
            remaining_seconds: 0,
            elapsed_seconds: 0,
            session_seconds: None,
            event_tx,
        };
        engine.reset_for_settings();
        engine
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    pub fn settings(&self) -> &TimerSettings {
        &self.settings
    }

    pub fn state(&self) -> &TimerState {
        &self.state
    }

    pub fn message(&self) -> &MessageState {
        &self.message
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    pub fn elapsed_seconds(&self) -> u32 {
        self.elapsed_seconds
    }

    /// Planned session length, `None` when a duration is malformed.
    pub fn session_seconds(&self) -> Option<i64> {
        self.session_seconds
    }

    /// Returns true while the tick driver should keep firing.
    pub fn should_tick(&self) -> bool {
        self.state.is_playing && self.remaining_seconds > 0
    }

    // ------------------------------------------------------------------------
    // Timer controls
    // ------------------------------------------------------------------------

    /// Toggles between playing and paused.
    ///
    /// Starting on a phase with no time left completes it straight away.
    pub fn play_pause(&mut self) -> Result<()> {
        self.state.is_paused = self.state.is_playing;
        self.state.is_playing = !self.state.is_playing;

        if self.state.is_playing {
            debug!(phase = %self.state.phase, "timer playing");
            self.emit(TimerEvent::Played)?;
            self.skip_empty_phases()?;
            self.sync_display();
        } else {
            debug!(phase = %self.state.phase, "timer paused");
            self.emit(TimerEvent::Paused)?;
        }
        Ok(())
    }

    /// Resets all progress back to the prepare phase.
    pub fn stop(&mut self) -> Result<()> {
        self.state.is_playing = false;
        self.state.is_paused = false;
        self.state.phase = Phase::Prepare;
        self.state.current_set = 1;
        self.state.current_cycle = 1;
        self.remaining_seconds = self.phase_seconds(Phase::Prepare);
        self.elapsed_seconds = 0;
        self.sync_display();

        info!("timer stopped");
        self.emit(TimerEvent::Stopped)
    }

    /// Moves the set/cycle pointer one step forward.
    pub fn next(&mut self) -> Result<()> {
        let pos = navigation::next(
            self.position(),
            self.state.total_cycles,
            self.state.total_sets,
        );
        self.navigate_to(pos)
    }

    /// Moves the set/cycle pointer one step back.
    pub fn previous(&mut self) -> Result<()> {
        let pos = navigation::previous(
            self.position(),
            self.state.total_cycles,
            self.state.total_sets,
        );
        self.navigate_to(pos)
    }

    /// Advances the countdown by one second.
    ///
    /// Returns true if at least one phase completed during this tick.
    pub fn tick(&mut self) -> Result<bool> {
        if !self.should_tick() {
            return Ok(false);
        }

        self.remaining_seconds -= 1;
        self.elapsed_seconds += 1;

        let completed = self.remaining_seconds == 0;
        self.skip_empty_phases()?;
        self.sync_display();

        self.emit(TimerEvent::Tick {
            remaining_seconds: self.remaining_seconds,
            elapsed_seconds: self.elapsed_seconds,
        })?;
        Ok(completed)
    }

    // ------------------------------------------------------------------------
    // Settings
    // ------------------------------------------------------------------------

    /// Edits one settings field and resets the countdown.
    ///
    /// Switching a reps toggle on shows the reps-mode notice.
    pub fn change_setting(&mut self, key: SettingKey, value: SettingValue) -> Result<()> {
        let shows_notice = matches!(key, SettingKey::WorkReps | SettingKey::RestReps)
            && value == SettingValue::Flag(true);

        self.settings
            .apply(key, value)
            .with_context(|| format!("Failed to change setting '{}'", key))?;
        debug!(%key, "setting changed");

        self.settings_changed()?;

        if shows_notice {
            self.message = MessageState::reps_notice();
            self.emit(TimerEvent::NoticeShown {
                text: self.message.text.clone(),
            })?;
        }
        Ok(())
    }

    /// Replaces the whole settings object and resets the countdown.
    pub fn replace_settings(&mut self, settings: TimerSettings) -> Result<()> {
        self.settings = settings;
        self.settings_changed()
    }

    // ------------------------------------------------------------------------
    // Views and notice
    // ------------------------------------------------------------------------

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Switches the view and closes the menu.
    pub fn change_view(&mut self, view: View) {
        self.view = view;
        self.menu_open = false;
    }

    /// Leaves the settings screen for the view that fits the viewport.
    pub fn done(&mut self, viewport_width: u32) {
        self.view = View::after_done(viewport_width);
    }

    pub fn close_message(&mut self) {
        self.message.is_visible = false;
    }

    pub fn set_dont_show_again(&mut self, checked: bool) {
        self.message.is_dont_show_again_checked = checked;
    }

    // ------------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------------

    fn position(&self) -> Position {
        Position::new(self.state.current_cycle, self.state.current_set)
    }

    fn navigate_to(&mut self, pos: Position) -> Result<()> {
        self.state.current_cycle = pos.cycle;
        self.state.current_set = pos.set;

        // The phase stays put; only rest keeps its own length.
        let timed_phase = if self.state.phase == Phase::Rest {
            Phase::Rest
        } else {
            Phase::Work
        };
        self.remaining_seconds = self.phase_seconds(timed_phase);
        self.sync_display();

        debug!(cycle = pos.cycle, set = pos.set, "navigated");
        self.emit(TimerEvent::Navigated {
            set: pos.set,
            cycle: pos.cycle,
        })?;

        self.skip_empty_phases()?;
        self.sync_display();
        Ok(())
    }

    fn settings_changed(&mut self) -> Result<()> {
        self.reset_for_settings();
        self.emit(TimerEvent::SettingsChanged {
            total_seconds: self.session_seconds,
        })?;

        self.skip_empty_phases()?;
        self.sync_display();
        Ok(())
    }

    fn reset_for_settings(&mut self) {
        self.session_seconds = match total_session_seconds(&self.settings) {
            Ok(total) => Some(total),
            Err(e) => {
                warn!("Session total unavailable: {}", e);
                None
            }
        };

        self.state.total_sets = self.settings.sets;
        self.state.total_cycles = self.settings.cycles;
        self.state.phase = Phase::Prepare;
        self.state.current_set = 1;
        self.state.current_cycle = 1;
        self.remaining_seconds = self.phase_seconds(Phase::Prepare);
        self.elapsed_seconds = 0;
        self.sync_display();
    }

    /// Completes phases until one has time left or the session ends.
    fn skip_empty_phases(&mut self) -> Result<()> {
        while self.state.is_playing && self.remaining_seconds == 0 {
            self.complete_phase()?;
        }
        Ok(())
    }

    fn complete_phase(&mut self) -> Result<()> {
        let progress = Progress {
            phase: self.state.phase,
            current_set: self.state.current_set,
            total_sets: self.state.total_sets,
            current_cycle: self.state.current_cycle,
            total_cycles: self.state.total_cycles,
        };

        match next_phase(&progress) {
            Transition::Next { phase, set, cycle } => {
                self.state.phase = phase;
                self.state.current_set = set;
                self.state.current_cycle = cycle;
                self.remaining_seconds = self.phase_seconds(phase);

                info!(%phase, set, cycle, "phase started");
                self.emit(TimerEvent::PhaseStarted {
                    phase,
                    set,
                    cycle,
                    duration_seconds: self.remaining_seconds,
                })
            }
            Transition::Complete => {
                self.state.is_playing = false;
                self.remaining_seconds = 0;

                info!(elapsed = self.elapsed_seconds, "session complete");
                self.emit(TimerEvent::SessionCompleted {
                    elapsed_seconds: self.elapsed_seconds,
                })
            }
        }
    }

    /// Seconds of the given phase; a malformed duration counts as zero.
    fn phase_seconds(&self, phase: Phase) -> u32 {
        match self.settings.seconds_for(phase) {
            Ok(seconds) => seconds,
            Err(e) => {
                warn!(%phase, "Treating phase as empty: {}", e);
                0
            }
        }
    }

    fn sync_display(&mut self) {
        self.state.current_time = format_duration(i64::from(self.remaining_seconds));
        self.state.total_time = if self.elapsed_seconds > 0 {
            format_duration(i64::from(self.elapsed_seconds))
        } else {
            self.session_seconds
                .map(format_duration)
                .unwrap_or_else(|| INVALID_TIME.to_string())
        };
    }

    fn emit(&self, event: TimerEvent) -> Result<()> {
        self.event_tx
            .send(event)
            .context("Failed to send dashboard event")
    }

    /// Returns a mutable reference to the timer state (for testing).
    #[cfg(test)]
    pub(crate) fn state_mut(&mut self) -> &mut TimerState {
        &mut self.state
    }
}

// ============================================================================
// Tests
// ============================================================================
