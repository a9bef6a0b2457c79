//! Display utilities for the Training Timer CLI.
//!
//! This module renders the dashboard for the terminal:
//! - The status line (phase, countdown, total, sets and cycles)
//! - Phase changes, notices and the end of the session
//! - Planned session totals and errors

use crate::i18n::Translator;
use crate::timer::{format_duration, TimerEvent, INVALID_TIME};
use crate::types::{TimerSettings, TimerState};

// ============================================================================
// Display
// ============================================================================

/// Display utilities for CLI output.
pub struct Display;

impl Display {
    /// Shows the dashboard title and key bindings.
    pub fn show_header(t: &Translator) {
        println!("{}", t.t("dashboard.title"));
        println!("─────────────────────────────");
        println!(
            "p: {}/{}  s: {}  n: next  b: previous  q: quit",
            t.t("controllers.start"),
            t.t("controllers.pause"),
            t.t("controllers.stop"),
        );
    }

    /// Shows the current status line.
    pub fn show_state(state: &TimerState, t: &Translator) {
        println!("{}", Self::status_line(state, t));
    }

    /// Shows the message for an event, if it has one.
    pub fn show_event(event: &TimerEvent, t: &Translator) {
        if let Some(line) = Self::event_line(event, t) {
            println!("{}", line);
        }
    }

    /// Shows the planned session time.
    pub fn show_total(settings: &TimerSettings, total_seconds: Option<i64>) {
        let total = total_seconds
            .map(format_duration)
            .unwrap_or_else(|| INVALID_TIME.to_string());
        println!("Session: {}", total);
        println!(
            "  {} x {} sets, {} cycles",
            Self::work_rest_pair(settings),
            settings.sets,
            settings.cycles
        );
    }

    /// Shows an error message.
    pub fn show_error(message: &str) {
        eprintln!("Error: {}", message);
    }

    /// Formats the status line for a timer state.
    fn status_line(state: &TimerState, t: &Translator) -> String {
        let marker = if state.is_playing { ">" } else { "||" };
        format!(
            "{} [{} {}] {}  total {}  {} {}/{}  {} {}/{}",
            marker,
            state.phase,
            state.phase.color(),
            state.current_time,
            state.total_time,
            t.t("timer.sets"),
            state.current_set,
            state.total_sets,
            t.t("timer.cycles"),
            state.current_cycle,
            state.total_cycles,
        )
    }

    fn event_line(event: &TimerEvent, t: &Translator) -> Option<String> {
        match event {
            TimerEvent::PhaseStarted {
                phase, set, cycle, ..
            } => Some(format!("-- {} (set {}, cycle {})", phase, set, cycle)),
            TimerEvent::SessionCompleted { elapsed_seconds } => Some(format!(
                "* {} {}",
                t.t("messages.allSessionsComplete"),
                format_duration(i64::from(*elapsed_seconds))
            )),
            TimerEvent::NoticeShown { text } => Some(format!("! {}", text)),
            TimerEvent::Stopped => Some(format!("[] {}", t.t("controllers.stop"))),
            _ => None,
        }
    }

    fn work_rest_pair(settings: &TimerSettings) -> String {
        format!("{}/{}", settings.work, settings.rest)
    }
}

// ============================================================================
// Tests
// ============================================================================
