//! Timer core for the Training Timer.
//!
//! This module contains the countdown machinery:
//! - `duration`: "MM:SS" codec
//! - `session`: planned session length
//! - `phase`: phase transition table
//! - `navigation`: manual next/previous over sets and cycles
//! - `engine`: dashboard state owner and event source
//! - `driver`: cancellable one-second tick task

pub mod driver;
pub mod duration;
pub mod engine;
pub mod navigation;
pub mod phase;
pub mod session;

pub use driver::{TickDriver, TICK_PERIOD};
pub use duration::{format_duration, parse_duration, DurationError};
pub use engine::{DashboardEngine, TimerEvent, INVALID_TIME};
pub use navigation::Position;
pub use phase::{next_phase, Progress, Transition};
pub use session::total_session_seconds;
