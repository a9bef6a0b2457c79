//! CLI module for the Training Timer.
//!
//! This module provides the command-line interface:
//! - `commands`: Command definitions using clap derive
//! - `display`: Output formatting and display logic
//! - `session`: Interactive session runner

pub mod commands;
pub mod display;
pub mod session;

pub use commands::{Cli, Commands, RunArgs, SettingsArgs};
pub use display::Display;
pub use session::{run_session, SessionCommand};
