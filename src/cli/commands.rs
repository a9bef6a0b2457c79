//! Command definitions for the Training Timer CLI.
//!
//! Uses clap derive macro for argument parsing.

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::timer::parse_duration;
use crate::types::TimerSettings;

// ============================================================================
// CLI Structure
// ============================================================================

/// Training Timer - interval timer with sets and cycles
#[derive(Parser, Debug)]
#[command(
    name = "training-timer",
    version,
    about = "Interval training timer: prepare, warm-up, work, rest and cycle rest",
    propagate_version = true
)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

// ============================================================================
// Subcommands
// ============================================================================

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Run a training session in the terminal
    Run(RunArgs),

    /// Print the planned session time
    Total(SettingsArgs),

    /// Generate shell completion scripts
    Completions {
        /// Shell type for completion script
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

// ============================================================================
// Arguments
// ============================================================================

/// Timer settings flags
#[derive(Args, Debug, Clone)]
pub struct SettingsArgs {
    /// Countdown before the session (MM:SS)
    #[arg(long, default_value = "00:03", value_parser = validate_duration)]
    pub prepare: String,

    /// Warm-up duration (MM:SS)
    #[arg(long, default_value = "05:00", value_parser = validate_duration)]
    pub warm_up: String,

    /// Work duration per set (MM:SS)
    #[arg(long, default_value = "00:30", value_parser = validate_duration)]
    pub work: String,

    /// Rest duration per set (MM:SS)
    #[arg(long, default_value = "00:20", value_parser = validate_duration)]
    pub rest: String,

    /// Rest between cycles (MM:SS)
    #[arg(long, default_value = "00:30", value_parser = validate_duration)]
    pub cycle_rest: String,

    /// Work/rest repetitions per cycle
    #[arg(long, default_value = "3")]
    pub sets: u32,

    /// Number of cycles
    #[arg(long, default_value = "5")]
    pub cycles: u32,

    /// Work phase resumes manually (reps mode)
    #[arg(long)]
    pub work_reps: bool,

    /// Rest phase resumes manually (reps mode); pass false to resume automatically
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    pub rest_reps: bool,
}

impl From<&SettingsArgs> for TimerSettings {
    fn from(args: &SettingsArgs) -> Self {
        Self {
            prepare: args.prepare.clone(),
            warm_up: args.warm_up.clone(),
            work: args.work.clone(),
            rest: args.rest.clone(),
            sets: args.sets,
            cycles: args.cycles,
            cycle_rest: args.cycle_rest.clone(),
            work_reps: args.work_reps,
            rest_reps: args.rest_reps,
        }
    }
}

/// Arguments for the run command
#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    #[command(flatten)]
    pub settings: SettingsArgs,

    /// Language of the dashboard (en-US, es-AR, pt-BR)
    #[arg(short, long, default_value = "es-AR")]
    pub locale: String,

    /// Play the tick cue every second
    #[arg(long)]
    pub tick_cue: bool,
}

// ============================================================================
// Validation Functions
// ============================================================================

/// Validates a "MM:SS" duration flag.
fn validate_duration(s: &str) -> Result<String, String> {
    parse_duration(s).map_err(|e| e.to_string())?;
    Ok(s.to_string())
}

// ============================================================================
// Tests
// ============================================================================
