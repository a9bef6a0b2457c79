//! Training Timer CLI - interval training in the terminal
//!
//! Each session runs:
//! - a prepare countdown and a warm-up
//! - work/rest sets, grouped into cycles
//! - a cycle rest between cycles

use anyhow::Result;
use clap::{CommandFactory, Parser};

use training_timer::cli::{run_session, Cli, Commands, Display};
use training_timer::cue::SilentCuePlayer;
use training_timer::timer::total_session_seconds;
use training_timer::types::TimerSettings;

/// Main entry point
#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging
    init_tracing(cli.verbose);

    // Execute command
    if let Err(e) = execute(cli).await {
        Display::show_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

/// Initializes the tracing subscriber for logging.
fn init_tracing(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}

/// Executes the CLI command.
async fn execute(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::Run(args)) => {
            let settings = TimerSettings::from(&args.settings);
            run_session(settings, &args.locale, &SilentCuePlayer, args.tick_cue).await?;
        }
        Some(Commands::Total(args)) => {
            let settings = TimerSettings::from(&args);
            let total = total_session_seconds(&settings)?;
            Display::show_total(&settings, Some(total));
        }
        Some(Commands::Completions { shell }) => {
            generate_completions(shell);
        }
        None => {
            // No command provided, show help
            Cli::command().print_help()?;
        }
    }

    Ok(())
}

/// Generates shell completion scripts.
fn generate_completions(shell: clap_complete::Shell) {
    use clap_complete::generate;
    use std::io;

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    generate(shell, &mut cmd, bin_name, &mut io::stdout());
}

// ============================================================================
// Tests
// ============================================================================
