//! Interactive session runner for the terminal.
//!
//! Starts the dashboard, renders every event, and reads one-letter commands
//! from stdin until the session completes or the user quits.

use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::{mpsc, Mutex};
use tracing::{debug, warn};

use crate::cue::{Cue, CuePlayer};
use crate::i18n::{Locale, Translator};
use crate::timer::{DashboardEngine, TickDriver, TimerEvent};
use crate::types::TimerSettings;

use super::display::Display;

/// Keyboard command typed during a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCommand {
    PlayPause,
    Stop,
    Next,
    Previous,
    Quit,
}

impl SessionCommand {
    /// Parses a typed line; case and surrounding spaces are ignored.
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim().to_ascii_lowercase().as_str() {
            "p" | "play" | "pause" => Some(Self::PlayPause),
            "s" | "stop" => Some(Self::Stop),
            "n" | "next" => Some(Self::Next),
            "b" | "prev" | "previous" => Some(Self::Previous),
            "q" | "quit" => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Runs a session until it completes or the user quits.
pub async fn run_session(
    settings: TimerSettings,
    locale: &str,
    cues: &impl CuePlayer,
    tick_cue: bool,
) -> Result<()> {
    let translator = Translator::new(Locale::resolve(locale))
        .context("Failed to load translations")?;

    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let engine = Arc::new(Mutex::new(DashboardEngine::new(settings, event_tx)));
    let mut driver = TickDriver::new(Arc::clone(&engine));

    Display::show_header(&translator);
    driver.play_pause().await?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdin_open = true;

    loop {
        tokio::select! {
            event = event_rx.recv() => {
                let Some(event) = event else { break };
                if let Some(cue) = Cue::for_event(&event, tick_cue) {
                    if let Err(e) = cues.play(cue) {
                        warn!("Cue failed: {}", e);
                    }
                }
                Display::show_event(&event, &translator);
                if matches!(event, TimerEvent::Tick { .. }) {
                    Display::show_state(engine.lock().await.state(), &translator);
                }
                if matches!(event, TimerEvent::SessionCompleted { .. }) {
                    break;
                }
            }
            line = lines.next_line(), if stdin_open => {
                match line.context("Failed to read stdin")? {
                    Some(line) => {
                        let Some(command) = SessionCommand::parse(&line) else {
                            debug!(input = %line, "ignored input");
                            continue;
                        };
                        if command == SessionCommand::Quit {
                            break;
                        }
                        apply_command(&mut driver, command).await?;
                        Display::show_state(engine.lock().await.state(), &translator);
                    }
                    None => {
                        debug!("stdin closed, session keeps running");
                        stdin_open = false;
                    }
                }
            }
        }
    }

    driver.cancel();
    Ok(())
}

async fn apply_command(driver: &mut TickDriver, command: SessionCommand) -> Result<()> {
    match command {
        SessionCommand::PlayPause => driver.play_pause().await,
        SessionCommand::Stop => driver.stop().await,
        SessionCommand::Next => driver.next().await,
        SessionCommand::Previous => driver.previous().await,
        SessionCommand::Quit => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Phase;
    use tokio::time::Duration;

    #[test]
    fn test_parse_commands() {
        assert_eq!(SessionCommand::parse("p"), Some(SessionCommand::PlayPause));
        assert_eq!(SessionCommand::parse(" Stop "), Some(SessionCommand::Stop));
        assert_eq!(SessionCommand::parse("n"), Some(SessionCommand::Next));
        assert_eq!(SessionCommand::parse("b"), Some(SessionCommand::Previous));
        assert_eq!(SessionCommand::parse("Q"), Some(SessionCommand::Quit));
        assert_eq!(SessionCommand::parse("jump"), None);
        assert_eq!(SessionCommand::parse(""), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_apply_command_drives_engine() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let engine = Arc::new(Mutex::new(DashboardEngine::new(
            TimerSettings::default(),
            tx,
        )));
        let mut driver = TickDriver::new(Arc::clone(&engine));

        apply_command(&mut driver, SessionCommand::PlayPause).await.unwrap();
        assert!(driver.is_armed());

        apply_command(&mut driver, SessionCommand::Next).await.unwrap();
        assert_eq!(engine.lock().await.state().current_cycle, 2);

        apply_command(&mut driver, SessionCommand::Previous).await.unwrap();
        assert_eq!(engine.lock().await.state().current_cycle, 1);

        tokio::time::sleep(Duration::from_millis(1500)).await;
        apply_command(&mut driver, SessionCommand::Stop).await.unwrap();

        let engine = engine.lock().await;
        assert_eq!(engine.state().phase, Phase::Prepare);
        assert_eq!(engine.elapsed_seconds(), 0);
        assert!(!driver.is_armed());
    }
}
