//! One-second tick driver.
//!
//! Runs the dashboard countdown on a tokio interval. The driver keeps at most
//! one live task: every action that changes the play state or resets the
//! remaining time aborts the current task and arms a new one.

use std::sync::Arc;

use anyhow::Result;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Duration, Instant, MissedTickBehavior};
use tracing::{debug, warn};

use crate::types::{SettingKey, SettingValue, TimerSettings};

use super::engine::DashboardEngine;

/// Default tick period.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Drives a shared [`DashboardEngine`] once per period while it is playing.
pub struct TickDriver {
    engine: Arc<Mutex<DashboardEngine>>,
    period: Duration,
    task: Option<JoinHandle<()>>,
}

impl TickDriver {
    /// Creates a driver with a one-second period. Nothing is armed yet.
    pub fn new(engine: Arc<Mutex<DashboardEngine>>) -> Self {
        Self::with_period(engine, TICK_PERIOD)
    }

    /// Creates a driver with a custom period.
    pub fn with_period(engine: Arc<Mutex<DashboardEngine>>, period: Duration) -> Self {
        Self {
            engine,
            period,
            task: None,
        }
    }

    /// Returns the shared engine.
    pub fn engine(&self) -> &Arc<Mutex<DashboardEngine>> {
        &self.engine
    }

    /// Returns true if a tick task is alive.
    pub fn is_armed(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Cancels the live tick task, if any.
    pub fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            debug!("tick driver cancelled");
        }
    }

    /// Cancels the live task and arms a fresh one if the engine should tick.
    ///
    /// The first tick of the new task fires one full period from now.
    pub async fn rearm(&mut self) {
        self.cancel();

        if !self.engine.lock().await.should_tick() {
            return;
        }

        let engine = Arc::clone(&self.engine);
        let period = self.period;
        self.task = Some(tokio::spawn(run_ticks(engine, period)));
        debug!("tick driver armed");
    }

    // ------------------------------------------------------------------------
    // Actions that re-arm the schedule
    // ------------------------------------------------------------------------

    pub async fn play_pause(&mut self) -> Result<()> {
        self.engine.lock().await.play_pause()?;
        self.rearm().await;
        Ok(())
    }

    pub async fn stop(&mut self) -> Result<()> {
        self.engine.lock().await.stop()?;
        self.rearm().await;
        Ok(())
    }

    pub async fn next(&mut self) -> Result<()> {
        self.engine.lock().await.next()?;
        self.rearm().await;
        Ok(())
    }

    pub async fn previous(&mut self) -> Result<()> {
        self.engine.lock().await.previous()?;
        self.rearm().await;
        Ok(())
    }

    pub async fn change_setting(&mut self, key: SettingKey, value: SettingValue) -> Result<()> {
        self.engine.lock().await.change_setting(key, value)?;
        self.rearm().await;
        Ok(())
    }

    pub async fn replace_settings(&mut self, settings: TimerSettings) -> Result<()> {
        self.engine.lock().await.replace_settings(settings)?;
        self.rearm().await;
        Ok(())
    }
}

impl Drop for TickDriver {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Tick loop of a single armed task. Exits once the engine stops needing ticks.
async fn run_ticks(engine: Arc<Mutex<DashboardEngine>>, period: Duration) {
    let mut ticker = interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        ticker.tick().await;

        let mut engine = engine.lock().await;
        if let Err(e) = engine.tick() {
            warn!("Tick failed, stopping driver: {:#}", e);
            return;
        }
        if !engine.should_tick() {
            debug!("tick driver idle");
            return;
        }
    }
}
