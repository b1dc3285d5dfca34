//! Autoplay timer.
//!
//! At most one timer task is live. Every arm gets a fresh generation
//! and ticks carry it, so a tick that was already queued when the timer
//! was cancelled is recognised as stale and dropped.

use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use crate::ui::events::AppEvent;

pub struct AutoplayTimer {
    interval: Duration,
    generation: u64,
    task: Option<JoinHandle<()>>,
}

impl AutoplayTimer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            generation: 0,
            task: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Cancel any live timer, then arm a new one whose first tick fires
    /// one interval from now. Must be called from within a tokio runtime.
    pub fn start(&mut self, events: UnboundedSender<AppEvent>) -> u64 {
        self.cancel();
        let generation = self.generation;
        let period = self.interval;
        self.task = Some(tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                if events.send(AppEvent::AutoplayTick { generation }).is_err() {
                    break;
                }
            }
        }));
        tracing::debug!(generation, interval_ms = period.as_millis() as u64, "Autoplay armed");
        generation
    }

    /// Stop the live timer, if any. Safe to call repeatedly.
    pub fn cancel(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        if let Some(task) = self.task.take() {
            task.abort();
            tracing::debug!("Autoplay cancelled");
        }
    }

    pub fn is_running(&self) -> bool {
        self.task.is_some()
    }

    /// True if a tick of `generation` comes from the live timer.
    pub fn accepts(&self, generation: u64) -> bool {
        self.task.is_some() && generation == self.generation
    }
}

impl Drop for AutoplayTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
