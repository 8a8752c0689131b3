//! Tokio-driven tick scheduler
//!
//! Each scheduled ticker owns one task that sends [`FlowEvent::Tick`] every
//! second on a channel. The owner of the flow reads the channel and feeds the
//! events back into the flow, so the flow itself is never touched from the
//! task. Ticks carry the epoch they were scheduled with: a tick still queued
//! when its task is aborted is recognized as stale by the flow.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, error};

use idv_core::services::verification::{FlowEvent, TickScheduler};

/// Interval between countdown ticks
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// [`TickScheduler`] backed by a spawned tokio task
pub struct TokioTicker {
    sender: mpsc::Sender<FlowEvent>,
    period: Duration,
    task: Option<JoinHandle<()>>,
}

impl TokioTicker {
    pub fn new(sender: mpsc::Sender<FlowEvent>) -> Self {
        Self::with_period(sender, TICK_PERIOD)
    }

    pub fn with_period(sender: mpsc::Sender<FlowEvent>, period: Duration) -> Self {
        Self {
            sender,
            period,
            task: None,
        }
    }

    fn spawn(&self, epoch: u64) -> Option<JoinHandle<()>> {
        let handle = match tokio::runtime::Handle::try_current() {
            Ok(handle) => handle,
            Err(e) => {
                error!(error = %e, event = "ticker_unavailable", "No tokio runtime to schedule ticks on");
                return None;
            }
        };

        let sender = self.sender.clone();
        let period = self.period;
        Some(handle.spawn(async move {
            // The first tick fires one period after scheduling
            let mut interval = interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if sender.send(FlowEvent::Tick(epoch)).await.is_err() {
                    debug!(event = "ticker_receiver_closed");
                    break;
                }
            }
        }))
    }
}

impl TickScheduler for TokioTicker {
    fn schedule(&mut self, epoch: u64) {
        self.cancel();
        self.task = self.spawn(epoch);
        debug!(event = "ticker_scheduled", epoch, period_ms = self.period.as_millis() as u64);
    }

    fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            debug!(event = "ticker_cancelled");
        }
    }

    fn is_active(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }
}

impl Drop for TokioTicker {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
