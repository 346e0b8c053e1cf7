//! The shared poll timer.
//!
//! One `PollTimer` drives both the session-status poll and the order
//! list poll. It is an owned resource: starting it spawns a task that
//! sends a [`Tick`] every period; `stop()` or dropping the timer aborts
//! that task. Stopping is idempotent, so the task is aborted exactly
//! once whichever path (explicit stop, error unwind, drop) gets there
//! first.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick;

pub type TickTx = mpsc::UnboundedSender<Tick>;
pub type TickRx = mpsc::UnboundedReceiver<Tick>;

#[derive(Debug)]
pub struct PollTimer {
    handle: Option<JoinHandle<()>>,
    period: Duration,
}

impl PollTimer {
    /// Start ticking. The first tick arrives one full `period` after
    /// start; the caller does its own immediate fetch on mount.
    pub fn start(period: Duration, tx: TickTx) -> Self {
        let period = period.max(Duration::from_millis(1));

        let handle = tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            // A slow frame or suspended terminal should not release a
            // burst of catch-up polls.
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                if tx.send(Tick).is_err() {
                    break;
                }
            }
        });

        info!(period_ms = period.as_millis() as u64, "poll timer started");
        PollTimer {
            handle: Some(handle),
            period,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// Abort the timer task. Returns `false` if it was already stopped.
    pub fn stop(&mut self) -> bool {
        match self.handle.take() {
            Some(handle) => {
                handle.abort();
                info!("poll timer cleared");
                true
            }
            None => false,
        }
    }
}

impl Drop for PollTimer {
    fn drop(&mut self) {
        self.stop();
    }
}
