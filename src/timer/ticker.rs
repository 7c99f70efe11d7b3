//! One-second tick sources, one per running timer
//!
//! Each running countdown owns exactly one spawned tokio task that fires
//! once a second and reports the task id over a channel. The tasks never
//! touch timer state; the event loop on the receiving side applies the
//! ticks, so all mutation stays single-threaded.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::task::TaskId;

pub type TickSender = mpsc::UnboundedSender<TaskId>;
pub type TickReceiver = mpsc::UnboundedReceiver<TaskId>;

/// Creates the channel tick sources report on. The receiving half lives on
/// the TUI event loop, which drains it between input polls.
pub fn tick_channel() -> (TickSender, TickReceiver) {
    mpsc::unbounded_channel()
}

/// Ownership handle for one armed tick source. Dropping it aborts the
/// spawned task, so pause, expiry, and task deletion all cancel pending
/// ticks through the runtime rather than a flag the callback would have to
/// check.
#[derive(Debug)]
pub struct TickHandle {
    handle: JoinHandle<()>,
}

impl TickHandle {
    /// Arms a repeating one-second tick for `id`.
    pub fn spawn(id: TaskId, tx: TickSender) -> Self {
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(1));
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            // The first interval tick completes immediately; consume it so
            // the first delivery lands one second after arming.
            interval.tick().await;
            loop {
                interval.tick().await;
                if tx.send(id).is_err() {
                    break;
                }
            }
        });
        Self { handle }
    }
}

impl Drop for TickHandle {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
