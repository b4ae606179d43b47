//! One-second countdown timers tied to the lifetime of their handle.
//!
//! Countdowns back the auto-verification timer and the resend cooldowns.
//! Each one runs as a tokio task publishing the remaining seconds on a
//! `watch` channel. Dropping the [`Countdown`] aborts the task.
//!
//! While the task runs, [`Countdown::remaining`] is measured against the
//! deadline, so a reader waking on the same instant as the final tick
//! already sees zero.

use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior, interval_at};

const TICK: Duration = Duration::from_secs(1);

/// A running countdown.
///
/// # Examples
///
/// ```
/// use beam::domain::Countdown;
///
/// # #[tokio::main(flavor = "current_thread", start_paused = true)]
/// # async fn main() {
/// let mut countdown = Countdown::start(3);
/// assert_eq!(countdown.remaining(), 3);
/// countdown.finished().await;
/// assert_eq!(countdown.remaining(), 0);
/// # }
/// ```
#[derive(Debug)]
pub struct Countdown {
    remaining: watch::Receiver<u64>,
    deadline: Option<Instant>,
    task: JoinHandle<()>,
}

impl Countdown {
    /// Start counting down from `seconds`, one tick per second.
    ///
    /// Must be called from within a tokio runtime.
    #[must_use]
    pub fn start(seconds: u64) -> Self {
        let (tx, rx) = watch::channel(seconds);
        let deadline = Instant::now().checked_add(Duration::from_secs(seconds));
        let task = tokio::spawn(async move {
            let mut ticks = interval_at(Instant::now() + TICK, TICK);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);
            let mut left = seconds;
            while left > 0 {
                ticks.tick().await;
                left -= 1;
                if tx.send(left).is_err() {
                    break;
                }
            }
        });
        Self {
            remaining: rx,
            deadline,
            task,
        }
    }

    /// Seconds left, rounded up.
    ///
    /// A cancelled countdown keeps the value it last published.
    #[must_use]
    pub fn remaining(&self) -> u64 {
        let published = *self.remaining.borrow();
        match self.deadline {
            Some(deadline) if !self.task.is_finished() => {
                published.min(seconds_until(deadline))
            }
            _ => published,
        }
    }

    /// Whether the countdown has not yet reached zero.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.remaining() > 0 && !self.task.is_finished()
    }

    /// A receiver that observes every tick.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.remaining.clone()
    }

    /// Wait until the countdown reaches zero.
    ///
    /// Returns immediately if it already has, or if the task was aborted.
    pub async fn finished(&mut self) {
        // A closed channel means the task is gone; nothing left to wait for.
        let _closed = self.remaining.wait_for(|left| *left == 0).await;
    }

    /// Stop the countdown where it is.
    pub fn cancel(&self) {
        self.task.abort();
    }
}

fn seconds_until(deadline: Instant) -> u64 {
    let left = deadline.saturating_duration_since(Instant::now());
    left.as_secs() + u64::from(left.subsec_nanos() > 0)
}

impl Drop for Countdown {
    fn drop(&mut self) {
        self.task.abort();
    }
}
