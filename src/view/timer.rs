//! Cancellable periodic task.
//!
//! A `PeriodicTimer` is acquired when a view mounts and cancelled when it
//! unmounts. Cancelling is idempotent: the task handle is taken on the first
//! call, so a second call (or the `Drop` that follows an explicit cancel) has
//! nothing left to abort.

use crate::app::event::{AppEvent, Generation};
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

/// Heartbeat cadence of the root view.
pub const HEARTBEAT_PERIOD: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    Running,
    Stopped,
}

#[derive(Debug)]
pub struct PeriodicTimer {
    generation: Generation,
    task: Option<JoinHandle<()>>,
}

impl PeriodicTimer {
    /// Spawn a task that sends `AppEvent::Heartbeat` every `period`, starting
    /// one period from now. Must be called inside a tokio runtime.
    pub fn start(generation: Generation, period: Duration, tx: UnboundedSender<AppEvent>) -> Self {
        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if tx.send(AppEvent::Heartbeat { generation }).is_err() {
                    break;
                }
            }
        });
        tracing::debug!(generation, ?period, "heartbeat timer started");
        Self {
            generation,
            task: Some(task),
        }
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn state(&self) -> TimerState {
        if self.task.is_some() {
            TimerState::Running
        } else {
            TimerState::Stopped
        }
    }

    /// Stop future ticks. Returns `true` only for the call that actually
    /// stopped the task.
    pub fn cancel(&mut self) -> bool {
        match self.task.take() {
            Some(task) => {
                task.abort();
                tracing::debug!(generation = self.generation, "heartbeat timer cancelled");
                true
            }
            None => false,
        }
    }
}

impl Drop for PeriodicTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    fn drain(rx: &mut mpsc::UnboundedReceiver<AppEvent>) -> Vec<Generation> {
        let mut out = Vec::new();
        while let Ok(event) = rx.try_recv() {
            if let AppEvent::Heartbeat { generation } = event {
                out.push(generation);
            }
        }
        out
    }

    #[tokio::test(start_paused = true)]
    async fn test_first_tick_after_one_period() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let _timer = PeriodicTimer::start(1, HEARTBEAT_PERIOD, tx);

        tokio::time::sleep(Duration::from_millis(999)).await;
        assert!(drain(&mut rx).is_empty());

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(drain(&mut rx), vec![1]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticks_stop_after_cancel() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut timer = PeriodicTimer::start(7, HEARTBEAT_PERIOD, tx);

        tokio::time::sleep(Duration::from_millis(3500)).await;
        assert_eq!(drain(&mut rx), vec![7, 7, 7]);

        assert!(timer.cancel());
        assert_eq!(timer.state(), TimerState::Stopped);

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(drain(&mut rx).is_empty());
    }

    #[tokio::test]
    async fn test_cancel_only_once() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut timer = PeriodicTimer::start(0, HEARTBEAT_PERIOD, tx);
        assert_eq!(timer.state(), TimerState::Running);
        assert!(timer.cancel());
        assert!(!timer.cancel());
        assert_eq!(timer.state(), TimerState::Stopped);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        drop(PeriodicTimer::start(3, HEARTBEAT_PERIOD, tx));

        tokio::time::sleep(Duration::from_secs(3)).await;
        assert!(drain(&mut rx).is_empty());
    }
}
