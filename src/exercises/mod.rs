//! Guided exercises driven by timers.
//!
//! Each exercise is a fixed schedule of updates. A spawned tokio task walks
//! the schedule, sending one update and then waiting for its dwell time. The
//! receiving side only displays updates and never talks back. The task stops
//! early when the receiver is dropped or the handle is cancelled, and it never
//! touches the store.

pub mod breathing;
pub mod meditation;

use crate::constants::TIMER_CHANNEL_CAPACITY;
use crate::errors::{AppError, AppResult};
use std::future::Future;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::debug;

pub use breathing::{start_breathing, BreathingConfig, BreathingPhase, BreathingUpdate};
pub use meditation::{format_clock, start_meditation, MeditationUpdate};

/// Control over a running exercise task.
#[derive(Debug)]
pub struct ExerciseHandle {
    cancel: CancellationToken,
    task: JoinHandle<()>,
}

impl ExerciseHandle {
    /// Stops the exercise at its next step. No further updates are sent.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Cancels the exercise once `signal` completes, e.g. on Ctrl-C.
    ///
    /// Must be called from within a tokio runtime.
    pub fn cancel_when<F>(&self, signal: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let token = self.cancel.clone();
        tokio::spawn(async move {
            tokio::select! {
                _ = signal => {
                    debug!("Exercise interrupted");
                    token.cancel();
                }
                _ = token.cancelled() => {}
            }
        });
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Waits for the task to stop.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Timer` if the task panicked or was aborted.
    pub async fn join(self) -> AppResult<()> {
        self.task
            .await
            .map_err(|e| AppError::Timer(format!("Exercise task failed: {}", e)))
    }
}

/// Spawns a task that sends each `(update, dwell)` step in order.
///
/// Must be called from within a tokio runtime.
pub(crate) fn spawn_schedule<T, I>(steps: I) -> (mpsc::Receiver<T>, ExerciseHandle)
where
    T: Send + 'static,
    I: IntoIterator<Item = (T, Duration)>,
    I::IntoIter: Send + 'static,
{
    let (tx, rx) = mpsc::channel(TIMER_CHANNEL_CAPACITY);
    let cancel = CancellationToken::new();
    let token = cancel.clone();
    let steps = steps.into_iter();

    let task = tokio::spawn(async move {
        for (update, dwell) in steps {
            tokio::select! {
                _ = token.cancelled() => {
                    debug!("Exercise cancelled");
                    return;
                }
                sent = tx.send(update) => {
                    if sent.is_err() {
                        debug!("Exercise receiver dropped");
                        return;
                    }
                }
            }

            if dwell.is_zero() {
                continue;
            }
            tokio::select! {
                _ = token.cancelled() => {
                    debug!("Exercise cancelled");
                    return;
                }
                _ = tx.closed() => {
                    debug!("Exercise receiver dropped");
                    return;
                }
                _ = tokio::time::sleep(dwell) => {}
            }
        }
        debug!("Exercise finished");
    });

    (rx, ExerciseHandle { cancel, task })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn test_schedule_sends_in_order_with_dwell() {
        let start = Instant::now();
        let steps = vec![
            ("a", Duration::from_secs(2)),
            ("b", Duration::from_secs(3)),
            ("c", Duration::ZERO),
        ];
        let (mut rx, handle) = spawn_schedule(steps);

        assert_eq!(rx.recv().await, Some("a"));
        assert_eq!(rx.recv().await, Some("b"));
        assert!(start.elapsed() >= Duration::from_secs(2));
        assert_eq!(rx.recv().await, Some("c"));
        assert!(start.elapsed() >= Duration::from_secs(5));
        assert_eq!(rx.recv().await, None);
        handle.join().await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_signal_cancels_running_exercise() {
        let steps = vec![(1, Duration::from_secs(10)), (2, Duration::from_secs(10))];
        let (mut rx, handle) = spawn_schedule(steps);
        let (interrupt, interrupted) = tokio::sync::oneshot::channel::<()>();
        handle.cancel_when(async move {
            let _ = interrupted.await;
        });

        assert_eq!(rx.recv().await, Some(1));
        assert!(!handle.is_cancelled());
        interrupt.send(()).unwrap();

        assert_eq!(rx.recv().await, None);
        assert!(handle.is_cancelled());
        handle.join().await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_stops_further_updates() {
        let steps = vec![(1, Duration::from_secs(10)), (2, Duration::from_secs(10))];
        let (mut rx, handle) = spawn_schedule(steps);

        assert_eq!(rx.recv().await, Some(1));
        handle.cancel();
        handle.join().await.unwrap();
        assert_eq!(rx.recv().await, None);
    }
}
