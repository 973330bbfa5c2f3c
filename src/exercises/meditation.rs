//! Meditation countdown.

use super::{spawn_schedule, ExerciseHandle};
use std::time::Duration;
use tokio::sync::mpsc;

const TICK: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeditationUpdate {
    /// Whole seconds left, sent once per second.
    Remaining(u64),
    Finished,
}

/// Formats seconds as `mm:ss`. Minutes are not capped at 59.
pub fn format_clock(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

fn countdown(total: Duration) -> impl Iterator<Item = (MeditationUpdate, Duration)> {
    (1..=total.as_secs())
        .rev()
        .map(|left| (MeditationUpdate::Remaining(left), TICK))
        .chain(std::iter::once((MeditationUpdate::Finished, Duration::ZERO)))
}

/// Starts a countdown of `total`, truncated to whole seconds.
pub fn start_meditation(total: Duration) -> (mpsc::Receiver<MeditationUpdate>, ExerciseHandle) {
    spawn_schedule(countdown(total))
}
