//! Paced breathing: inhale, hold, exhale, repeated for a number of cycles.

use super::{spawn_schedule, ExerciseHandle};
use crate::constants::{BREATHING_CYCLES, BREATHING_DWELL_SECS};
use std::fmt;
use std::time::Duration;
use tokio::sync::mpsc;

/// States of the breathing exercise.
///
/// `Idle` is the state before the first update; the task starts in `Inhale`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreathingPhase {
    Idle,
    Inhale,
    Hold,
    Exhale,
    Done,
}

impl BreathingPhase {
    /// The phase that follows this one. `Exhale` loops back to `Inhale`
    /// while cycles remain, which is why the caller says whether this is
    /// the last cycle.
    pub fn next(self, last_cycle: bool) -> Self {
        match self {
            BreathingPhase::Idle => BreathingPhase::Inhale,
            BreathingPhase::Inhale => BreathingPhase::Hold,
            BreathingPhase::Hold => BreathingPhase::Exhale,
            BreathingPhase::Exhale if last_cycle => BreathingPhase::Done,
            BreathingPhase::Exhale => BreathingPhase::Inhale,
            BreathingPhase::Done => BreathingPhase::Done,
        }
    }

    pub fn instruction(self) -> &'static str {
        match self {
            BreathingPhase::Idle => "Get comfortable...",
            BreathingPhase::Inhale => "Inhale...",
            BreathingPhase::Hold => "Hold...",
            BreathingPhase::Exhale => "Exhale...",
            BreathingPhase::Done => "Well done.",
        }
    }
}

impl fmt::Display for BreathingPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.instruction())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreathingConfig {
    pub cycles: u32,
    pub dwell: Duration,
}

impl Default for BreathingConfig {
    fn default() -> Self {
        BreathingConfig {
            cycles: BREATHING_CYCLES,
            dwell: Duration::from_secs(BREATHING_DWELL_SECS),
        }
    }
}

/// One phase change. `cycle` is 1-based; `Done` carries the cycle count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreathingUpdate {
    pub phase: BreathingPhase,
    pub cycle: u32,
}

/// Every update of a session, each paired with how long it lasts.
///
/// Steps are produced on demand by walking the state machine, so the
/// length of a session does not affect memory use.
pub fn plan(config: BreathingConfig) -> impl Iterator<Item = (BreathingUpdate, Duration)> + Send {
    let mut phase = BreathingPhase::Idle;
    let mut cycle = 0;

    std::iter::from_fn(move || {
        if phase == BreathingPhase::Done {
            return None;
        }
        phase = if config.cycles == 0 {
            BreathingPhase::Done
        } else {
            phase.next(cycle == config.cycles)
        };
        if phase == BreathingPhase::Inhale {
            cycle += 1;
        }
        let dwell = if phase == BreathingPhase::Done {
            Duration::ZERO
        } else {
            config.dwell
        };
        Some((BreathingUpdate { phase, cycle }, dwell))
    })
}

/// Starts a breathing session on the current tokio runtime.
///
/// The first update (`Inhale`, cycle 1) is sent immediately. Dropping the
/// receiver ends the session at its next transition.
pub fn start_breathing(config: BreathingConfig) -> (mpsc::Receiver<BreathingUpdate>, ExerciseHandle) {
    spawn_schedule(plan(config))
}
