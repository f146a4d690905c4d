//! Gravity interval with linear acceleration down to a floor.

use std::time::Duration;

use crate::types::{DROP_STEP_MS, FINAL_DROP_US, INITIAL_DROP_MS};

/// Current interval between automatic drops.
///
/// Starts at `initial`, shrinks by `step` after each successful drop and never
/// goes below `floor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropRate {
    interval: Duration,
    floor: Duration,
    step: Duration,
}

impl Default for DropRate {
    fn default() -> Self {
        Self::new(
            Duration::from_millis(INITIAL_DROP_MS),
            Duration::from_micros(FINAL_DROP_US),
            Duration::from_millis(DROP_STEP_MS),
        )
    }
}

impl DropRate {
    /// A floor above `initial` is lowered to `initial`.
    pub fn new(initial: Duration, floor: Duration, step: Duration) -> Self {
        Self {
            interval: initial,
            floor: floor.min(initial),
            step,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn floor(&self) -> Duration {
        self.floor
    }

    pub fn at_floor(&self) -> bool {
        self.interval <= self.floor
    }

    /// Apply one tick of acceleration.
    pub fn advance(&mut self) {
        if self.interval > self.floor {
            self.interval = self.interval.saturating_sub(self.step).max(self.floor);
        }
    }
}
