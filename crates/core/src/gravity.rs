//! Gravity clock
//!
//! Accumulates elapsed time and reports how many fixed-interval ticks are due.
//! The driver feeds each due tick to [`Controller::tick`](crate::Controller::tick)
//! and disarms the clock once the game is over; a disarmed clock never fires
//! again.

use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gravity {
    interval_ms: u32,
    elapsed_ms: u32,
    armed: bool,
}

impl Gravity {
    /// Create an armed clock. A zero interval is treated as 1ms.
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            elapsed_ms: 0,
            armed: true,
        }
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Time left until the next tick, or `None` when disarmed
    pub fn remaining_ms(&self) -> Option<u32> {
        self.armed
            .then(|| self.interval_ms.saturating_sub(self.elapsed_ms))
    }

    /// Advance the clock and return the number of ticks now due
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        if !self.armed {
            return 0;
        }
        self.elapsed_ms = self.elapsed_ms.saturating_add(elapsed_ms);
        let due = self.elapsed_ms / self.interval_ms;
        self.elapsed_ms %= self.interval_ms;
        due
    }

    /// [`advance`](Self::advance) by a wall-clock duration. Durations beyond
    /// `u32::MAX` milliseconds saturate.
    pub fn advance_by(&mut self, elapsed: Duration) -> u32 {
        let elapsed_ms = u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX);
        self.advance(elapsed_ms)
    }

    /// Stop scheduling ticks
    pub fn disarm(&mut self) {
        self.armed = false;
        self.elapsed_ms = 0;
    }
}
