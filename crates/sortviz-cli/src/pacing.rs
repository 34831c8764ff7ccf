//! Fixed-budget frame pacing.

use std::time::{Duration, Instant};

/// Sleeps away whatever is left of each frame's budget.
///
/// Frames that overrun their budget are not compensated; the next frame
/// simply starts late.
#[derive(Debug)]
pub struct FrameClock {
    budget: Duration,
    frame_start: Instant,
}

impl FrameClock {
    pub fn new(budget: Duration) -> Self {
        Self {
            budget,
            frame_start: Instant::now(),
        }
    }

    /// Mark the start of a frame.
    pub fn begin(&mut self) {
        self.frame_start = Instant::now();
    }

    /// Time left in the current frame, if any.
    pub fn remaining(&self) -> Option<Duration> {
        self.budget.checked_sub(self.frame_start.elapsed())
    }

    /// Block until the current frame's budget is spent.
    pub fn sleep_remaining(&self) {
        if let Some(remaining) = self.remaining() {
            std::thread::sleep(remaining);
        }
    }
}
