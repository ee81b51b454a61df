// Copyright 2026 U.S. Federal Government (in countries where recognized)
// SPDX-License-Identifier: Apache-2.0

use std::thread;
use std::time::{Duration, Instant};

/// A millisecond tick counter and a blocking delay.
///
/// The counter only needs to be monotonic; its origin is arbitrary. The
/// driver compares readings with wrapping subtraction, so a counter that
/// rolls over is fine.
pub trait MonotonicClock {
    /// Milliseconds since an arbitrary origin.
    fn now_millis(&self) -> u64;

    /// Block for `duration`.
    fn sleep(&mut self, duration: Duration);
}

/// [`MonotonicClock`] backed by [`Instant`] and [`thread::sleep`].
///
/// Counts from the moment it was created, so the first request goes out once
/// the resend interval has elapsed after startup.
#[derive(Clone, Copy, Debug)]
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    /// Start counting from now.
    pub fn new() -> Self {
        SystemClock {
            start: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl MonotonicClock for SystemClock {
    fn now_millis(&self) -> u64 {
        // u64 milliseconds covers ~584 million years.
        self.start.elapsed().as_millis() as u64
    }

    fn sleep(&mut self, duration: Duration) {
        thread::sleep(duration);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_advances_across_sleep() {
        let mut clock = SystemClock::new();
        let before = clock.now_millis();
        clock.sleep(Duration::from_millis(20));
        let after = clock.now_millis();
        assert!(after >= before + 20, "before={before} after={after}");
    }
}
