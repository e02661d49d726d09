//! Monotonic Timing
//!
//! Wall-clock measurement of a single sort call, backed by
//! `std::time::Instant` (monotonic on every supported platform).

use std::time::{Duration, Instant};

/// Timer for measuring one sort invocation
#[derive(Debug, Clone, Copy)]
pub struct Timer {
    start: Instant,
}

impl Timer {
    /// Start a new timer
    #[inline(always)]
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Stop the timer and return the elapsed duration
    #[inline(always)]
    pub fn stop(&self) -> Duration {
        self.start.elapsed()
    }

    /// Stop the timer and return elapsed nanoseconds
    #[inline(always)]
    pub fn stop_nanos(&self) -> u64 {
        self.stop().as_nanos() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer() {
        let timer = Timer::start();
        std::thread::sleep(Duration::from_millis(10));
        let elapsed = timer.stop();

        // Should be at least 5ms (accounting for coarse clocks)
        assert!(elapsed >= Duration::from_millis(5));
    }

    #[test]
    fn test_timer_monotonic() {
        let timer = Timer::start();
        let first = timer.stop_nanos();
        let second = timer.stop_nanos();
        assert!(second >= first, "timer should be monotonic");
    }
}
