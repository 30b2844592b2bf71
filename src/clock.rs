//! Fixed-rate frame clock
//!
//! Mirrors the usual game-loop limiter: each call to [`FrameClock::tick`]
//! sleeps for whatever is left of the current frame, so the loop body runs
//! at most `rate` times per second.

use std::thread;
use std::time::{Duration, Instant};

pub struct FrameClock {
    frame: Duration,
    last_tick: Instant,
}

impl FrameClock {
    /// Creates a clock for `rate` ticks per second (0 is treated as 1)
    pub fn new(rate: u32) -> Self {
        FrameClock {
            frame: frame_duration(rate),
            last_tick: Instant::now(),
        }
    }

    /// Length of one frame
    pub fn frame(&self) -> Duration {
        self.frame
    }

    /// Blocks until the next tick boundary
    ///
    /// Returns the time since the previous tick, including the sleep.
    pub fn tick(&mut self) -> Duration {
        let wait = remaining(self.frame, self.last_tick.elapsed());
        if !wait.is_zero() {
            thread::sleep(wait);
        }
        let now = Instant::now();
        let delta = now - self.last_tick;
        self.last_tick = now;
        delta
    }
}

fn frame_duration(rate: u32) -> Duration {
    Duration::from_secs_f64(1.0 / rate.max(1) as f64)
}

/// Sleep needed to stretch `elapsed` to a full frame
fn remaining(frame: Duration, elapsed: Duration) -> Duration {
    frame.saturating_sub(elapsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_duration_40hz() {
        assert_eq!(FrameClock::new(40).frame(), Duration::from_millis(25));
    }

    #[test]
    fn test_zero_rate_clamped() {
        assert_eq!(FrameClock::new(0).frame(), Duration::from_secs(1));
    }

    #[test]
    fn test_remaining_never_negative() {
        let frame = Duration::from_millis(25);
        assert_eq!(remaining(frame, Duration::from_millis(10)), Duration::from_millis(15));
        assert_eq!(remaining(frame, Duration::from_millis(40)), Duration::ZERO);
    }

    #[test]
    fn test_tick_waits_at_least_one_frame() {
        let mut clock = FrameClock::new(200);
        clock.tick();
        let delta = clock.tick();
        assert!(delta >= Duration::from_millis(5));
    }
}
