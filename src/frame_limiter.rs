//! Fixed-rate frame pacing

use std::time::{Duration, Instant};

/// Sleeps away whatever is left of each frame's time budget
pub struct FrameLimiter {
    frame_budget: Duration,
    frame_start: Instant,
}

impl FrameLimiter {
    pub fn new(fps: u32) -> Self {
        FrameLimiter {
            frame_budget: Duration::from_secs(1) / fps.max(1),
            frame_start: Instant::now(),
        }
    }

    pub fn frame_budget(&self) -> Duration {
        self.frame_budget
    }

    /// Time left in the budget after `elapsed` has been spent
    pub fn remaining(&self, elapsed: Duration) -> Duration {
        self.frame_budget.saturating_sub(elapsed)
    }

    /// Blocks until the current frame's budget is used up, then starts the next frame.
    pub fn wait(&mut self) {
        let remaining = self.remaining(self.frame_start.elapsed());
        if !remaining.is_zero() {
            std::thread::sleep(remaining);
        }
        self.frame_start = Instant::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_budget_for_60_fps() {
        let limiter = FrameLimiter::new(60);
        assert_eq!(limiter.frame_budget(), Duration::from_nanos(16_666_666));
    }

    #[test]
    fn test_remaining() {
        let limiter = FrameLimiter::new(50);
        assert_eq!(limiter.remaining(Duration::from_millis(5)), Duration::from_millis(15));
        assert_eq!(limiter.remaining(Duration::from_millis(30)), Duration::ZERO);
    }

    #[test]
    fn test_zero_fps_treated_as_one() {
        assert_eq!(FrameLimiter::new(0).frame_budget(), Duration::from_secs(1));
    }
}
