//! Count-up ramp for statistic figures
//!
//! Figures ramp from zero to their target over a fixed duration, driven
//! by real elapsed time so the count lands on the exact target no matter
//! the display refresh rate.

use std::time::{Duration, Instant};

/// Ramp duration for the landing page figures
pub const RAMP_DURATION: Duration = Duration::from_millis(2000);

/// A number counting up from zero to a fixed target
#[derive(Debug, Clone, Copy)]
pub struct RampCounter {
    target: u64,
    duration: Duration,
    started_at: Option<Instant>,
}

impl RampCounter {
    pub fn new(target: u64) -> Self {
        Self::with_duration(target, RAMP_DURATION)
    }

    pub fn with_duration(target: u64, duration: Duration) -> Self {
        Self {
            target,
            duration,
            started_at: None,
        }
    }

    /// Begin counting. Later calls are ignored, a counter never restarts.
    pub fn start(&mut self, now: Instant) {
        if self.started_at.is_none() {
            self.started_at = Some(now);
        }
    }

    pub fn has_started(&self) -> bool {
        self.started_at.is_some()
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    /// Displayed value at `now`.
    ///
    /// Zero until started, the exact target once the duration has
    /// elapsed. A zero target is terminal from the start.
    pub fn value(&self, now: Instant) -> u64 {
        let Some(started_at) = self.started_at else {
            return 0;
        };
        if self.target == 0 {
            return 0;
        }
        let elapsed = now.saturating_duration_since(started_at);
        if elapsed >= self.duration {
            return self.target;
        }
        let progress = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        // Ceil so small targets move off zero on the first frame.
        (self.target as f64 * progress).ceil() as u64
    }

    /// Whether the counter has reached its terminal value
    pub fn is_complete(&self, now: Instant) -> bool {
        match self.started_at {
            None => false,
            Some(started_at) => {
                self.target == 0 || now.saturating_duration_since(started_at) >= self.duration
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DURATION: Duration = Duration::from_millis(2000);

    #[test]
    fn idle_until_started() {
        let counter = RampCounter::with_duration(500, DURATION);
        assert_eq!(counter.value(Instant::now()), 0);
        assert!(!counter.is_complete(Instant::now()));
    }

    #[test]
    fn reaches_the_exact_target_when_the_duration_elapses() {
        let mut counter = RampCounter::with_duration(997, DURATION);
        let t0 = Instant::now();
        counter.start(t0);
        assert_eq!(counter.value(t0), 0);
        assert_eq!(counter.value(t0 + DURATION), 997);
        assert_eq!(counter.value(t0 + DURATION * 3), 997);
        assert!(counter.is_complete(t0 + DURATION));
    }

    #[test]
    fn never_decreases_and_never_overshoots() {
        let mut counter = RampCounter::with_duration(75_000, DURATION);
        let t0 = Instant::now();
        counter.start(t0);

        let mut previous = 0;
        for ms in (0..=2500).step_by(7) {
            let value = counter.value(t0 + Duration::from_millis(ms));
            assert!(value >= previous, "value went backwards at {}ms", ms);
            assert!(value <= 75_000, "value overshot at {}ms", ms);
            previous = value;
        }
        assert_eq!(previous, 75_000);
    }

    #[test]
    fn halfway_through_shows_half_the_target() {
        let mut counter = RampCounter::with_duration(1000, DURATION);
        let t0 = Instant::now();
        counter.start(t0);
        assert_eq!(counter.value(t0 + DURATION / 2), 500);
    }

    #[test]
    fn starting_twice_does_not_restart() {
        let mut counter = RampCounter::with_duration(1000, DURATION);
        let t0 = Instant::now();
        counter.start(t0);
        counter.start(t0 + Duration::from_millis(1500));
        // Still anchored to the first start, so the ramp is done here.
        assert_eq!(counter.value(t0 + DURATION), 1000);
        assert!(counter.is_complete(t0 + DURATION));
    }

    #[test]
    fn zero_target_is_terminal_immediately() {
        let mut counter = RampCounter::with_duration(0, DURATION);
        let t0 = Instant::now();
        counter.start(t0);
        assert_eq!(counter.value(t0), 0);
        assert!(counter.is_complete(t0));
    }
}
