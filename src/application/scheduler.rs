use std::time::Duration;

/// Fastest allowed cadence
pub const MIN_INTERVAL: Duration = Duration::from_millis(10);
/// Slowest allowed cadence
pub const MAX_INTERVAL: Duration = Duration::from_secs(2);

/// TickScheduler turns frame delta times into a fixed simulation cadence.
///
/// It owns no clock: the frame loop feeds it elapsed time, which keeps the
/// engine deterministic under test. At most one tick fires per update and
/// the accumulator restarts from zero afterwards, so a long frame does not
/// cause a burst of catch-up generations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TickScheduler {
    interval: Duration,
    accumulated: Duration,
}

impl TickScheduler {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.clamp(MIN_INTERVAL, MAX_INTERVAL),
            accumulated: Duration::ZERO,
        }
    }

    pub const fn interval(&self) -> Duration {
        self.interval
    }

    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval.clamp(MIN_INTERVAL, MAX_INTERVAL);
    }

    /// Halve the interval (twice as many generations per second)
    pub fn speed_up(&mut self) {
        self.set_interval(self.interval / 2);
    }

    pub fn slow_down(&mut self) {
        self.set_interval(self.interval.saturating_mul(2));
    }

    /// Forget time accumulated so far; the next tick is a full interval away
    pub fn restart(&mut self) {
        self.accumulated = Duration::ZERO;
    }

    /// Feed elapsed time; returns true when a tick is due
    pub fn update(&mut self, elapsed: Duration) -> bool {
        self.accumulated = self.accumulated.saturating_add(elapsed);
        if self.accumulated < self.interval {
            return false;
        }
        self.accumulated = Duration::ZERO;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_fires_once_interval_has_elapsed() {
        let mut s = TickScheduler::new(ms(100));
        assert!(!s.update(ms(40)));
        assert!(!s.update(ms(40)));
        assert!(s.update(ms(40)));
        assert!(!s.update(ms(40)));
    }

    #[test]
    fn test_long_frame_fires_only_once() {
        let mut s = TickScheduler::new(ms(100));
        assert!(s.update(ms(1000)));
        assert!(!s.update(ms(1)));
    }

    #[test]
    fn test_restart_drops_accumulated_time() {
        let mut s = TickScheduler::new(ms(100));
        s.update(ms(90));
        s.restart();
        assert!(!s.update(ms(90)));
        assert!(s.update(ms(10)));
    }

    #[test]
    fn test_interval_is_clamped() {
        assert_eq!(TickScheduler::new(Duration::ZERO).interval(), MIN_INTERVAL);
        assert_eq!(TickScheduler::new(Duration::from_secs(60)).interval(), MAX_INTERVAL);
    }

    #[test]
    fn test_speed_adjustment() {
        let mut s = TickScheduler::new(ms(100));
        s.speed_up();
        assert_eq!(s.interval(), ms(50));
        s.slow_down();
        s.slow_down();
        assert_eq!(s.interval(), ms(200));
        for _ in 0..10 {
            s.speed_up();
        }
        assert_eq!(s.interval(), MIN_INTERVAL);
        for _ in 0..20 {
            s.slow_down();
        }
        assert_eq!(s.interval(), MAX_INTERVAL);
    }
}
