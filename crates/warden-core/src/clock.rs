use std::time::Instant;

/// Monotonic time source used for cooldowns.
///
/// Trees call [`Clock::advance`] with the frame delta before sampling
/// [`Clock::now_seconds`], so simulated clocks can follow the tick stream
/// while wall clocks ignore it.
pub trait Clock {
    fn now_seconds(&self) -> f64;

    fn advance(&mut self, _dt_seconds: f32) {}
}

/// Clock driven purely by tick deltas. Replays of the same tick stream see
/// the same timestamps.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SimClock {
    now: f64,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(now_seconds: f64) -> Self {
        Self { now: now_seconds }
    }
}

impl Clock for SimClock {
    fn now_seconds(&self) -> f64 {
        self.now
    }

    fn advance(&mut self, dt_seconds: f32) {
        // Negative deltas would break monotonicity.
        self.now += dt_seconds.max(0.0) as f64;
    }
}

/// Wall-clock time since construction.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now_seconds(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sim_clock_ignores_negative_deltas() {
        let mut clock = SimClock::new();
        clock.advance(0.5);
        clock.advance(-3.0);
        assert_eq!(clock.now_seconds(), 0.5);
    }

    #[test]
    fn monotonic_clock_ignores_tick_deltas() {
        let mut clock = MonotonicClock::new();
        let before = clock.now_seconds();
        clock.advance(-10.0);
        clock.advance(100.0);
        let after = clock.now_seconds();
        assert!(before >= 0.0);
        assert!(after >= before);
        assert!(after < 100.0);
    }
}
