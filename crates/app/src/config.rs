//! Timing parameters of the simulation.

use std::time::Duration;

use crate::ports::Entropy;

/// Half-open range `[min, max)` a random delay is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelayRange {
    pub min: Duration,
    pub max: Duration,
}

impl DelayRange {
    #[must_use]
    pub const fn new(min: Duration, max: Duration) -> Self {
        Self { min, max }
    }

    /// Whether the range is non-empty.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.min < self.max
    }

    /// Draw a delay uniformly from the range.
    pub fn sample<E: Entropy + ?Sized>(&self, entropy: &E) -> Duration {
        let secs = entropy.uniform(self.min.as_secs_f64(), self.max.as_secs_f64());
        Duration::from_secs_f64(secs.max(0.0))
    }
}

/// Cadence of the main tick and of the dynamic motion cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Interval between two ticks of the engine.
    pub tick_interval: Duration,
    /// How long the dynamic motion sensor stays idle before firing.
    pub motion_idle: DelayRange,
    /// How long the dynamic motion sensor stays active.
    pub motion_active: DelayRange,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_secs(3 * 60),
            motion_idle: DelayRange::new(Duration::from_secs(3 * 60), Duration::from_secs(5 * 60)),
            motion_active: DelayRange::new(Duration::from_secs(1), Duration::from_secs(5)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedEntropy;

    #[test]
    fn should_default_to_three_minute_ticks() {
        let config = SimulationConfig::default();
        assert_eq!(config.tick_interval, Duration::from_secs(180));
        assert_eq!(config.motion_idle.min, Duration::from_secs(180));
        assert_eq!(config.motion_idle.max, Duration::from_secs(300));
        assert_eq!(config.motion_active.min, Duration::from_secs(1));
        assert_eq!(config.motion_active.max, Duration::from_secs(5));
    }

    #[test]
    fn should_sample_within_range() {
        let range = DelayRange::new(Duration::from_secs(1), Duration::from_secs(5));
        let entropy = ScriptedEntropy::new([0.0, 0.5]);

        assert_eq!(range.sample(&entropy), Duration::from_secs(1));
        assert_eq!(range.sample(&entropy), Duration::from_secs(3));
    }

    #[test]
    fn should_reject_empty_range() {
        let range = DelayRange::new(Duration::from_secs(5), Duration::from_secs(5));
        assert!(!range.is_valid());
        assert!(SimulationConfig::default().motion_idle.is_valid());
    }
}
