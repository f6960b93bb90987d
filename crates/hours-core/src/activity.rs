//! Interaction meter that warms the background.

use crate::color::Rgba;

/// Scalar in `[0, 1]` pumped by pointer contacts and drained over time.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ActivityMeter {
    level: f64,
}

impl ActivityMeter {
    pub const fn new() -> Self {
        Self { level: 0.0 }
    }

    pub const fn level(&self) -> f64 {
        self.level
    }

    /// Raise the meter, saturating at 1.
    pub fn pump(&mut self, amount: f64) {
        self.level = (self.level + amount).clamp(0.0, 1.0);
    }

    /// Drain `rate * dt`, stopping at 0.
    pub fn decay(&mut self, dt: f64, rate: f64) {
        self.level = (self.level - rate * dt).clamp(0.0, 1.0);
    }

    /// `color` warmed by the current level.
    pub fn warm(&self, color: Rgba) -> Rgba {
        warm(color, self.level)
    }
}

/// Warm a background color by `activity` (see [`Rgba::warmed`]).
pub fn warm(color: Rgba, activity: f64) -> Rgba {
    color.warmed(activity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pump_saturates() {
        let mut meter = ActivityMeter::new();
        for _ in 0..6 {
            meter.pump(0.25);
        }
        assert_eq!(meter.level(), 1.0);
    }

    #[test]
    fn test_decay_floors_at_zero() {
        let mut meter = ActivityMeter::new();
        meter.pump(0.25);
        meter.decay(1.0, 0.1);
        assert!((meter.level() - 0.15).abs() < 1e-12);
        meter.decay(10.0, 0.1);
        assert_eq!(meter.level(), 0.0);
    }

    #[test]
    fn test_full_meter_drains_in_configured_frames() {
        let mut meter = ActivityMeter::new();
        meter.pump(1.0);
        let rate = 1.0 / (30.0 * 60.0);
        for _ in 0..1799 {
            meter.decay(1.0, rate);
        }
        assert!(meter.level() > 0.0);
        meter.decay(1.0, rate);
        meter.decay(1.0, rate);
        assert_eq!(meter.level(), 0.0);
    }

    #[test]
    fn test_warm_touches_only_background_channels() {
        let mut meter = ActivityMeter::new();
        meter.pump(0.5);
        let warmed = meter.warm(Rgba::rgb(0.1, 0.1, 0.1));
        assert!((warmed.r - 0.25).abs() < 1e-12);
        assert!((warmed.g - 0.15).abs() < 1e-12);
        assert!((warmed.b - 0.025).abs() < 1e-12);
        assert_eq!(warmed.a, 1.0);
    }
}
