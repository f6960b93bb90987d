//! Background gradient and change detection.

use hours_core::Rgba;

/// Per-channel change below which a new gradient is not reported.
pub const BACKGROUND_CHANGE_THRESHOLD: f64 = 0.005;

/// Vertical two-stop gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gradient {
    pub top: Rgba,
    pub bottom: Rgba,
}

impl Gradient {
    pub const BLACK: Gradient = Gradient {
        top: Rgba::BLACK,
        bottom: Rgba::BLACK,
    };

    /// Color at `fraction` of the way from top (0) to bottom (1).
    pub fn at(&self, fraction: f64) -> Rgba {
        self.top.lerp(self.bottom, fraction.clamp(0.0, 1.0))
    }
}

/// Remembers the last reported gradient and only reports meaningful changes.
#[derive(Debug, Clone)]
pub struct BackgroundTracker {
    last: Gradient,
    threshold: f64,
}

impl Default for BackgroundTracker {
    fn default() -> Self {
        Self::new(BACKGROUND_CHANGE_THRESHOLD)
    }
}

impl BackgroundTracker {
    pub const fn new(threshold: f64) -> Self {
        Self {
            last: Gradient::BLACK,
            threshold,
        }
    }

    /// The most recently reported gradient.
    pub const fn last(&self) -> Gradient {
        self.last
    }

    /// Report the gradient if either stop moved past the threshold.
    pub fn update(&mut self, top: Rgba, bottom: Rgba) -> Option<Gradient> {
        let changed = self.last.top.differs_from(top, self.threshold)
            || self.last.bottom.differs_from(bottom, self.threshold);
        if !changed {
            return None;
        }
        self.last = Gradient { top, bottom };
        Some(self.last)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_non_black_gradient_is_reported() {
        let mut tracker = BackgroundTracker::default();
        let top = Rgba::rgb(0.12, 0.16, 0.22);
        let bottom = Rgba::rgb(0.08, 0.12, 0.18);
        assert_eq!(tracker.update(top, bottom), Some(Gradient { top, bottom }));
        assert_eq!(tracker.update(top, bottom), None);
    }

    #[test]
    fn test_small_drift_is_suppressed_until_it_accumulates() {
        let mut tracker = BackgroundTracker::default();
        let base = Rgba::rgb(0.3, 0.3, 0.3);
        tracker.update(base, base);

        let nudged = Rgba::rgb(0.303, 0.3, 0.3);
        assert_eq!(tracker.update(nudged, base), None);
        let drifted = Rgba::rgb(0.306, 0.3, 0.3);
        assert!(tracker.update(drifted, base).is_some());
        assert_eq!(tracker.last().top, drifted);
    }

    #[test]
    fn test_gradient_sampling() {
        let g = Gradient {
            top: Rgba::rgb(0.0, 0.0, 0.0),
            bottom: Rgba::rgb(1.0, 0.5, 0.0),
        };
        assert_eq!(g.at(0.0), g.top);
        assert_eq!(g.at(1.0), g.bottom);
        assert_eq!(g.at(2.0), g.bottom);
        assert!((g.at(0.5).g - 0.25).abs() < 1e-12);
    }
}
