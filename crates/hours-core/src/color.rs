//! Color and scalar interpolation helpers.

use serde::{Deserialize, Serialize};

/// Linear interpolation that is exact at both endpoints.
///
/// Evaluated from whichever endpoint is nearer, so `lerp(x, y, 0.0) == x`,
/// `lerp(x, y, 1.0) == y` and `lerp(x, x, t) == x` hold bit-for-bit.
/// `t` is not clamped; values outside `[0, 1]` extrapolate.
pub fn lerp(x: f64, y: f64, t: f64) -> f64 {
    if t < 0.5 {
        x + (y - x) * t
    } else {
        y - (y - x) * (1.0 - t)
    }
}

/// An RGBA color with channels in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::rgb(0.0, 0.0, 0.0);

    /// An opaque color.
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Per-channel interpolation (alpha included), no gamma correction.
    pub fn lerp(self, other: Rgba, t: f64) -> Rgba {
        Rgba {
            r: lerp(self.r, other.r, t),
            g: lerp(self.g, other.g, t),
            b: lerp(self.b, other.b, t),
            a: lerp(self.a, other.a, t),
        }
    }

    /// Shift toward a warm ember tone as `activity` rises.
    ///
    /// Red gains 0.30, green 0.10 and blue loses 0.15 at full activity.
    /// Alpha is untouched.
    pub fn warmed(self, activity: f64) -> Rgba {
        Rgba {
            r: (self.r + 0.30 * activity).min(1.0),
            g: (self.g + 0.10 * activity).min(1.0),
            b: (self.b - 0.15 * activity).max(0.0),
            a: self.a,
        }
    }

    /// Whether any RGB channel differs from `other` by more than `threshold`.
    pub fn differs_from(self, other: Rgba, threshold: f64) -> bool {
        (self.r - other.r).abs() > threshold
            || (self.g - other.g).abs() > threshold
            || (self.b - other.b).abs() > threshold
    }

    /// Convert to 8-bit channels, dropping alpha.
    pub fn to_rgb8(self) -> (u8, u8, u8) {
        let channel = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        (channel(self.r), channel(self.g), channel(self.b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_is_exact_at_endpoints() {
        for (x, y) in [(0.1, 0.3), (0.92, 0.85), (-4.0, 17.5), (80.0, 250.0)] {
            assert_eq!(lerp(x, y, 0.0), x);
            assert_eq!(lerp(x, y, 1.0), y);
            assert_eq!(lerp(x, x, 0.37), x);
        }
    }

    #[test]
    fn test_lerp_extrapolates_outside_unit_range() {
        assert!((lerp(0.0, 10.0, 1.5) - 15.0).abs() < 1e-12);
        assert!((lerp(0.0, 10.0, -0.5) + 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_warmed_caps_and_floors_channels() {
        let warm = Rgba::new(0.9, 0.95, 0.1, 0.5).warmed(1.0);
        assert_eq!(warm.r, 1.0);
        assert_eq!(warm.g, 1.0);
        assert_eq!(warm.b, 0.0);
        assert_eq!(warm.a, 0.5);
    }

    #[test]
    fn test_warmed_with_no_activity_is_identity() {
        let c = Rgba::rgb(0.12, 0.16, 0.22);
        assert_eq!(c.warmed(0.0), c);
    }

    #[test]
    fn test_differs_from_ignores_alpha() {
        let a = Rgba::new(0.5, 0.5, 0.5, 1.0);
        let b = Rgba::new(0.5, 0.5, 0.5, 0.0);
        assert!(!a.differs_from(b, 0.005));
        assert!(a.differs_from(Rgba::new(0.51, 0.5, 0.5, 1.0), 0.005));
        assert!(!a.differs_from(Rgba::new(0.504, 0.5, 0.5, 1.0), 0.005));
    }

    #[test]
    fn test_to_rgb8() {
        assert_eq!(Rgba::rgb(1.0, 0.0, 0.5).to_rgb8(), (255, 0, 128));
        assert_eq!(Rgba::rgb(1.4, -0.2, 0.0).to_rgb8(), (255, 0, 0));
    }
}
