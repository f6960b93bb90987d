//! Per-phase visual and physical parameter sets.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::color::{Rgba, lerp};
use crate::phase::Phase;

/// Closed range of word opacities, `lower <= upper`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OpacityRange {
    pub lower: f64,
    pub upper: f64,
}

impl OpacityRange {
    pub const fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }
}

/// Visual and physical constants for one phase, or a blend of two.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhasePreset {
    /// Gradient color at the top of the screen.
    pub background_top: Rgba,
    /// Gradient color at the bottom of the screen.
    pub background_bottom: Rgba,
    /// Color applied to every word.
    pub word_color: Rgba,
    /// Opacity of words outside (lower) and inside (upper) the active phase.
    pub word_opacity: OpacityRange,
    /// Acceleration toward the current target, per tick.
    pub drift_speed: f64,
    /// Velocity multiplier while wandering, in `(0, 1)`.
    pub drift_friction: f64,
    /// Maximum distance of a wander target from home.
    pub drift_radius: f64,
    /// Constant force added every tick regardless of target.
    pub gravity_bias: DVec2,
    /// Strength of pointer attraction. Carried for completeness; the
    /// integrator moves attracted words at `drift_speed`.
    pub attractor_strength: f64,
    /// Distance within which a pointer captures a word.
    pub attractor_radius: f64,
    /// Velocity multiplier while attracted, in `(0, 1)`.
    pub attractor_friction: f64,
    /// Ticks taken to relax from attractor friction back to drift friction.
    pub release_decay_frames: u32,
}

pub const NIGHT: PhasePreset = PhasePreset {
    background_top: Rgba::rgb(0.04, 0.04, 0.08),
    background_bottom: Rgba::rgb(0.02, 0.02, 0.05),
    word_color: Rgba::rgb(0.50, 0.55, 0.65),
    word_opacity: OpacityRange::new(0.05, 0.35),
    drift_speed: 0.08,
    drift_friction: 0.92,
    drift_radius: 80.0,
    gravity_bias: DVec2::ZERO,
    attractor_strength: 1.2,
    attractor_radius: 180.0,
    attractor_friction: 0.85,
    release_decay_frames: 90,
};

pub const DAWN: PhasePreset = PhasePreset {
    background_top: Rgba::rgb(0.05, 0.08, 0.25),
    background_bottom: Rgba::rgb(0.60, 0.35, 0.15),
    word_color: Rgba::rgb(0.95, 0.80, 0.45),
    word_opacity: OpacityRange::new(0.25, 0.75),
    drift_speed: 0.15,
    drift_friction: 0.93,
    drift_radius: 130.0,
    // rising
    gravity_bias: DVec2::new(0.0, 0.03),
    attractor_strength: 1.5,
    attractor_radius: 200.0,
    attractor_friction: 0.87,
    release_decay_frames: 75,
};

pub const MORNING: PhasePreset = PhasePreset {
    background_top: Rgba::rgb(0.12, 0.16, 0.22),
    background_bottom: Rgba::rgb(0.08, 0.12, 0.18),
    word_color: Rgba::rgb(1.00, 1.00, 1.00),
    word_opacity: OpacityRange::new(0.50, 1.00),
    drift_speed: 0.25,
    drift_friction: 0.90,
    drift_radius: 200.0,
    gravity_bias: DVec2::ZERO,
    attractor_strength: 2.0,
    attractor_radius: 220.0,
    attractor_friction: 0.82,
    release_decay_frames: 60,
};

pub const AFTERNOON: PhasePreset = PhasePreset {
    background_top: Rgba::rgb(0.22, 0.15, 0.05),
    background_bottom: Rgba::rgb(0.12, 0.08, 0.02),
    word_color: Rgba::rgb(0.95, 0.80, 0.45),
    word_opacity: OpacityRange::new(0.40, 0.85),
    drift_speed: 0.18,
    drift_friction: 0.88,
    drift_radius: 150.0,
    // heavy, sinking
    gravity_bias: DVec2::new(0.0, -0.025),
    attractor_strength: 1.6,
    attractor_radius: 200.0,
    attractor_friction: 0.84,
    release_decay_frames: 80,
};

pub const DUSK: PhasePreset = PhasePreset {
    background_top: Rgba::rgb(0.30, 0.10, 0.25),
    background_bottom: Rgba::rgb(0.55, 0.25, 0.10),
    word_color: Rgba::rgb(0.85, 0.60, 0.80),
    word_opacity: OpacityRange::new(0.30, 0.80),
    drift_speed: 0.20,
    drift_friction: 0.91,
    drift_radius: 250.0,
    gravity_bias: DVec2::ZERO,
    attractor_strength: 1.8,
    attractor_radius: 210.0,
    attractor_friction: 0.83,
    release_decay_frames: 70,
};

pub const EVENING: PhasePreset = PhasePreset {
    background_top: Rgba::rgb(0.05, 0.06, 0.15),
    background_bottom: Rgba::rgb(0.02, 0.03, 0.08),
    word_color: Rgba::rgb(0.55, 0.60, 0.70),
    word_opacity: OpacityRange::new(0.10, 0.55),
    drift_speed: 0.10,
    drift_friction: 0.94,
    drift_radius: 100.0,
    gravity_bias: DVec2::ZERO,
    attractor_strength: 1.3,
    attractor_radius: 190.0,
    attractor_friction: 0.86,
    release_decay_frames: 85,
};

impl Default for PhasePreset {
    fn default() -> Self {
        MORNING
    }
}

impl PhasePreset {
    /// The fixed preset for a phase.
    pub const fn defaults(phase: Phase) -> Self {
        match phase {
            Phase::Night => NIGHT,
            Phase::Dawn => DAWN,
            Phase::Morning => MORNING,
            Phase::Afternoon => AFTERNOON,
            Phase::Dusk => DUSK,
            Phase::Evening => EVENING,
        }
    }

    /// Component-wise blend from `a` toward `b`.
    ///
    /// `t` is not clamped. `release_decay_frames` is blended as a real number
    /// and truncated toward zero.
    pub fn interpolate(a: &PhasePreset, b: &PhasePreset, t: f64) -> PhasePreset {
        let frames = lerp(
            f64::from(a.release_decay_frames),
            f64::from(b.release_decay_frames),
            t,
        );
        PhasePreset {
            background_top: a.background_top.lerp(b.background_top, t),
            background_bottom: a.background_bottom.lerp(b.background_bottom, t),
            word_color: a.word_color.lerp(b.word_color, t),
            word_opacity: OpacityRange {
                lower: lerp(a.word_opacity.lower, b.word_opacity.lower, t),
                upper: lerp(a.word_opacity.upper, b.word_opacity.upper, t),
            },
            drift_speed: lerp(a.drift_speed, b.drift_speed, t),
            drift_friction: lerp(a.drift_friction, b.drift_friction, t),
            drift_radius: lerp(a.drift_radius, b.drift_radius, t),
            gravity_bias: DVec2::new(
                lerp(a.gravity_bias.x, b.gravity_bias.x, t),
                lerp(a.gravity_bias.y, b.gravity_bias.y, t),
            ),
            attractor_strength: lerp(a.attractor_strength, b.attractor_strength, t),
            attractor_radius: lerp(a.attractor_radius, b.attractor_radius, t),
            attractor_friction: lerp(a.attractor_friction, b.attractor_friction, t),
            // `as` saturates: negative extrapolation lands on 0
            release_decay_frames: frames.trunc() as u32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interpolate_identity_when_endpoints_equal() {
        for phase in Phase::ALL {
            let p = PhasePreset::defaults(phase);
            for t in [0.0, 0.25, 0.5, 0.9, 1.0] {
                assert_eq!(PhasePreset::interpolate(&p, &p, t), p);
            }
        }
    }

    #[test]
    fn test_interpolate_boundaries_are_exact() {
        for phase in Phase::ALL {
            let a = PhasePreset::defaults(phase);
            let b = PhasePreset::defaults(phase.successor());
            assert_eq!(PhasePreset::interpolate(&a, &b, 0.0), a);
            assert_eq!(PhasePreset::interpolate(&a, &b, 1.0), b);
        }
    }

    #[test]
    fn test_interpolate_midpoint() {
        let mid = PhasePreset::interpolate(&MORNING, &AFTERNOON, 0.5);
        assert!((mid.drift_speed - 0.215).abs() < 1e-12);
        assert!((mid.gravity_bias.y + 0.0125).abs() < 1e-12);
        assert!((mid.word_opacity.lower - 0.45).abs() < 1e-12);
        // 60 -> 80 at 0.5 is exactly 70
        assert_eq!(mid.release_decay_frames, 70);
    }

    #[test]
    fn test_release_frames_truncate_toward_zero() {
        // 60 + (80 - 60) * 0.49 = 69.8
        let p = PhasePreset::interpolate(&MORNING, &AFTERNOON, 0.49);
        assert_eq!(p.release_decay_frames, 69);
    }

    #[test]
    fn test_interpolate_tolerates_out_of_range_t() {
        let p = PhasePreset::interpolate(&MORNING, &AFTERNOON, 2.0);
        assert!((p.drift_speed - 0.11).abs() < 1e-12);
        assert_eq!(p.release_decay_frames, 100);
        let q = PhasePreset::interpolate(&MORNING, &AFTERNOON, -10.0);
        assert_eq!(q.release_decay_frames, 0);
    }

    #[test]
    fn test_defaults_are_well_formed() {
        for phase in Phase::ALL {
            let p = PhasePreset::defaults(phase);
            assert!(p.word_opacity.lower <= p.word_opacity.upper);
            assert!(p.drift_friction > 0.0 && p.drift_friction < 1.0);
            assert!(p.attractor_friction > 0.0 && p.attractor_friction < 1.0);
            assert!(p.release_decay_frames > 0);
        }
    }
}
