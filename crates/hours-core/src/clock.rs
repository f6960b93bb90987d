//! Wall-clock to phase resolution.
//!
//! The clock is pure: it reads hour and minute from any [`Timelike`] value,
//! so callers can evaluate arbitrary instants as easily as "now".

use chrono::Timelike;

use crate::phase::{MINUTES_PER_DAY, Phase};
use crate::preset::PhasePreset;

/// Default width of the blend window before each phase boundary.
pub const DEFAULT_TRANSITION_WINDOW_MINUTES: f64 = 30.0;

/// The active phase, its successor, and progress toward the successor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseBlend {
    pub phase: Phase,
    pub next: Phase,
    /// 0 outside the transition window, rising to 1 at the boundary.
    pub blend: f64,
}

impl PhaseBlend {
    /// The preset blended between `phase` and `next` at `blend`.
    pub fn preset(&self) -> PhasePreset {
        PhasePreset::interpolate(
            &PhasePreset::defaults(self.phase),
            &PhasePreset::defaults(self.next),
            self.blend,
        )
    }
}

/// Maps time of day to a [`PhaseBlend`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseClock {
    transition_window_minutes: f64,
}

impl Default for PhaseClock {
    fn default() -> Self {
        Self::new(DEFAULT_TRANSITION_WINDOW_MINUTES)
    }
}

impl PhaseClock {
    pub const fn new(transition_window_minutes: f64) -> Self {
        Self {
            transition_window_minutes,
        }
    }

    pub const fn transition_window_minutes(&self) -> f64 {
        self.transition_window_minutes
    }

    /// Resolve the phase and blend factor for the given time of day.
    pub fn phase_and_blend<T: Timelike>(&self, time: &T) -> PhaseBlend {
        let hour = time.hour();
        let minute_of_day = hour * 60 + time.minute();

        let phase = Phase::resolve(hour);
        let next = phase.successor();

        let end = phase.end_minute_of_day();
        // Night spans midnight: 23:30 is 1410 and night ends at 300 next day.
        let remaining = if end >= minute_of_day {
            end - minute_of_day
        } else {
            end + MINUTES_PER_DAY - minute_of_day
        };

        PhaseBlend {
            phase,
            next,
            blend: self.blend_for_remaining(f64::from(remaining)),
        }
    }

    /// Phase blend and the preset it produces, in one call.
    pub fn blended_preset<T: Timelike>(&self, time: &T) -> (PhaseBlend, PhasePreset) {
        let blend = self.phase_and_blend(time);
        (blend, blend.preset())
    }

    fn blend_for_remaining(&self, remaining: f64) -> f64 {
        let window = self.transition_window_minutes;
        if remaining > window {
            return 0.0;
        }
        if window <= 0.0 {
            return 1.0;
        }
        (1.0 - remaining / window).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveTime;

    use super::*;

    fn at(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    #[test]
    fn test_noon_is_plain_afternoon() {
        let blend = PhaseClock::default().phase_and_blend(&at(12, 0));
        assert_eq!(blend.phase, Phase::Afternoon);
        assert_eq!(blend.next, Phase::Dusk);
        assert_eq!(blend.blend, 0.0);
    }

    #[test]
    fn test_halfway_through_window() {
        let blend = PhaseClock::default().phase_and_blend(&at(16, 45));
        assert_eq!(blend.phase, Phase::Afternoon);
        assert_eq!(blend.next, Phase::Dusk);
        assert!((blend.blend - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_window_edge_is_zero() {
        // 16:30 leaves exactly 30 minutes
        let blend = PhaseClock::default().phase_and_blend(&at(16, 30));
        assert!(blend.blend.abs() < 1e-12);
    }

    #[test]
    fn test_last_minute_before_boundary_nearly_full() {
        let blend = PhaseClock::default().phase_and_blend(&at(19, 59));
        assert_eq!(blend.phase, Phase::Dusk);
        assert!((blend.blend - (1.0 - 1.0 / 30.0)).abs() < 1e-12);
    }

    #[test]
    fn test_night_wraps_across_midnight() {
        let clock = PhaseClock::default();
        // 23:30 -> 330 minutes remain until 05:00
        let late = clock.phase_and_blend(&at(23, 30));
        assert_eq!(late.phase, Phase::Night);
        assert_eq!(late.next, Phase::Dawn);
        assert_eq!(late.blend, 0.0);

        let early = clock.phase_and_blend(&at(4, 40));
        assert_eq!(early.phase, Phase::Night);
        assert!((early.blend - (1.0 - 20.0 / 30.0)).abs() < 1e-12);
    }

    #[test]
    fn test_zero_remaining_is_full_blend() {
        let clock = PhaseClock::default();
        assert_eq!(clock.blend_for_remaining(0.0), 1.0);
        assert!(clock.blend_for_remaining(30.0).abs() < 1e-12);
    }

    #[test]
    fn test_blend_is_always_in_unit_range() {
        let clock = PhaseClock::new(45.0);
        for hour in 0..24 {
            for minute in 0..60 {
                let b = clock.phase_and_blend(&at(hour, minute)).blend;
                assert!((0.0..=1.0).contains(&b), "blend {b} at {hour}:{minute}");
            }
        }
    }

    #[test]
    fn test_degenerate_window() {
        let clock = PhaseClock::new(0.0);
        assert_eq!(clock.phase_and_blend(&at(16, 59)).blend, 0.0);
        assert_eq!(clock.blend_for_remaining(0.0), 1.0);
    }

    #[test]
    fn test_blended_preset_matches_interpolation() {
        let (blend, preset) = PhaseClock::default().blended_preset(&at(16, 45));
        let expected = PhasePreset::interpolate(
            &PhasePreset::defaults(Phase::Afternoon),
            &PhasePreset::defaults(Phase::Dusk),
            0.5,
        );
        assert_eq!(blend.phase, Phase::Afternoon);
        assert_eq!(preset, expected);
    }
}
