// Cross-module checks: clock output feeding preset interpolation.

use chrono::NaiveTime;
use hours_core::{Phase, PhaseClock, PhasePreset};

fn at(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}

#[test]
fn blended_preset_is_continuous_across_every_boundary() {
    let clock = PhaseClock::default();
    for phase in Phase::ALL {
        let end = phase.end_minute_of_day() % (24 * 60);
        let before = end.checked_sub(1).unwrap_or(24 * 60 - 1);
        let (blend, last) = clock.blended_preset(&at(before / 60, before % 60));
        assert_eq!(blend.phase, phase);

        let (_, first) = clock.blended_preset(&at(end / 60, end % 60));
        // one minute of a thirty minute window separates the two presets
        let step = (last.drift_radius - first.drift_radius).abs();
        let span = (PhasePreset::defaults(phase).drift_radius
            - PhasePreset::defaults(phase.successor()).drift_radius)
            .abs();
        assert!(step <= span / 30.0 + 1e-9, "jump of {step} at {phase}");
    }
}

#[test]
fn outside_window_preset_is_the_phase_default() {
    let clock = PhaseClock::default();
    for (hour, phase) in [
        (2, Phase::Night),
        (6, Phase::Dawn),
        (9, Phase::Morning),
        (13, Phase::Afternoon),
        (18, Phase::Dusk),
        (21, Phase::Evening),
    ] {
        let (blend, preset) = clock.blended_preset(&at(hour, 0));
        assert_eq!(blend.phase, phase);
        assert_eq!(preset, PhasePreset::defaults(phase));
    }
}

#[test]
fn blend_rises_monotonically_through_the_window() {
    let clock = PhaseClock::default();
    let mut prev = -1.0;
    for minute in 30..60 {
        let b = clock.phase_and_blend(&at(16, minute)).blend;
        assert!(b > prev);
        prev = b;
    }
}
