//! Home positions for each phase's words.
//!
//! World space has its origin at the screen center with y pointing up, so
//! positions range over `[-hw, hw] x [-hh, hh]`.

use glam::DVec2;
use hours_core::Phase;
use rand::Rng;

/// Pick a home position from the phase's region of the screen.
pub fn home_position<R: Rng + ?Sized>(phase: Phase, half_extents: DVec2, rng: &mut R) -> DVec2 {
    let hw = half_extents.x;
    let hh = half_extents.y;

    match phase {
        // tight cluster around the center
        Phase::Night => DVec2::new(
            span(rng, -hw * 0.25, hw * 0.25),
            span(rng, -hh * 0.25, hh * 0.25),
        ),
        // upper half, rising
        Phase::Dawn => DVec2::new(
            span(rng, -hw * 0.45, hw * 0.45),
            span(rng, hh * 0.05, hh * 0.45),
        ),
        Phase::Morning => DVec2::new(
            span(rng, -hw * 0.42, hw * 0.42),
            span(rng, -hh * 0.42, hh * 0.42),
        ),
        // lower two thirds, pooling down
        Phase::Afternoon => DVec2::new(
            span(rng, -hw * 0.45, hw * 0.45),
            span(rng, -hh * 0.45, hh * 0.10),
        ),
        // coming loose at the margins
        Phase::Dusk => {
            let side = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
            if rng.gen_bool(0.5) {
                DVec2::new(
                    side * span(rng, hw * 0.25, hw * 0.45),
                    span(rng, -hh * 0.45, hh * 0.45),
                )
            } else {
                DVec2::new(
                    span(rng, -hw * 0.45, hw * 0.45),
                    side * span(rng, hh * 0.25, hh * 0.45),
                )
            }
        }
        // retreating inward
        Phase::Evening => DVec2::new(
            span(rng, -hw * 0.30, hw * 0.30),
            span(rng, -hh * 0.30, hh * 0.30),
        ),
    }
}

/// Uniform sample from `[lo, hi]`, tolerating a collapsed range.
fn span<R: Rng + ?Sized>(rng: &mut R, lo: f64, hi: f64) -> f64 {
    if lo < hi { rng.gen_range(lo..=hi) } else { lo }
}
