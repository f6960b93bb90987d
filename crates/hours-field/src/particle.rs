//! A single word particle and its per-tick integration.
//!
//! Kinematics are integrated by hand each tick:
//! `velocity += acceleration; velocity *= friction; position += velocity`.

use std::f64::consts::TAU;

use glam::DVec2;
use hours_core::{Phase, PhasePreset, PoemWord, Rgba, lerp};
use rand::Rng;

/// Speed cap in world units per tick.
pub const MAX_SPEED: f64 = 18.0;

/// Width of the soft margin along each screen edge.
pub const BOUNDARY_MARGIN: f64 = 60.0;

/// Velocity nudge applied while inside the margin.
pub const BOUNDARY_REPULSION: f64 = 0.4;

/// Fraction of the remaining opacity gap closed every tick.
pub const OPACITY_RELAXATION: f64 = 0.02;

/// A wander target closer than this is replaced.
pub const WANDER_REFRESH_DISTANCE: f64 = 20.0;

/// Floor for distances used as divisors.
const MIN_DISTANCE: f64 = 0.001;

/// What currently steers a particle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    /// Pulled toward the nearest pointer in range.
    Attracted,
    /// Recently let go; friction is relaxing back to drift friction.
    Releasing,
    /// Idling around home.
    Wandering,
}

/// A poem word moving in the field.
#[derive(Debug, Clone)]
pub struct Particle {
    text: String,
    phase: Phase,
    is_focus: bool,
    /// Current position, origin at the world center, y up.
    pub position: DVec2,
    /// Displacement applied on the next tick.
    pub velocity: DVec2,
    home: DVec2,
    /// Destination while not attracted.
    pub wander_target: DVec2,
    /// Rendered opacity; relaxes toward `target_opacity`.
    pub opacity: f64,
    /// Opacity the particle is fading toward.
    pub target_opacity: f64,
    color: Rgba,
    attracted: bool,
    release_countdown: u32,
    friction: f64,
}

impl Particle {
    /// A particle resting at `home`, fully transparent.
    pub fn new(word: PoemWord, home: DVec2) -> Self {
        Self {
            text: word.text,
            phase: word.phase,
            is_focus: word.is_focus,
            position: home,
            velocity: DVec2::ZERO,
            home,
            wander_target: home,
            opacity: 0.0,
            target_opacity: 0.0,
            color: Rgba::BLACK,
            attracted: false,
            release_countdown: 0,
            friction: 1.0,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Poem section this word belongs to.
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    pub const fn is_focus(&self) -> bool {
        self.is_focus
    }

    pub const fn home(&self) -> DVec2 {
        self.home
    }

    pub const fn color(&self) -> Rgba {
        self.color
    }

    pub const fn release_countdown(&self) -> u32 {
        self.release_countdown
    }

    /// Friction applied on the most recent tick.
    pub const fn friction(&self) -> f64 {
        self.friction
    }

    pub const fn motion(&self) -> Motion {
        if self.attracted {
            Motion::Attracted
        } else if self.release_countdown > 0 {
            Motion::Releasing
        } else {
            Motion::Wandering
        }
    }

    /// Words of the active phase rise to the upper opacity; the rest sink to
    /// half the lower bound.
    pub fn apply_phase_visibility(&mut self, active: Phase, preset: &PhasePreset) {
        self.target_opacity = if self.phase == active {
            preset.word_opacity.upper
        } else {
            preset.word_opacity.lower * 0.5
        };
    }

    /// Advance one tick.
    pub fn step<R: Rng + ?Sized>(
        &mut self,
        preset: &PhasePreset,
        attractors: &[DVec2],
        half_extents: DVec2,
        rng: &mut R,
    ) {
        let (target, friction) =
            match nearest_attractor(self.position, attractors, preset.attractor_radius) {
                Some(point) => {
                    self.attracted = true;
                    self.release_countdown = preset.release_decay_frames;
                    (point, preset.attractor_friction)
                }
                None => {
                    if self.attracted {
                        self.attracted = false;
                        self.pick_wander_target(preset, rng);
                    }
                    let friction = if self.release_countdown > 0 {
                        self.release_countdown -= 1;
                        release_friction(preset, self.release_countdown)
                    } else {
                        preset.drift_friction
                    };
                    if self.position.distance(self.wander_target) < WANDER_REFRESH_DISTANCE {
                        self.pick_wander_target(preset, rng);
                    }
                    (self.wander_target, friction)
                }
            };
        self.friction = friction;

        let offset = target - self.position;
        let distance = offset.length().max(MIN_DISTANCE);
        let acceleration = offset / distance * preset.drift_speed;

        self.velocity += acceleration + preset.gravity_bias;
        self.velocity *= friction;

        let speed = self.velocity.length();
        if speed > MAX_SPEED {
            self.velocity *= MAX_SPEED / speed;
        }

        self.position += self.velocity;
        // felt on the next tick; the margin is soft
        self.velocity += boundary_impulse(self.position, half_extents);

        self.opacity += (self.target_opacity - self.opacity) * OPACITY_RELAXATION;
        self.color = preset.word_color;
    }

    /// Choose a new wander target uniformly in angle and radius around home.
    pub fn pick_wander_target<R: Rng + ?Sized>(&mut self, preset: &PhasePreset, rng: &mut R) {
        let angle = rng.gen_range(0.0..TAU);
        let radius = if preset.drift_radius > 0.0 {
            rng.gen_range(0.0..=preset.drift_radius)
        } else {
            0.0
        };
        self.wander_target = self.home + DVec2::from_angle(angle) * radius;
    }
}

/// Closest attractor strictly inside `radius`; the first one wins ties.
pub fn nearest_attractor(position: DVec2, attractors: &[DVec2], radius: f64) -> Option<DVec2> {
    let mut nearest = None;
    let mut nearest_distance = f64::INFINITY;
    for &point in attractors {
        let d = position.distance(point);
        if d < radius && d < nearest_distance {
            nearest_distance = d;
            nearest = Some(point);
        }
    }
    nearest
}

/// Friction while releasing: attractor friction at a full countdown, drift
/// friction at zero.
pub fn release_friction(preset: &PhasePreset, countdown: u32) -> f64 {
    let frames = preset.release_decay_frames.max(1);
    let t = (f64::from(countdown) / f64::from(frames)).min(1.0);
    lerp(preset.drift_friction, preset.attractor_friction, t)
}

/// Inward nudge for a position inside the edge margin.
pub fn boundary_impulse(position: DVec2, half_extents: DVec2) -> DVec2 {
    let limit = half_extents - DVec2::splat(BOUNDARY_MARGIN);
    let push = |p: f64, limit: f64| {
        if p < -limit {
            BOUNDARY_REPULSION
        } else if p > limit {
            -BOUNDARY_REPULSION
        } else {
            0.0
        }
    };
    DVec2::new(push(position.x, limit.x), push(position.y, limit.y))
}
