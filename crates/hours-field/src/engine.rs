//! Engine: clock, presets, particles and pointer contacts wired together.
//!
//! The host drives two cadences from one thread: [`Engine::evaluate`] on a
//! slow timer (every ~30 s) and [`Engine::tick`] once per frame. Neither
//! blocks. A multi-threaded host should keep the engine behind a single
//! lock, since `tick` reads the cached preset and the attractor set that the
//! contact methods mutate.

use std::fmt;

use chrono::Timelike;
use glam::DVec2;
use hours_core::{
    ActivityMeter, DEFAULT_TRANSITION_WINDOW_MINUTES, Phase, PhaseBlend, PhaseClock, PhasePreset,
    PoemWord,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::attractors::{AttractorSet, ContactId};
use crate::background::{BackgroundTracker, Gradient};
use crate::field::ParticleField;
use crate::particle::Particle;

/// Activity added by each new pointer contact.
pub const DEFAULT_ACTIVITY_PUMP: f64 = 0.25;

/// Activity drained per tick: a full meter empties in 30 s at 60 fps.
pub const DEFAULT_ACTIVITY_DECAY_PER_TICK: f64 = 1.0 / (30.0 * 60.0);

/// Construction parameters, built once by the host.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Blend window before each phase boundary, in minutes.
    pub transition_window_minutes: f64,
    /// Half the world width and height.
    pub half_extents: DVec2,
    /// Activity added per new contact.
    pub activity_pump: f64,
    /// Activity drained per tick.
    pub activity_decay_per_tick: f64,
    /// Seed for home placement and wander targets; `None` draws from entropy.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            transition_window_minutes: DEFAULT_TRANSITION_WINDOW_MINUTES,
            half_extents: DVec2::new(480.0, 320.0),
            activity_pump: DEFAULT_ACTIVITY_PUMP,
            activity_decay_per_tick: DEFAULT_ACTIVITY_DECAY_PER_TICK,
            seed: None,
        }
    }
}

/// What a renderer needs after one tick.
#[derive(Debug)]
pub struct Snapshot<'a> {
    /// Every word with its position, opacity and color.
    pub words: &'a [Particle],
    /// New background, only when it moved past the change threshold.
    pub background: Option<Gradient>,
}

type EvaluateListener = Box<dyn FnMut(&PhaseBlend, &PhasePreset) + Send>;

/// The word field engine.
pub struct Engine {
    clock: PhaseClock,
    blend: PhaseBlend,
    preset: PhasePreset,
    field: ParticleField,
    attractors: AttractorSet,
    activity: ActivityMeter,
    background: BackgroundTracker,
    activity_pump: f64,
    activity_decay_per_tick: f64,
    listeners: Vec<EvaluateListener>,
}

impl fmt::Debug for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("blend", &self.blend)
            .field("particles", &self.field.len())
            .field("attractors", &self.attractors.len())
            .field("activity", &self.activity.level())
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

impl Engine {
    /// Build the field. Until the first [`evaluate`](Self::evaluate) the
    /// engine shows plain morning.
    pub fn new(config: EngineConfig, words: Vec<PoemWord>) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        if words.is_empty() {
            tracing::warn!("engine created without words; nothing will animate");
        }

        let blend = PhaseBlend {
            phase: Phase::Morning,
            next: Phase::Morning.successor(),
            blend: 0.0,
        };
        let preset = PhasePreset::defaults(Phase::Morning);
        let mut field = ParticleField::new(words, config.half_extents, rng);
        field.apply_phase_visibility(blend.phase, &preset);

        tracing::info!(
            words = field.len(),
            width = config.half_extents.x * 2.0,
            height = config.half_extents.y * 2.0,
            "word field ready"
        );

        Self {
            clock: PhaseClock::new(config.transition_window_minutes),
            blend,
            preset,
            field,
            attractors: AttractorSet::new(),
            activity: ActivityMeter::new(),
            background: BackgroundTracker::default(),
            activity_pump: config.activity_pump,
            activity_decay_per_tick: config.activity_decay_per_tick,
            listeners: Vec::new(),
        }
    }

    /// Recompute the blended preset for `time` and retarget word opacities.
    pub fn evaluate<T: Timelike>(&mut self, time: &T) -> &PhasePreset {
        let (blend, preset) = self.clock.blended_preset(time);
        if blend.phase != self.blend.phase {
            tracing::debug!(from = %self.blend.phase, to = %blend.phase, "phase changed");
        }
        self.blend = blend;
        self.preset = preset;
        self.field.apply_phase_visibility(blend.phase, &self.preset);

        for listener in &mut self.listeners {
            listener(&self.blend, &self.preset);
        }
        &self.preset
    }

    /// Register a callback run after every [`evaluate`](Self::evaluate).
    pub fn on_evaluate<F>(&mut self, listener: F)
    where
        F: FnMut(&PhaseBlend, &PhasePreset) + Send + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Advance every word one tick against the live contacts.
    pub fn tick(&mut self) -> Snapshot<'_> {
        self.activity.decay(1.0, self.activity_decay_per_tick);
        self.field.step(&self.preset, self.attractors.positions());
        self.finish_tick()
    }

    /// Advance every word one tick against caller-supplied attractor points,
    /// ignoring the registered contacts.
    pub fn step_with(&mut self, attractors: &[DVec2]) -> Snapshot<'_> {
        self.activity.decay(1.0, self.activity_decay_per_tick);
        self.field.step(&self.preset, attractors);
        self.finish_tick()
    }

    fn finish_tick(&mut self) -> Snapshot<'_> {
        let gradient = self.gradient();
        let background = self.background.update(gradient.top, gradient.bottom);
        Snapshot {
            words: self.field.particles(),
            background,
        }
    }

    /// A pointer touched down. Duplicate ids are ignored.
    pub fn add_attractor(&mut self, id: ContactId, position: DVec2) -> bool {
        if !self.attractors.add(id, position) {
            tracing::debug!(id, "ignoring duplicate contact");
            return false;
        }
        self.activity.pump(self.activity_pump);
        tracing::debug!(id, x = position.x, y = position.y, "contact began");
        true
    }

    /// A pointer moved. Unknown ids are ignored.
    pub fn move_attractor(&mut self, id: ContactId, position: DVec2) -> bool {
        self.attractors.move_to(id, position)
    }

    /// A pointer lifted or was cancelled. Unknown ids are ignored.
    pub fn remove_attractor(&mut self, id: ContactId) -> bool {
        let removed = self.attractors.remove(id);
        if removed {
            tracing::debug!(id, "contact ended");
        }
        removed
    }

    pub fn pump_activity(&mut self, amount: f64) {
        self.activity.pump(amount);
    }

    /// Background for display: the blended preset warmed by activity.
    pub fn gradient(&self) -> Gradient {
        Gradient {
            top: self.activity.warm(self.preset.background_top),
            bottom: self.activity.warm(self.preset.background_bottom),
        }
    }

    pub const fn phase(&self) -> Phase {
        self.blend.phase
    }

    pub const fn blend(&self) -> PhaseBlend {
        self.blend
    }

    pub const fn preset(&self) -> &PhasePreset {
        &self.preset
    }

    pub fn particles(&self) -> &[Particle] {
        self.field.particles()
    }

    pub const fn attractors(&self) -> &AttractorSet {
        &self.attractors
    }

    pub const fn activity(&self) -> f64 {
        self.activity.level()
    }

    pub const fn half_extents(&self) -> DVec2 {
        self.field.half_extents()
    }
}
