//! The set of word particles and the shared random source.

use glam::DVec2;
use hours_core::{Phase, PhasePreset, PoemWord};
use rand::rngs::StdRng;

use crate::particle::Particle;
use crate::placement::home_position;

/// Owns every word particle. Particles are created once and never removed.
#[derive(Debug, Clone)]
pub struct ParticleField {
    particles: Vec<Particle>,
    half_extents: DVec2,
    rng: StdRng,
}

impl ParticleField {
    /// Place one particle per word at a home drawn from its phase's region.
    pub fn new(words: Vec<PoemWord>, half_extents: DVec2, mut rng: StdRng) -> Self {
        let particles = words
            .into_iter()
            .map(|word| {
                let home = home_position(word.phase, half_extents, &mut rng);
                Particle::new(word, home)
            })
            .collect();
        Self {
            particles,
            half_extents,
            rng,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub const fn half_extents(&self) -> DVec2 {
        self.half_extents
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Retarget every particle's opacity for the active phase.
    pub fn apply_phase_visibility(&mut self, active: Phase, preset: &PhasePreset) {
        for particle in &mut self.particles {
            particle.apply_phase_visibility(active, preset);
        }
    }

    /// Advance every particle one tick.
    pub fn step(&mut self, preset: &PhasePreset, attractors: &[DVec2]) {
        for particle in &mut self.particles {
            particle.step(preset, attractors, self.half_extents, &mut self.rng);
        }
    }
}
