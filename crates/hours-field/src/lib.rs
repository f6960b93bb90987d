//! Word particle field for the hours poem.
//!
//! Each poem word is a particle with its own kinematic state. Every tick a
//! particle either chases the nearest pointer in range, relaxes out of a
//! recent capture, or wanders around its home, all under the parameters of
//! the currently blended phase preset. [`Engine`] ties this to the phase
//! clock, the pointer contacts and the activity-warmed background.

pub mod attractors;
pub mod background;
pub mod engine;
pub mod field;
pub mod particle;
pub mod placement;

pub use attractors::{AttractorSet, ContactId};
pub use background::{BackgroundTracker, Gradient};
pub use engine::{Engine, EngineConfig, Snapshot};
pub use field::ParticleField;
pub use particle::{Motion, Particle};
