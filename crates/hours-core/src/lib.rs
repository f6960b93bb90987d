//! Core types for the hours word field.
//!
//! This crate resolves wall-clock time into one of six day phases, blends
//! the per-phase presets across the transition window, and provides the
//! color math, activity meter and poem parser shared by the simulation and
//! the terminal host.

pub mod activity;
pub mod clock;
pub mod color;
pub mod phase;
pub mod poem;
pub mod preset;

pub use activity::{ActivityMeter, warm};
pub use clock::{DEFAULT_TRANSITION_WINDOW_MINUTES, PhaseBlend, PhaseClock};
pub use color::{Rgba, lerp};
pub use phase::{Phase, UnknownPhase};
pub use poem::{PoemError, PoemWord};
pub use preset::{OpacityRange, PhasePreset};
