//! Deterministic simulation module
//!
//! All tap logic lives here. This module must be pure and deterministic:
//! - Timestamps are passed in, never read from a clock
//! - Seeded RNG only
//! - No rendering, storage or platform dependencies

pub mod counter;
pub mod particles;
pub mod state;
pub mod tick;

pub use counter::{AwardEvent, DepthCounter, TapOutcome};
pub use particles::{Particle, ParticleKind, ParticleSprite, ParticleSystem, advance, render};
pub use state::{DEFAULT_MAX_PARTICLES, GameState};
pub use tick::{Frame, TickInput, tick};
