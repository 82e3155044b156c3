//! Decorative click particles.
//!
//! Every primary click anywhere on the page spawns a small burst of
//! colored dots at the pointer. They drift outward, grow and fade, and are
//! detached after a fixed lifetime. The effect never changes page state
//! and never stops the click from reaching its target.
//!
//! - [`EffectEmitter`]: the capture-phase listener and its timers
//! - [`EffectParticle`]: one dot, with its eased animation
//! - [`EffectSettings`]: counts, sizes and timings
//! - [`RandomSource`]: where the variety comes from

mod emitter;
pub mod palette;
mod particle;
mod random;
mod timer;

pub use emitter::{EffectEmitter, EffectSettings};
pub use palette::PALETTE;
pub use particle::{EffectParticle, Motion, ParticleFrame, PARTICLE_CLASS};
pub use random::{Lcg, RandomSource, Sequence};
pub use timer::TimerQueue;
