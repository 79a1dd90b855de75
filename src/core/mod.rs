//! Core simulation data structures and the stepping engine.
//!
//! [`ParticleSystem`] owns the particle collection and the domain bounds;
//! [`step`] advances it by one discrete time step under the caller-supplied
//! [`Constants`].

pub mod constants;
pub mod engine;
pub mod particle;
pub mod system;

pub use constants::Constants;
pub use engine::step;
pub use particle::Particle;
pub use system::ParticleSystem;
