//! # Particle Physics
//!
//! Kinematics of backdrop particles: straight-line drift, elastic reflection
//! at the surface edges, pointer repulsion and connection fading.

pub mod constants;
pub mod forces;
pub mod particle;

pub use constants::*;
pub use forces::*;
pub use particle::*;
