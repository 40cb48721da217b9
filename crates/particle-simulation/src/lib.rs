//! # Particle Simulation Engine
//!
//! Themed backdrop simulation: theme parameters as data, the per-page
//! simulation context and the animation loop that drives it frame by frame.

pub mod animation;
pub mod params;
pub mod simulation;

pub use animation::*;
pub use params::*;
pub use simulation::*;
