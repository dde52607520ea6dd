//! # Bounce Core
//!
//! Particle record, fixed configuration and the per-particle/per-pair physics
//! for the 2D bouncing-particle simulation.

pub mod collision;
pub mod constants;
pub mod motion;
pub mod particle;

pub use collision::*;
pub use constants::*;
pub use motion::*;
pub use particle::*;
