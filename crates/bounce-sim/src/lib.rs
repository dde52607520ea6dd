//! # Bounce Simulation Engine
//!
//! Owns the particle store and runs the fixed-step frame tick: an integrate
//! pass (pluggable CPU or GPU execution), then a brute-force pairwise
//! collision pass on the host.

pub mod error;
pub mod integrator;
pub mod simulation;

pub use error::{Error, Result};
pub use integrator::{CpuIntegrator, Integrator};
pub use simulation::Simulation;
