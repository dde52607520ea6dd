//! Execution-strategy seam for the integrate pass.
//!
//! The per-particle step (timer decay, Euler, reflection) is purely local,
//! so it can run either as a sequential host loop or as a data-parallel GPU
//! kernel with one invocation per particle. The collision pass is pairwise
//! and stays on the host regardless of the chosen integrator.

use bounce_core::{step_particle, Particle};

use crate::error::Result;

/// Advances every particle in the buffer by one fixed tick.
///
/// Implementations must reproduce [`bounce_core::step_particle`] exactly for
/// each element; only the execution strategy may differ.
pub trait Integrator {
    fn advance(&mut self, particles: &mut [Particle]) -> Result<()>;
}

/// Sequential host-side integrator. This is the reference implementation and
/// the default backend.
#[derive(Debug, Default)]
pub struct CpuIntegrator;

impl Integrator for CpuIntegrator {
    fn advance(&mut self, particles: &mut [Particle]) -> Result<()> {
        for p in particles.iter_mut() {
            step_particle(p);
        }
        Ok(())
    }
}
