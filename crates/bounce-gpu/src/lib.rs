//! # Bounce GPU Backend
//!
//! Data-parallel implementation of the integrate pass: the particle buffer is
//! copied to the device, a per-particle compute kernel advances it (one
//! invocation per particle, no cross-thread synchronization needed since
//! boundary reflection is purely local), and the result is copied back to the
//! host. The collision pass stays on the host in `bounce-sim`.

pub mod integrator;

pub use integrator::GpuIntegrator;
