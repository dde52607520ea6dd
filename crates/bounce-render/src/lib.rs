//! # Bounce Renderer
//!
//! wgpu point-sprite renderer for the particle snapshot: window-pixel
//! coordinates to NDC with Y inversion, point size scaled by the square root
//! of the particle mass, particle color passed through.

pub mod renderer;

pub use renderer::ParticleRenderer;
