//! Fixed configuration for the simulation domain and particle population.
//!
//! These are compile-time constants, not runtime configuration: the domain is
//! a single 800x600 window and the population a centered 20x20 grid.

/// Domain width in window pixels.
pub const WINDOW_WIDTH: f32 = 800.0;

/// Domain height in window pixels.
pub const WINDOW_HEIGHT: f32 = 600.0;

/// Grid rows used by the initializer.
pub const ROWS: usize = 20;

/// Grid columns used by the initializer.
pub const COLS: usize = 20;

/// Total particle count (one per grid cell).
pub const PARTICLE_COUNT: usize = ROWS * COLS;

/// Lower bound of the uniform mass distribution.
pub const MIN_MASS: f32 = 0.5;

/// Upper bound of the uniform mass distribution.
pub const MAX_MASS: f32 = 5.0;

/// Base particle radius in pixels. Two particles collide when their centers
/// come closer than twice this value; the renderer also scales point sprites
/// from it.
pub const PARTICLE_SIZE: f32 = 1.0;

/// Grid spacing: denser than the collision diameter on purpose, so the seeded
/// layout can produce immediate contacts.
pub const GRID_SPACING: f32 = 2.0 * PARTICLE_SIZE;

/// Fixed simulation time step (seconds). Only the collision flash timer is in
/// wall-clock units; velocities are per-tick displacements.
pub const DT: f32 = 1.0 / 60.0;

/// How long a particle stays in the collided color state (seconds).
pub const FLASH_DURATION: f32 = 0.1;

/// Velocity damping applied to each resolved velocity component, once per
/// axis per collision.
pub const COLLISION_DAMPING: f32 = 0.9999;
