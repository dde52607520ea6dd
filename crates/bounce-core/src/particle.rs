//! The particle record shared by the CPU path and the GPU kernel.

use bytemuck::{Pod, Zeroable};

use crate::constants::FLASH_DURATION;

/// One simulated particle.
///
/// The layout is `repr(C)` with scalar `f32` fields only (36 bytes, no
/// padding) so the same array-of-structs buffer can be handed to a WGSL
/// storage binding unchanged.
#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Particle {
    /// Position in window-pixel coordinates, kept inside the domain after
    /// every integrate pass.
    pub x: f32,
    pub y: f32,
    /// Velocity in pixels per tick.
    pub vx: f32,
    pub vy: f32,
    /// Sampled once at seeding, immutable afterwards.
    pub mass: f32,
    /// Normalized RGB; exactly [`NEUTRAL_COLOR`] or [`COLLIDED_COLOR`].
    pub color: [f32; 3],
    /// Seconds left in the collided color state; 0 means neutral.
    pub collision_timer: f32,
}

/// Color of a particle that is not currently flashing (yellow).
pub const NEUTRAL_COLOR: [f32; 3] = [1.0, 1.0, 0.0];

/// Color of a particle during its collision flash (red).
pub const COLLIDED_COLOR: [f32; 3] = [1.0, 0.0, 0.0];

impl Particle {
    /// Switch to the collided color and (re)arm the flash timer. Colliding
    /// again while still red overwrites the timer, it does not accumulate.
    #[inline]
    pub fn mark_collided(&mut self) {
        self.color = COLLIDED_COLOR;
        self.collision_timer = FLASH_DURATION;
    }

    /// Whether the particle is currently in the collided color state.
    #[inline]
    pub fn is_collided(&self) -> bool {
        self.collision_timer > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeroed_particle_is_neutral() {
        let p = Particle::zeroed();
        assert!(!p.is_collided());
        assert_eq!(p.collision_timer, 0.0);
    }

    #[test]
    fn mark_collided_arms_timer_and_color() {
        let mut p = Particle::zeroed();
        p.mark_collided();
        assert!(p.is_collided());
        assert_eq!(p.color, COLLIDED_COLOR);
        assert_eq!(p.collision_timer, FLASH_DURATION);
    }

    #[test]
    fn record_layout_is_padding_free() {
        // 9 scalar f32 fields; the GPU kernel relies on this exact stride.
        assert_eq!(std::mem::size_of::<Particle>(), 36);
    }
}
