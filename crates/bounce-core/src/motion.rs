//! Per-particle motion step: flash-timer decay, Euler integration and
//! boundary reflection.
//!
//! This is the canonical host implementation. The data-parallel backend runs
//! the same step as a WGSL kernel (one invocation per particle); both must
//! stay in lockstep.

use crate::constants::{DT, WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::particle::{Particle, NEUTRAL_COLOR};

/// Advance one particle by one fixed tick.
///
/// Order matters and is observable: timer decay first, then position update,
/// then reflection per axis. Velocity is applied as a per-tick displacement
/// (not scaled by `DT`); only the flash timer runs in seconds.
pub fn step_particle(p: &mut Particle) {
    if p.collision_timer > 0.0 {
        p.collision_timer -= DT;
        if p.collision_timer <= 0.0 {
            p.collision_timer = 0.0;
            p.color = NEUTRAL_COLOR;
        }
    }

    p.x += p.vx;
    p.y += p.vy;

    // Reflect off the domain edges, axis by axis: negate the velocity
    // component and snap the position to the nearer bound. No energy loss.
    if p.x <= 0.0 || p.x >= WINDOW_WIDTH {
        p.vx = -p.vx;
        p.x = if p.x <= 0.0 { 0.0 } else { WINDOW_WIDTH };
    }
    if p.y <= 0.0 || p.y >= WINDOW_HEIGHT {
        p.vy = -p.vy;
        p.y = if p.y <= 0.0 { 0.0 } else { WINDOW_HEIGHT };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::FLASH_DURATION;
    use crate::particle::COLLIDED_COLOR;
    use bytemuck::Zeroable;

    fn resting_particle(x: f32, y: f32) -> Particle {
        Particle {
            x,
            y,
            mass: 1.0,
            color: NEUTRAL_COLOR,
            ..Particle::zeroed()
        }
    }

    #[test]
    fn wall_bounce_reflects_and_clamps() {
        let mut p = resting_particle(0.0, 300.0);
        p.vx = -3.0;
        step_particle(&mut p);
        assert_eq!(p.x, 0.0);
        assert_eq!(p.vx, 3.0);
    }

    #[test]
    fn far_wall_bounce_clamps_to_width() {
        let mut p = resting_particle(799.0, 300.0);
        p.vx = 5.0;
        step_particle(&mut p);
        assert_eq!(p.x, WINDOW_WIDTH);
        assert_eq!(p.vx, -5.0);
    }

    #[test]
    fn interior_motion_is_plain_euler() {
        let mut p = resting_particle(100.0, 100.0);
        p.vx = 1.5;
        p.vy = -2.5;
        step_particle(&mut p);
        assert_eq!(p.x, 101.5);
        assert_eq!(p.y, 97.5);
        assert_eq!(p.vx, 1.5);
        assert_eq!(p.vy, -2.5);
    }

    #[test]
    fn flash_reverts_after_six_ticks() {
        let mut p = resting_particle(400.0, 300.0);
        p.mark_collided();

        // ceil(0.1 / (1/60)) = 6: red for five ticks, neutral on the sixth.
        for _ in 0..5 {
            step_particle(&mut p);
            assert_eq!(p.color, COLLIDED_COLOR);
            assert!(p.collision_timer > 0.0);
        }
        step_particle(&mut p);
        assert_eq!(p.color, NEUTRAL_COLOR);
        assert_eq!(p.collision_timer, 0.0);
    }

    #[test]
    fn timer_decays_by_one_tick() {
        let mut p = resting_particle(400.0, 300.0);
        p.mark_collided();
        step_particle(&mut p);
        assert!((p.collision_timer - (FLASH_DURATION - DT)).abs() < 1e-6);
    }
}
