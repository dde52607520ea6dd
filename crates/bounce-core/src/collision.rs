//! Pairwise collision predicate and response formula.
//!
//! The response reuses the 1D elastic-collision formula independently per
//! velocity axis instead of resolving an impulse along the contact normal.
//! This is deliberately non-physical and must not be "corrected": the
//! observable behavior of the simulation depends on it.

use glam::Vec2;

use crate::constants::PARTICLE_SIZE;
use crate::particle::Particle;

/// Whether two particles are within collision range of each other.
#[inline]
pub fn in_contact(a: &Particle, b: &Particle) -> bool {
    let d = Vec2::new(b.x - a.x, b.y - a.y);
    d.length() < 2.0 * PARTICLE_SIZE
}

/// 1D elastic collision of two point masses, returning the post-collision
/// velocity components `(v1', v2')`.
///
/// Masses are strictly positive by construction, so `m1 + m2` needs no
/// zero guard.
#[inline]
pub fn elastic_response(m1: f32, m2: f32, v1: f32, v2: f32) -> (f32, f32) {
    let total = m1 + m2;
    (
        ((m1 - m2) * v1 + 2.0 * m2 * v2) / total,
        ((m2 - m1) * v2 + 2.0 * m1 * v1) / total,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytemuck::Zeroable;

    #[test]
    fn equal_masses_swap_velocities() {
        let (v1, v2) = elastic_response(1.0, 1.0, 1.0, -1.0);
        assert_eq!(v1, -1.0);
        assert_eq!(v2, 1.0);
    }

    #[test]
    fn stationary_heavy_partner_reverses_light_one() {
        // m2 >> m1 approaches a wall-like response for particle 1.
        let (v1, v2) = elastic_response(1.0, 1000.0, 5.0, 0.0);
        assert!(v1 < 0.0);
        assert!(v2.abs() < 0.011);
    }

    #[test]
    fn momentum_is_conserved() {
        let (m1, m2) = (1.5, 4.0);
        let (u1, u2) = (2.0, -3.0);
        let (v1, v2) = elastic_response(m1, m2, u1, u2);
        let before = m1 * u1 + m2 * u2;
        let after = m1 * v1 + m2 * v2;
        assert!((before - after).abs() < 1e-4);
    }

    #[test]
    fn contact_at_sub_diameter_distance() {
        let mut a = Particle::zeroed();
        let mut b = Particle::zeroed();
        a.x = 100.0;
        a.y = 100.0;
        b.x = 100.0 + PARTICLE_SIZE;
        b.y = 100.0;
        assert!(in_contact(&a, &b));

        b.x = 100.0 + 2.0 * PARTICLE_SIZE;
        assert!(!in_contact(&a, &b));
    }
}
