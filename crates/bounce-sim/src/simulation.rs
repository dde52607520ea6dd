//! Simulation state: particle store, initializer, frame tick and snapshot.

use std::f32::consts::TAU;

use bounce_core::{
    elastic_response, in_contact, Particle, COLLISION_DAMPING, COLS, GRID_SPACING, MAX_MASS,
    MIN_MASS, NEUTRAL_COLOR, ROWS, WINDOW_HEIGHT, WINDOW_WIDTH,
};
use glam::Vec2;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::error::{Error, Result};
use crate::integrator::{CpuIntegrator, Integrator};

/// The complete state of one bouncing-particle simulation.
///
/// Owns the particle buffer exclusively; the renderer only ever sees the
/// read-only snapshot from [`Simulation::particles`], strictly between ticks.
/// Multiple independent instances are fine — there is no shared or static
/// state, and a seeded instance replays the exact same trajectory.
pub struct Simulation {
    particles: Vec<Particle>,
    rng: StdRng,
    integrator: Box<dyn Integrator>,
}

impl Simulation {
    /// Create an empty simulation with the sequential CPU integrator.
    ///
    /// `seed` makes initialization reproducible; `None` draws a seed from the
    /// thread-local entropy source.
    pub fn new(seed: Option<u64>) -> Self {
        Self::with_integrator(seed, Box::new(CpuIntegrator))
    }

    /// Create an empty simulation with a caller-chosen integration backend.
    pub fn with_integrator(seed: Option<u64>, integrator: Box<dyn Integrator>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::seed_from_u64(rand::rng().random()),
        };
        Self {
            particles: Vec::new(),
            rng,
            integrator,
        }
    }

    /// Size the store to exactly `count` zeroed particles, discarding any
    /// prior contents. Meant to run once before the first [`Simulation::reset`],
    /// not while a simulation is in flight.
    pub fn resize(&mut self, count: usize) {
        self.particles.clear();
        self.particles.resize(count, Particle::default());
        log::debug!("particle store resized to {count}");
    }

    /// (Re)seed every particle: deterministic grid layout, randomized
    /// kinematics. This is the single entry point the host invokes at startup
    /// and on the external reset trigger.
    ///
    /// The grid is centered in the window with one cell per particle; cell
    /// spacing is below the collision diameter so immediate contacts are
    /// possible. The launch angle is drawn from `[-1, 1] * TAU` — an effective
    /// range of two full turns, reproduced as-is from the original tuning —
    /// and the launch speed from `2 + [-2, 2]`, i.e. 0 to 4 pixels per tick.
    pub fn reset(&mut self) -> Result<()> {
        if self.particles.is_empty() {
            return Err(Error::EmptyStore("reset()"));
        }

        let start_x = (WINDOW_WIDTH - (COLS as f32 - 1.0) * GRID_SPACING) / 2.0;
        let start_y = (WINDOW_HEIGHT - (ROWS as f32 - 1.0) * GRID_SPACING) / 2.0;

        let Self { particles, rng, .. } = self;
        for (i, p) in particles.iter_mut().enumerate() {
            let row = i / COLS;
            let col = i % COLS;
            p.x = start_x + col as f32 * GRID_SPACING;
            p.y = start_y + row as f32 * GRID_SPACING;

            let angle = rng.random_range(-1.0f32..=1.0) * TAU;
            let speed = 2.0 + rng.random_range(-2.0f32..=2.0);
            let vel = Vec2::from_angle(angle) * speed;
            p.vx = vel.x;
            p.vy = vel.y;

            p.mass = rng.random_range(MIN_MASS..=MAX_MASS);
            p.color = NEUTRAL_COLOR;
            p.collision_timer = 0.0;
        }

        log::info!(
            "seeded {} particles on a {ROWS}x{COLS} grid",
            self.particles.len()
        );
        Ok(())
    }

    /// Advance the simulation by one fixed tick: integrate pass (backend),
    /// then collision pass (host).
    pub fn step(&mut self) -> Result<()> {
        if self.particles.is_empty() {
            return Err(Error::EmptyStore("step()"));
        }
        self.integrator.advance(&mut self.particles)?;
        self.resolve_collisions();
        Ok(())
    }

    /// Brute-force pass over all unordered pairs.
    ///
    /// Pairs are resolved in `(i, j)` iteration order against the *current*
    /// velocities, so a particle hit by several partners in one frame hands
    /// each later pair its already-updated velocity. This progressive
    /// semantics is an observable part of the simulation's behavior; do not
    /// replace it with snapshot-and-commit.
    fn resolve_collisions(&mut self) {
        let n = self.particles.len();
        for i in 0..n {
            for j in (i + 1)..n {
                if !in_contact(&self.particles[i], &self.particles[j]) {
                    continue;
                }

                let (m1, m2) = (self.particles[i].mass, self.particles[j].mass);

                // Same 1D formula per axis, damping applied per axis.
                let (v1x, v2x) =
                    elastic_response(m1, m2, self.particles[i].vx, self.particles[j].vx);
                self.particles[i].vx = v1x * COLLISION_DAMPING;
                self.particles[j].vx = v2x * COLLISION_DAMPING;

                let (v1y, v2y) =
                    elastic_response(m1, m2, self.particles[i].vy, self.particles[j].vy);
                self.particles[i].vy = v1y * COLLISION_DAMPING;
                self.particles[j].vy = v2y * COLLISION_DAMPING;

                self.particles[i].mark_collided();
                self.particles[j].mark_collided();
            }
        }
    }

    /// Read-only ordered snapshot for the renderer.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Number of particles in the store.
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Whether the store has been sized yet.
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bounce_core::{COLLIDED_COLOR, FLASH_DURATION, PARTICLE_SIZE};

    fn particle_at(x: f32, y: f32, vx: f32, vy: f32, mass: f32) -> Particle {
        Particle {
            x,
            y,
            vx,
            vy,
            mass,
            color: NEUTRAL_COLOR,
            collision_timer: 0.0,
        }
    }

    fn sim_with(particles: Vec<Particle>) -> Simulation {
        let mut sim = Simulation::new(Some(7));
        sim.particles = particles;
        sim
    }

    #[test]
    fn equal_mass_head_on_swaps_damped_velocities() {
        // Two overlapping particles, m=1 each, closing at 1 px/tick from
        // either side: equal masses swap velocity, then damping applies.
        let mut sim = sim_with(vec![
            particle_at(400.0, 300.0, 1.0, 0.0, 1.0),
            particle_at(400.0, 300.0, -1.0, 0.0, 1.0),
        ]);
        sim.resolve_collisions();

        let p = sim.particles();
        assert_eq!(p[0].vx, -COLLISION_DAMPING);
        assert_eq!(p[1].vx, COLLISION_DAMPING);
        assert_eq!(p[0].vy, 0.0);
        assert_eq!(p[1].vy, 0.0);
        for q in p {
            assert_eq!(q.color, COLLIDED_COLOR);
            assert_eq!(q.collision_timer, FLASH_DURATION);
        }
    }

    #[test]
    fn contact_below_diameter_triggers_flash() {
        let mut sim = sim_with(vec![
            particle_at(100.0, 100.0, 0.0, 0.0, 0.5),
            particle_at(100.0 + PARTICLE_SIZE, 100.0, 0.0, 0.0, 5.0),
        ]);
        sim.resolve_collisions();

        for q in sim.particles() {
            assert!(q.is_collided());
            assert_eq!(q.collision_timer, FLASH_DURATION);
        }
    }

    #[test]
    fn later_pairs_observe_updated_velocities() {
        // Three coincident unit masses. The pass visits (0,1), (0,2), (1,2)
        // in order; with snapshot semantics the outcome would differ.
        let q = COLLISION_DAMPING;
        let mut sim = sim_with(vec![
            particle_at(200.0, 200.0, 1.0, 0.0, 1.0),
            particle_at(200.0, 200.0, -1.0, 0.0, 1.0),
            particle_at(200.0, 200.0, 0.0, 0.0, 1.0),
        ]);
        sim.resolve_collisions();

        // (0,1): v0 = -q, v1 = q. (0,2): v0 = 0, v2 = -q*q.
        // (1,2): v1 = -q*q*q, v2 = q*q.
        let p = sim.particles();
        assert!((p[0].vx - 0.0).abs() < 1e-6);
        assert!((p[1].vx + q * q * q).abs() < 1e-6);
        assert!((p[2].vx - q * q).abs() < 1e-6);
    }

    #[test]
    fn lingering_overlap_retriggers_every_frame() {
        // No cooldown: a pair that stays within the collision radius keeps
        // re-arming the flash timer each tick.
        let mut sim = sim_with(vec![
            particle_at(400.0, 300.0, 0.0, 0.0, 1.0),
            particle_at(400.0, 300.0, 0.0, 0.0, 1.0),
        ]);
        sim.step().unwrap();
        sim.step().unwrap();

        for q in sim.particles() {
            assert_eq!(q.collision_timer, FLASH_DURATION);
        }
    }

    #[test]
    fn step_on_unsized_store_fails_fast() {
        let mut sim = Simulation::new(Some(1));
        assert!(matches!(sim.step(), Err(Error::EmptyStore(_))));
    }

    #[test]
    fn reset_on_unsized_store_fails_fast() {
        let mut sim = Simulation::new(Some(1));
        assert!(matches!(sim.reset(), Err(Error::EmptyStore(_))));
    }

    #[test]
    fn resize_discards_previous_contents() {
        let mut sim = Simulation::new(Some(3));
        sim.resize(4);
        sim.reset().unwrap();
        sim.resize(4);
        for p in sim.particles() {
            assert_eq!(*p, Particle::default());
        }
    }
}
