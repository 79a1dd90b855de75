use crate::core::constants::INITIAL_SPEED;
use crate::core::particle::{Particle, DIM};
use crate::error::{Error, Result};
use rand::{rng, rngs::StdRng, Rng, SeedableRng};

/// Simulation state: the ordered particle collection and the rectangular
/// domain it lives in.
///
/// This type only stores and (re)initializes state; advancing it in time is
/// [`step`](crate::core::engine::step)'s job. The particle order is stable,
/// which is what makes the pairwise pass deterministic.
#[derive(Debug)]
pub struct ParticleSystem {
    /// Particle collection, in creation order.
    pub particles: Vec<Particle>,
    bounds: [f64; DIM],
    rng: StdRng,
}

impl ParticleSystem {
    /// Create a system of `count` particles inside a `bounds[0]` x `bounds[1]`
    /// domain.
    ///
    /// All particles start at the domain center with velocity components
    /// drawn independently and uniformly from [-2, 2], a "Big Bang" style
    /// dispersal. `count == 0` is valid and yields an empty system.
    ///
    /// `seed` makes the dispersal reproducible; `None` picks an arbitrary
    /// seed. Randomness is only ever consumed here and in [`reset`]; stepping
    /// is fully deterministic.
    ///
    /// Errors: `Error::InvalidParam` if a bounds component is non-finite or
    /// not strictly positive.
    ///
    /// [`reset`]: ParticleSystem::reset
    pub fn new(count: usize, bounds: [f64; DIM], seed: Option<u64>) -> Result<Self> {
        validate_bounds(&bounds)?;

        let rng: StdRng = match seed {
            Some(s) => SeedableRng::seed_from_u64(s),
            None => SeedableRng::seed_from_u64(rng().random()),
        };

        let mut system = Self {
            particles: Vec::with_capacity(count),
            bounds,
            rng,
        };
        system.disperse(count)?;
        log::debug!(
            "created system: {count} particles in a {}x{} domain",
            bounds[0],
            bounds[1]
        );
        Ok(system)
    }

    /// Discard all particles and create `count` fresh ones at the center of
    /// `bounds`, with new random velocities from the system's seeded stream.
    pub fn reset(&mut self, count: usize, bounds: [f64; DIM]) -> Result<()> {
        validate_bounds(&bounds)?;
        self.bounds = bounds;
        self.disperse(count)?;
        log::debug!(
            "reset: {count} particles dispersed from the center of a {}x{} domain",
            self.bounds[0],
            self.bounds[1]
        );
        Ok(())
    }

    /// Replace the domain bounds without touching particle positions.
    ///
    /// Particles left outside the new bounds are not corrected here; the
    /// next step's boundary pass reflects them back in.
    pub fn resize(&mut self, bounds: [f64; DIM]) -> Result<()> {
        validate_bounds(&bounds)?;
        self.bounds = bounds;
        log::debug!("resized domain to {}x{}", bounds[0], bounds[1]);
        Ok(())
    }

    /// Number of particles.
    pub fn num_particles(&self) -> usize {
        self.particles.len()
    }

    /// Domain bounds as [width, height].
    pub fn bounds(&self) -> [f64; DIM] {
        self.bounds
    }

    /// Geometric center of the domain.
    pub fn center(&self) -> [f64; DIM] {
        let mut c = [0.0_f64; DIM];
        for (ck, &lk) in c.iter_mut().zip(&self.bounds) {
            *ck = lk / 2.0;
        }
        c
    }

    /// Positions as a Vec of fixed-size arrays, in particle order. This is
    /// the read-only snapshot a renderer consumes each frame.
    pub fn positions(&self) -> Vec<[f64; DIM]> {
        self.particles.iter().map(|p| p.r).collect()
    }

    /// Velocities as a Vec of fixed-size arrays, in particle order.
    pub fn velocities(&self) -> Vec<[f64; DIM]> {
        self.particles.iter().map(|p| p.v).collect()
    }

    /// Compute total kinetic energy (diagnostic).
    pub fn kinetic_energy(&self) -> f64 {
        self.particles.iter().map(|p| p.kinetic_energy()).sum()
    }

    fn disperse(&mut self, count: usize) -> Result<()> {
        self.particles.clear();
        let center = self.center();
        for _ in 0..count {
            let mut v = [0.0_f64; DIM];
            for vk in &mut v {
                *vk = self.rng.random_range(-INITIAL_SPEED..=INITIAL_SPEED);
            }
            self.particles.push(Particle::new(center, v, 1.0)?);
        }
        Ok(())
    }
}

fn validate_bounds(bounds: &[f64; DIM]) -> Result<()> {
    if !bounds.iter().all(|&l| l.is_finite() && l > 0.0) {
        return Err(Error::InvalidParam(
            "bounds components must be finite and > 0".into(),
        ));
    }
    Ok(())
}
