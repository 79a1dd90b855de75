use crate::error::{Error, Result};

/// Fixed spatial dimension (2D).
pub const DIM: usize = 2;

/// A point mass evolved by the physics step.
///
/// Fields:
/// - `r`: position [x, y]
/// - `v`: velocity [vx, vy]
/// - `mass`: particle mass (> 0; uniformly 1.0 today, kept as a field so the
///   force law stays general)
///
/// Fields are public so callers and tests can force exact scenarios; the
/// constructor is the validated path.
#[derive(Debug, Clone)]
pub struct Particle {
    /// Position (x, y).
    pub r: [f64; DIM],
    /// Velocity (vx, vy).
    pub v: [f64; DIM],
    /// Mass (> 0).
    pub mass: f64,
}

impl Particle {
    /// Create a new particle after validating invariants.
    ///
    /// Errors:
    /// - `Error::InvalidParam` if `mass` is non-positive or any component is NaN/inf.
    pub fn new(r: [f64; DIM], v: [f64; DIM], mass: f64) -> Result<Self> {
        if !mass.is_finite() || mass <= 0.0 {
            return Err(Error::InvalidParam("mass must be finite and > 0".into()));
        }
        if !r.iter().all(|x| x.is_finite()) {
            return Err(Error::InvalidParam("position must be finite".into()));
        }
        if !v.iter().all(|x| x.is_finite()) {
            return Err(Error::InvalidParam("velocity must be finite".into()));
        }
        Ok(Self { r, v, mass })
    }

    /// Returns the particle's kinetic energy: 1/2 m |v|^2.
    #[inline]
    pub fn kinetic_energy(&self) -> f64 {
        let vsq: f64 = self.v.iter().map(|&c| c * c).sum();
        0.5 * self.mass * vsq
    }
}
