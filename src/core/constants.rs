//! Tunable factors and fixed tuning constants for the force model.
//!
//! The three `Constants` factors are the control surface of the simulation;
//! everything else is a fixed scale chosen for visually legible behavior at
//! interactive frame rates, not for physical accuracy.

/// Scale applied to the cosmological push/pull per unit of center offset.
pub const COSMO_SCALE: f64 = 0.0001;

/// Gravitational strength for the inverse-square pairwise term.
pub const GRAVITY_STRENGTH: f64 = 0.01;

/// Strength of the inverse-distance clumping term at peak response.
pub const CLUMPING_STRENGTH: f64 = 0.05;

/// Squared-distance singularity guard: pairs closer than one unit exert no
/// force on each other.
pub const MIN_INTERACTION_DIST_SQ: f64 = 1.0;

/// Interaction range cutoff: pairs at or beyond this separation exert no
/// force on each other. Bounds pairwise influence; long-range behavior is
/// carried by the cosmological term alone.
pub const INTERACTION_RANGE: f64 = 50.0;

/// Above this `fine_structure` value the pairwise force switches to pure
/// inverted gravity. A hard threshold, not a blend.
pub const REPULSION_THRESHOLD: f64 = 1.2;

/// Velocity multiplier on boundary contact: reverses direction and halves
/// speed.
pub const BOUNCE_DAMPING: f64 = -0.5;

/// Half-width of the uniform interval initial velocity components are drawn
/// from at reset.
pub const INITIAL_SPEED: f64 = 2.0;

/// The three tunable factors supplied by the caller on every step.
///
/// 1.0 is the neutral baseline for each factor. The engine never stores
/// these; whoever owns the control surface passes the current values in,
/// which keeps the core free of UI state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constants {
    /// > 1.0 pushes particles away from the domain center, < 1.0 pulls them
    /// toward it, 1.0 contributes nothing.
    pub cosmological: f64,
    /// Linear scale on the pairwise gravitational attraction; 0.0 switches
    /// gravity off.
    pub higgs_mass: f64,
    /// Drives the short-range clumping response, peaking at 1.0; values
    /// above [`REPULSION_THRESHOLD`] flip the pair force to pure repulsion.
    pub fine_structure: f64,
}

impl Default for Constants {
    fn default() -> Self {
        Self {
            cosmological: 1.0,
            higgs_mass: 1.0,
            fine_structure: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_neutral_baseline() {
        let c = Constants::default();
        assert_eq!(c.cosmological, 1.0);
        assert_eq!(c.higgs_mass, 1.0);
        assert_eq!(c.fine_structure, 1.0);
    }
}
