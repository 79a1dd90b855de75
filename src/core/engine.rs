use crate::core::constants::{
    Constants, BOUNCE_DAMPING, CLUMPING_STRENGTH, COSMO_SCALE, GRAVITY_STRENGTH,
    INTERACTION_RANGE, MIN_INTERACTION_DIST_SQ, REPULSION_THRESHOLD,
};
use crate::core::particle::DIM;
use crate::core::system::ParticleSystem;

/// Advance the system by exactly one discrete time step.
///
/// Phases, in order:
/// 1. cosmological kick, per particle, proportional to its offset from the
///    domain center and to `cosmological - 1.0`;
/// 2. pairwise kicks, each unordered pair once (ascending `i`, then
///    ascending `j > i`), applied equal and opposite the moment they are
///    computed;
/// 3. Euler integration, one unit of simulated time per call;
/// 4. boundary reflection, per axis: negate-and-dampen the velocity
///    component and clamp the position back into the domain.
///
/// Deterministic for identical state and constants: randomness is consumed
/// only at reset, never here. Constants are not validated; non-finite values
/// propagate into particle state, and screening them is the control
/// surface's job. An empty system steps as a no-op.
pub fn step(system: &mut ParticleSystem, constants: &Constants) {
    apply_cosmological(system, constants.cosmological);
    apply_pairwise(system, constants);
    integrate(system);
    reflect_at_bounds(system);
}

/// Triangular response of the clumping force to `fine_structure`: 1.0 at the
/// baseline, falling off linearly on both sides, negative outside [0, 2].
#[inline]
pub fn fine_structure_effect(fine_structure: f64) -> f64 {
    1.0 - (1.0 - fine_structure).abs()
}

/// Push every particle away from (or pull it toward) the domain center.
/// `cosmological == 1.0` contributes exactly zero.
fn apply_cosmological(system: &mut ParticleSystem, cosmological: f64) {
    let center = system.center();
    let push = (cosmological - 1.0) * COSMO_SCALE;
    for p in &mut system.particles {
        for k in 0..DIM {
            p.v[k] += (p.r[k] - center[k]) * push;
        }
    }
}

/// Accumulate pairwise kicks over every unordered pair, each processed once.
///
/// Positions are frozen for the whole pass; kicks land on velocities
/// immediately, so later pairs in the same pass see them. Velocity is never
/// an input to the pair geometry, which keeps the pass deterministic in
/// index order.
fn apply_pairwise(system: &mut ParticleSystem, constants: &Constants) {
    let n = system.particles.len();
    for i in 0..n {
        for j in (i + 1)..n {
            let mut d = [0.0_f64; DIM];
            for (k, dk) in d.iter_mut().enumerate() {
                *dk = system.particles[j].r[k] - system.particles[i].r[k];
            }
            let Some(kick) = pair_kick(d, constants) else {
                continue;
            };
            for (k, &fk) in kick.iter().enumerate() {
                system.particles[i].v[k] += fk;
                system.particles[j].v[k] -= fk;
            }
        }
    }
}

/// Compute the velocity kick applied to the first particle of a pair (and
/// negated for the second), given the center offset `d = r_j - r_i`.
///
/// Returns `None` when the pair is gated out: closer than the singularity
/// guard, or at/beyond the interaction range.
fn pair_kick(d: [f64; DIM], constants: &Constants) -> Option<[f64; DIM]> {
    let dist_sq = dot(&d, &d);
    if dist_sq < MIN_INTERACTION_DIST_SQ || dist_sq >= INTERACTION_RANGE * INTERACTION_RANGE {
        return None;
    }
    let dist = dist_sq.sqrt();
    let gravity = GRAVITY_STRENGTH / dist_sq * constants.higgs_mass;

    // Above the threshold gravity inverts and the clumping term is dropped
    // outright; a hard switch, not a blend.
    let magnitude = if constants.fine_structure > REPULSION_THRESHOLD {
        -gravity
    } else {
        gravity + fine_structure_effect(constants.fine_structure) * CLUMPING_STRENGTH / dist
    };

    let mut kick = [0.0_f64; DIM];
    for (fk, &dk) in kick.iter_mut().zip(&d) {
        *fk = dk / dist * magnitude;
    }
    Some(kick)
}

/// Explicit Euler: one unit of simulated time per step.
fn integrate(system: &mut ParticleSystem) {
    for p in &mut system.particles {
        for k in 0..DIM {
            p.r[k] += p.v[k];
        }
    }
}

/// Reflect escaped particles back into `[0, bound]` on each axis
/// independently: the velocity component is reversed and halved, the
/// position clamped. A particle that exits through a corner gets both
/// components dampened in the same step.
fn reflect_at_bounds(system: &mut ParticleSystem) {
    let bounds = system.bounds();
    for p in &mut system.particles {
        for (k, &hi) in bounds.iter().enumerate() {
            if p.r[k] < 0.0 || p.r[k] > hi {
                p.v[k] *= BOUNCE_DAMPING;
                p.r[k] = p.r[k].clamp(0.0, hi);
            }
        }
    }
}

#[inline]
fn dot(a: &[f64; DIM], b: &[f64; DIM]) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}
