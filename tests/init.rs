use cosmosim::core::{step, Constants, ParticleSystem};
use cosmosim::error::Result;

/// Initialization: every particle spawns exactly at the domain center with a
/// random velocity whose components lie within the dispersal speed range.
#[test]
fn dispersal_starts_all_particles_at_center() -> Result<()> {
    let system = ParticleSystem::new(50, [800.0, 600.0], Some(42))?;
    assert_eq!(system.num_particles(), 50);
    for p in &system.particles {
        assert_eq!(p.r, [400.0, 300.0], "particles must spawn at the center");
        for vk in &p.v {
            assert!(
                (-2.0..=2.0).contains(vk),
                "dispersal speed component {vk} outside [-2, 2]"
            );
        }
    }
    Ok(())
}

/// The same seed must reproduce the same trajectory bit for bit, including
/// across many steps under non-neutral factors.
#[test]
fn seeded_runs_are_reproducible() -> Result<()> {
    let constants = Constants {
        cosmological: 1.3,
        higgs_mass: 2.0,
        fine_structure: 0.7,
    };
    let mut a = ParticleSystem::new(40, [300.0, 300.0], Some(2024))?;
    let mut b = ParticleSystem::new(40, [300.0, 300.0], Some(2024))?;
    for _ in 0..25 {
        step(&mut a, &constants);
        step(&mut b, &constants);
    }
    assert_eq!(
        a.positions(),
        b.positions(),
        "positions diverged under a shared seed"
    );
    assert_eq!(
        a.velocities(),
        b.velocities(),
        "velocities diverged under a shared seed"
    );
    Ok(())
}

/// Different seeds must give different dispersal draws.
#[test]
fn different_seeds_diverge() -> Result<()> {
    let a = ParticleSystem::new(20, [300.0, 300.0], Some(1))?;
    let b = ParticleSystem::new(20, [300.0, 300.0], Some(2))?;
    assert_ne!(
        a.velocities(),
        b.velocities(),
        "expected distinct dispersal draws for distinct seeds"
    );
    Ok(())
}

/// A zero-particle system is valid; stepping it is a no-op and snapshots are
/// empty.
#[test]
fn zero_particles_is_valid() -> Result<()> {
    let mut system = ParticleSystem::new(0, [100.0, 100.0], Some(5))?;
    step(&mut system, &Constants::default());
    assert!(system.positions().is_empty());
    assert!(system.velocities().is_empty());
    assert_eq!(system.kinetic_energy(), 0.0);
    Ok(())
}

/// Non-finite or non-positive bounds are rejected by construction, reset and
/// resize alike, and a rejected call leaves the system untouched.
#[test]
fn invalid_bounds_are_rejected() -> Result<()> {
    assert!(ParticleSystem::new(10, [0.0, 100.0], Some(1)).is_err());
    assert!(ParticleSystem::new(10, [100.0, -5.0], Some(1)).is_err());
    assert!(ParticleSystem::new(10, [f64::NAN, 100.0], Some(1)).is_err());
    assert!(ParticleSystem::new(10, [100.0, f64::INFINITY], Some(1)).is_err());

    let mut system = ParticleSystem::new(10, [100.0, 100.0], Some(1))?;
    assert!(system.reset(10, [100.0, 0.0]).is_err());
    assert!(system.resize([-1.0, 50.0]).is_err());
    assert_eq!(system.bounds(), [100.0, 100.0]);
    assert_eq!(system.num_particles(), 10);
    Ok(())
}

/// Reset discards the old population and re-disperses from the center of the
/// new domain.
#[test]
fn reset_replaces_population() -> Result<()> {
    let mut system = ParticleSystem::new(10, [200.0, 200.0], Some(7))?;
    for _ in 0..5 {
        step(&mut system, &Constants::default());
    }
    system.reset(25, [400.0, 100.0])?;
    assert_eq!(system.num_particles(), 25);
    assert_eq!(system.bounds(), [400.0, 100.0]);
    for r in system.positions() {
        assert_eq!(r, [200.0, 50.0], "reset must re-disperse from the new center");
    }
    Ok(())
}

/// Resize leaves positions untouched; particles stranded outside the new
/// domain are reflected back in by the next step's boundary pass.
#[test]
fn resize_keeps_positions_and_recovers_escapees() -> Result<()> {
    let mut system = ParticleSystem::new(30, [400.0, 400.0], Some(99))?;
    for _ in 0..60 {
        step(&mut system, &Constants::default());
    }
    let before = system.positions();
    system.resize([50.0, 50.0])?;
    assert_eq!(system.positions(), before, "resize must not move particles");

    step(&mut system, &Constants::default());
    for r in system.positions() {
        for (rk, hi) in r.iter().zip(system.bounds()) {
            assert!(
                (0.0..=hi).contains(rk),
                "particle at {rk} escaped [0, {hi}] after resize"
            );
        }
    }
    Ok(())
}

/// Position and velocity snapshots are parallel arrays in particle order.
#[test]
fn snapshots_follow_particle_order() -> Result<()> {
    let mut system = ParticleSystem::new(12, [100.0, 100.0], Some(3))?;
    for _ in 0..3 {
        step(&mut system, &Constants::default());
    }
    let rs = system.positions();
    let vs = system.velocities();
    assert_eq!(rs.len(), system.num_particles());
    assert_eq!(vs.len(), system.num_particles());
    for (i, p) in system.particles.iter().enumerate() {
        assert_eq!(rs[i], p.r);
        assert_eq!(vs[i], p.v);
    }
    Ok(())
}

/// Total kinetic energy is the sum of per-particle 1/2 m v^2.
#[test]
fn kinetic_energy_sums_over_particles() -> Result<()> {
    let system = ParticleSystem::new(8, [100.0, 100.0], Some(11))?;
    let expected: f64 = system
        .particles
        .iter()
        .map(|p| 0.5 * p.mass * (p.v[0] * p.v[0] + p.v[1] * p.v[1]))
        .sum();
    let got = system.kinetic_energy();
    assert!(
        (got - expected).abs() < 1e-12,
        "kinetic energy mismatch: {got} vs {expected}"
    );
    Ok(())
}
