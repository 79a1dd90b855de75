//! A tunable-constant N-body toy universe.
//!
//! The core is a discrete-time N-body system over point masses in a
//! rectangular 2D domain: each step superposes a cosmological expansion
//! force with pairwise gravity and a short-range clumping force, integrates
//! one Euler step, and reflects escapees off the walls. Three scalar
//! factors (`cosmological`, `higgs_mass`, `fine_structure`) steer the
//! qualitative behavior between expansion, clumping, and repulsion.
//!
//! Rendering and control-surface handling live with the caller: the crate
//! exposes initialization, stepping, and a read-only position snapshot, and
//! nothing else. With the `python` feature enabled, the same surface is
//! available to Python drivers as the `cosmosim` extension module.

pub mod core;
pub mod error;

#[cfg(feature = "python")]
mod python;
