//! Python-facing surface for the simulation core.
//!
//! A thin wrapper class plus numpy views of particle state; the physics
//! lives entirely in [`crate::core`]. Compiled only with the `python`
//! feature (`extension-module` for maturin wheel builds).

use numpy::ndarray::Array2;
use numpy::{IntoPyArray, PyArray2, PyReadonlyArray2};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::particle::DIM;
use crate::core::{self, Constants, ParticleSystem};

fn py_err<E: ToString>(e: E) -> PyErr {
    PyValueError::new_err(e.to_string())
}

fn bounds_from_vec(bounds: Vec<f64>) -> PyResult<[f64; DIM]> {
    if bounds.len() != DIM {
        return Err(py_err(format!("bounds must have length {DIM}")));
    }
    let mut out = [0.0_f64; DIM];
    for (k, v) in bounds.iter().enumerate() {
        out[k] = *v;
    }
    Ok(out)
}

fn to_array2(py: Python<'_>, rows: &[[f64; DIM]]) -> Py<PyArray2<f64>> {
    let mut arr = Array2::<f64>::zeros((rows.len(), DIM));
    for (i, row) in rows.iter().enumerate() {
        for k in 0..DIM {
            arr[[i, k]] = row[k];
        }
    }
    arr.into_pyarray(py).unbind()
}

/// CosmoSim Python-facing wrapper around the Rust simulation core.
///
/// API:
/// - __new__(num_particles, bounds, seed=None)
/// - step(cosmological=1.0, higgs_mass=1.0, fine_structure=1.0)
/// - reset(num_particles, bounds=None)
/// - resize(width, height)
/// - get_positions() / get_velocities() -> np.ndarray, shape (N, 2)
/// - set_positions(a) / set_velocities(a) for scripted scenarios
#[pyclass]
pub struct CosmoSim {
    system: ParticleSystem,
}

#[pymethods]
impl CosmoSim {
    /// Initialize a new simulation with all particles at the domain center.
    ///
    /// Parameters
    /// - num_particles: number of particles (int, >= 0)
    /// - bounds: iterable of 2 positive floats [width, height]
    /// - seed: RNG seed (int) for reproducible dispersal; None for
    ///   nondeterministic
    ///
    /// Errors: raises ValueError on invalid parameters.
    #[new]
    #[pyo3(signature = (num_particles, bounds, seed=None))]
    fn new(num_particles: usize, bounds: Vec<f64>, seed: Option<u64>) -> PyResult<Self> {
        let bounds = bounds_from_vec(bounds)?;
        let system = ParticleSystem::new(num_particles, bounds, seed).map_err(py_err)?;
        Ok(Self { system })
    }

    /// Advance the simulation by exactly one step under the given factors
    /// (releases the GIL during computation).
    ///
    /// The factors default to the neutral baseline of 1.0. They are applied
    /// as-is: validating control-surface input (finiteness, ranges) is the
    /// caller's job.
    #[pyo3(signature = (cosmological=1.0, higgs_mass=1.0, fine_structure=1.0))]
    fn step(&mut self, py: Python<'_>, cosmological: f64, higgs_mass: f64, fine_structure: f64) {
        let constants = Constants {
            cosmological,
            higgs_mass,
            fine_structure,
        };
        py.detach(|| core::step(&mut self.system, &constants));
    }

    /// Discard all particles and re-disperse `num_particles` from the domain
    /// center. `bounds=None` keeps the current domain.
    #[pyo3(signature = (num_particles, bounds=None))]
    fn reset(&mut self, num_particles: usize, bounds: Option<Vec<f64>>) -> PyResult<()> {
        let bounds = match bounds {
            Some(b) => bounds_from_vec(b)?,
            None => self.system.bounds(),
        };
        self.system.reset(num_particles, bounds).map_err(py_err)
    }

    /// Replace the domain bounds. Existing positions are untouched;
    /// particles left outside are reflected back in by the next step.
    fn resize(&mut self, width: f64, height: f64) -> PyResult<()> {
        self.system.resize([width, height]).map_err(py_err)
    }

    /// Return positions as a NumPy array of shape (N, 2), dtype=float64.
    fn get_positions(&self, py: Python<'_>) -> Py<PyArray2<f64>> {
        to_array2(py, &self.system.positions())
    }

    /// Return velocities as a NumPy array of shape (N, 2), dtype=float64.
    fn get_velocities(&self, py: Python<'_>) -> Py<PyArray2<f64>> {
        to_array2(py, &self.system.velocities())
    }

    /// Set all particle positions from a NumPy array of shape (N, 2),
    /// dtype=float64. Values must be finite; the caller is responsible for
    /// keeping them inside the domain (escapees are reflected back in on the
    /// next step).
    fn set_positions<'py>(&mut self, positions: PyReadonlyArray2<'py, f64>) -> PyResult<()> {
        let arr = positions.as_array();
        let n = self.system.num_particles();
        if arr.ndim() != 2 || arr.shape()[0] != n || arr.shape()[1] != DIM {
            return Err(py_err(format!(
                "positions must have shape ({n}, {DIM}), got {:?}",
                arr.shape()
            )));
        }
        for i in 0..n {
            for k in 0..DIM {
                let val = arr[[i, k]];
                if !val.is_finite() {
                    return Err(py_err("position values must be finite"));
                }
                self.system.particles[i].r[k] = val;
            }
        }
        Ok(())
    }

    /// Set all particle velocities from a NumPy array of shape (N, 2),
    /// dtype=float64. Values must be finite.
    fn set_velocities<'py>(&mut self, velocities: PyReadonlyArray2<'py, f64>) -> PyResult<()> {
        let arr = velocities.as_array();
        let n = self.system.num_particles();
        if arr.ndim() != 2 || arr.shape()[0] != n || arr.shape()[1] != DIM {
            return Err(py_err(format!(
                "velocities must have shape ({n}, {DIM}), got {:?}",
                arr.shape()
            )));
        }
        for i in 0..n {
            for k in 0..DIM {
                let val = arr[[i, k]];
                if !val.is_finite() {
                    return Err(py_err("velocity values must be finite"));
                }
                self.system.particles[i].v[k] = val;
            }
        }
        Ok(())
    }

    /// Return the total kinetic energy of the system (diagnostic).
    fn get_kinetic_energy(&self) -> f64 {
        self.system.kinetic_energy()
    }
}

/// The cosmosim Python module entry point.
#[pymodule]
fn cosmosim(_py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<CosmoSim>()?;
    Ok(())
}
