//! PyO3 wrapper for BinomialSimulation
//!
//! Diagnostics are printed to Python's standard output stream as well as
//! logged, so interactive sessions see them without a tracing subscriber.

use pyo3::prelude::*;
use pyo3::types::PyDict;

use super::types::{outcomes_to_py, tally_to_py};
use crate::simulation::BinomialSimulation;

/// Python wrapper for the Rust simulation model
///
/// # Example (from Python)
///
/// ```python
/// from binomial_simulator_core_rs import BinomialDistSimulation
///
/// coin_flips = BinomialDistSimulation(0.5, 10)
/// coin_flips.generate_simulation()
/// coin_flips.print_current_tally()
/// ```
#[pyclass(name = "BinomialDistSimulation")]
pub struct PyBinomialSimulation {
    inner: BinomialSimulation,
}

#[pymethods]
impl PyBinomialSimulation {
    #[new]
    #[pyo3(signature = (p_success, n_trials, seed=None))]
    fn new(p_success: f64, n_trials: i64, seed: Option<u64>) -> Self {
        let inner = match seed {
            Some(seed) => BinomialSimulation::with_seed(p_success, n_trials, seed),
            None => BinomialSimulation::new(p_success, n_trials),
        };
        PyBinomialSimulation { inner }
    }

    fn get_p_success(&self) -> f64 {
        self.inner.success_probability()
    }

    fn set_p_success(&mut self, p_success: f64) {
        self.inner.set_success_probability(p_success);
    }

    fn get_n_trials(&self) -> i64 {
        self.inner.trial_count()
    }

    fn set_n_trials(&mut self, n_trials: i64) {
        self.inner.set_trial_count(n_trials);
    }

    fn bernoulli_trial(&mut self) -> bool {
        self.inner.run_single_trial()
    }

    fn generate_simulation_checks(&self) -> bool {
        self.inner.validate_parameters()
    }

    fn generate_simulation(&mut self, py: Python<'_>) -> PyResult<()> {
        if self.inner.generate_simulation().is_err() {
            py_print(py, "Cannot generate simulation, check parameter values")?;
        }
        Ok(())
    }

    /// List of outcomes, or `nan` if no simulation has been generated
    fn get_current_simulation(&self, py: Python<'_>) -> PyResult<PyObject> {
        let outcomes = self.inner.current_simulation();
        if outcomes.is_none() {
            py_print(py, "Warning: No current simulation. nan value returned")?;
        }
        Ok(outcomes_to_py(py, outcomes))
    }

    fn return_current_tally(&self, py: Python<'_>) -> PyResult<Py<PyDict>> {
        tally_to_py(py, &self.inner.tally())
    }

    fn print_current_tally(&self, py: Python<'_>) -> PyResult<()> {
        py_print(py, &self.inner.tally().to_string())
    }

    fn __str__(&self) -> String {
        self.inner.describe()
    }
}

/// Print through Python's `print` so output follows `sys.stdout`
fn py_print(py: Python<'_>, message: &str) -> PyResult<()> {
    let builtins = py.import_bound("builtins")?;
    builtins.getattr("print")?.call1((message,))?;
    Ok(())
}
