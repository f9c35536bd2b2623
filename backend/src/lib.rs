//! Binomial Simulator Core - Rust Engine
//!
//! Empirical binomial distribution: run `n` independent Bernoulli trials
//! with success probability `p` and tally the outcomes.
//!
//! # Architecture
//!
//! - **models**: Parameters, validation errors and the outcome tally
//! - **simulation**: The simulation model and its reports
//! - **config**: Serde-loadable configuration
//! - **rng**: Injected random source and the default seedable generator
//!
//! # Critical Invariants
//!
//! 1. A generated run has exactly as many outcomes as the trial count it
//!    was generated with
//! 2. Tally counts always sum to the length of the latest run
//! 3. Invalid parameters and missing data never panic; they are logged
//!    and reported as values

// Module declarations
pub mod config;
pub mod models;
pub mod rng;
pub mod simulation;

// Re-exports for convenience
pub use config::{SimulationConfig, SimulationError};
pub use models::{ParameterError, SimulationParameters, Tally};
pub use rng::{RandomSource, RngManager};
pub use simulation::{BinomialSimulation, SimulationReport};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn binomial_simulator_core_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ffi::simulation::PyBinomialSimulation>()?;
    Ok(())
}
