//! Python bindings (PyO3)
//!
//! Exposes the simulation model as the `BinomialDistSimulation` class.

pub mod simulation;
pub mod types;
