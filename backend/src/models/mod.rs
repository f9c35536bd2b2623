//! Domain types for the binomial simulation

pub mod parameters;
pub mod tally;

pub use parameters::{ParameterError, SimulationParameters};
pub use tally::Tally;
