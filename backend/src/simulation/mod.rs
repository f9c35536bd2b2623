//! Simulation model and its reports

mod model;
mod report;

pub use model::BinomialSimulation;
pub use report::SimulationReport;
