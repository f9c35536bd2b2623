//! Serializable summary of a simulation model

use serde::{Deserialize, Serialize};

use crate::config::SimulationError;
use crate::models::{SimulationParameters, Tally};

/// Parameters and tally of a model at the time of reporting
///
/// `trials_run` is the length of the latest run, which may differ from
/// `parameters.trial_count` if the count was changed after generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    pub parameters: SimulationParameters,
    pub rng_seed: Option<u64>,
    pub trials_run: usize,
    pub tally: Tally,
}

impl SimulationReport {
    pub fn to_json_string(&self) -> Result<String, SimulationError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| SimulationError::SerializationError(e.to_string()))
    }
}
