//! Simulation configuration
//!
//! A config names the parameters of a model and, optionally, the seed of
//! its random source. Loading a config never validates the parameters:
//! like direct construction, validation is deferred until a simulation
//! is generated.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading or exporting simulation data
#[derive(Debug, Error)]
pub enum SimulationError {
    /// Configuration could not be parsed
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Report or config could not be serialized
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Configuration for a single simulation model
///
/// # Example
/// ```
/// use binomial_simulator_core_rs::SimulationConfig;
///
/// let config = SimulationConfig::from_json_str(
///     r#"{"success_probability": 0.25, "trial_count": 40, "rng_seed": 7}"#,
/// ).unwrap();
/// assert_eq!(config.trial_count, 40);
/// assert_eq!(config.rng_seed, Some(7));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Probability that a single trial succeeds
    pub success_probability: f64,

    /// Number of trials per run
    pub trial_count: i64,

    /// Seed for the random source; drawn from entropy when absent
    #[serde(default)]
    pub rng_seed: Option<u64>,
}

impl SimulationConfig {
    pub fn new(success_probability: f64, trial_count: i64) -> Self {
        Self {
            success_probability,
            trial_count,
            rng_seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    /// Parse a config from JSON
    pub fn from_json_str(json: &str) -> Result<Self, SimulationError> {
        serde_json::from_str(json).map_err(|e| SimulationError::InvalidConfig(e.to_string()))
    }

    pub fn to_json_string(&self) -> Result<String, SimulationError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| SimulationError::SerializationError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_defaults_to_none() {
        let config =
            SimulationConfig::from_json_str(r#"{"success_probability": 0.5, "trial_count": 10}"#)
                .unwrap();
        assert_eq!(config, SimulationConfig::new(0.5, 10));
    }

    #[test]
    fn test_missing_field_is_invalid_config() {
        let err = SimulationConfig::from_json_str(r#"{"trial_count": 10}"#).unwrap_err();
        assert!(matches!(err, SimulationError::InvalidConfig(_)));
    }
}
