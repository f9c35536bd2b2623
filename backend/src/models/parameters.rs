//! Simulation parameters and their validation
//!
//! Parameters are stored verbatim: construction and mutation never
//! validate. Checks run only when a simulation is generated, so a model
//! may sit in an invalid state indefinitely without failing.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reasons a parameter set cannot drive a simulation run
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParameterError {
    #[error("Number of trials must be a positive integer, got {trial_count}")]
    InvalidTrialCount { trial_count: i64 },

    #[error("Probability of success must be a real number in [0, 1], got {success_probability}")]
    InvalidSuccessProbability { success_probability: f64 },
}

/// Success probability and trial count of a binomial experiment
///
/// # Example
/// ```
/// use binomial_simulator_core_rs::SimulationParameters;
///
/// let params = SimulationParameters::new(0.5, 10);
/// assert_eq!(params.check(), Ok(10));
///
/// let bad = SimulationParameters::new(1.5, 10);
/// assert!(!bad.is_valid());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationParameters {
    /// Probability that a single trial succeeds, meaningful in [0, 1]
    pub success_probability: f64,

    /// Number of independent trials per run, meaningful when >= 1
    pub trial_count: i64,
}

impl SimulationParameters {
    pub fn new(success_probability: f64, trial_count: i64) -> Self {
        Self {
            success_probability,
            trial_count,
        }
    }

    /// Validate the parameters, returning the trial count as a length
    ///
    /// The trial count is checked first. NaN and infinite probabilities
    /// are rejected along with anything outside [0, 1].
    pub fn check(&self) -> Result<usize, ParameterError> {
        let trial_count = match usize::try_from(self.trial_count) {
            Ok(n) if n >= 1 => n,
            _ => {
                return Err(ParameterError::InvalidTrialCount {
                    trial_count: self.trial_count,
                })
            }
        };

        if !(0.0..=1.0).contains(&self.success_probability) {
            return Err(ParameterError::InvalidSuccessProbability {
                success_probability: self.success_probability,
            });
        }

        Ok(trial_count)
    }

    pub fn is_valid(&self) -> bool {
        self.check().is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_are_inclusive() {
        assert!(SimulationParameters::new(0.0, 1).is_valid());
        assert!(SimulationParameters::new(1.0, 1).is_valid());
    }

    #[test]
    fn test_non_positive_trial_count_rejected() {
        for n in [0, -1, -5, i64::MIN] {
            assert_eq!(
                SimulationParameters::new(0.5, n).check(),
                Err(ParameterError::InvalidTrialCount { trial_count: n })
            );
        }
    }

    #[test]
    fn test_out_of_range_probability_rejected() {
        for p in [-0.01, 1.5, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(
                SimulationParameters::new(p, 10).check(),
                Err(ParameterError::InvalidSuccessProbability { .. })
            ));
        }
    }

    #[test]
    fn test_nan_probability_rejected() {
        assert!(!SimulationParameters::new(f64::NAN, 10).is_valid());
    }

    #[test]
    fn test_trial_count_checked_before_probability() {
        let err = SimulationParameters::new(2.0, 0).check().unwrap_err();
        assert_eq!(err, ParameterError::InvalidTrialCount { trial_count: 0 });
    }
}
