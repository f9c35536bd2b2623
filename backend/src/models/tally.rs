//! Tally of trial outcomes
//!
//! Derived on demand from the outcome sequence and never stored.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Count of successes and failures in a simulation run
///
/// Fields serialize in `success`, `fail` order.
///
/// # Example
/// ```
/// use binomial_simulator_core_rs::Tally;
///
/// let tally = Tally::from_outcomes(&[true, false, true]);
/// assert_eq!(tally.success, 2);
/// assert_eq!(tally.fail, 1);
/// assert_eq!(tally.to_string(), "success    2\nfail       1");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub success: usize,
    pub fail: usize,
}

impl Tally {
    pub const SUCCESS_LABEL: &'static str = "success";
    pub const FAIL_LABEL: &'static str = "fail";

    pub fn from_outcomes(outcomes: &[bool]) -> Self {
        let success = outcomes.iter().filter(|&&outcome| outcome).count();
        Self {
            success,
            fail: outcomes.len() - success,
        }
    }

    /// Number of trials counted; equals the length of the outcomes
    pub fn total(&self) -> usize {
        self.success + self.fail
    }

    /// Label/count pairs, success first
    pub fn entries(&self) -> [(&'static str, usize); 2] {
        [
            (Self::SUCCESS_LABEL, self.success),
            (Self::FAIL_LABEL, self.fail),
        ]
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count_width = self.success.max(self.fail).to_string().len();
        let [first, second] = self.entries();
        write!(f, "{:<7}    {:>w$}", first.0, first.1, w = count_width)?;
        write!(f, "\n{:<7}    {:>w$}", second.0, second.1, w = count_width)
    }
}
