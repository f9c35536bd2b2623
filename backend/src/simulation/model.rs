//! Binomial simulation model
//!
//! Holds the parameters of a binomial experiment, runs independent
//! Bernoulli trials on demand and reports the tally of the latest run.
//!
//! # Failure policy
//!
//! Nothing in this module panics or propagates a hard error to the caller
//! for bad parameters or missing data. Both conditions are reported as a
//! `warn` diagnostic and degrade gracefully:
//!
//! - invalid parameters: [`BinomialSimulation::generate_simulation`]
//!   returns the [`ParameterError`] and leaves the previous outcomes intact
//! - no data: [`BinomialSimulation::current_simulation`] returns `None`

use std::fmt;
use std::io::{self, Write};

use tracing::{debug, warn};

use crate::config::SimulationConfig;
use crate::models::{ParameterError, SimulationParameters, Tally};
use crate::rng::{RandomSource, RngManager};
use crate::simulation::SimulationReport;

/// Simulation of `trial_count` independent Bernoulli trials
///
/// The random source is injected; it defaults to [`RngManager`].
///
/// # Example
/// ```
/// use binomial_simulator_core_rs::BinomialSimulation;
///
/// let mut coin_flips = BinomialSimulation::with_seed(0.5, 10, 12345);
/// coin_flips.generate_simulation().unwrap();
///
/// let tally = coin_flips.tally();
/// assert_eq!(tally.success + tally.fail, 10);
/// assert_eq!(coin_flips.current_simulation().unwrap().len(), 10);
/// ```
#[derive(Debug, Clone)]
pub struct BinomialSimulation<R: RandomSource = RngManager> {
    params: SimulationParameters,

    /// Outcomes of the latest successful run; empty until the first one
    outcomes: Vec<bool>,

    rng: R,

    /// Seed the random source started from, when known
    rng_seed: Option<u64>,
}

impl BinomialSimulation<RngManager> {
    /// Create a model whose random source is seeded from entropy
    ///
    /// Parameters are stored verbatim, without validation.
    pub fn new(success_probability: f64, trial_count: i64) -> Self {
        let rng = RngManager::from_entropy();
        let seed = rng.get_state();
        Self::seeded(success_probability, trial_count, rng, seed)
    }

    /// Create a model with a reproducible random source
    pub fn with_seed(success_probability: f64, trial_count: i64, seed: u64) -> Self {
        Self::seeded(
            success_probability,
            trial_count,
            RngManager::new(seed),
            seed,
        )
    }

    pub fn from_config(config: &SimulationConfig) -> Self {
        match config.rng_seed {
            Some(seed) => Self::with_seed(config.success_probability, config.trial_count, seed),
            None => Self::new(config.success_probability, config.trial_count),
        }
    }

    fn seeded(success_probability: f64, trial_count: i64, rng: RngManager, seed: u64) -> Self {
        let mut simulation = Self::with_rng(success_probability, trial_count, rng);
        simulation.rng_seed = Some(seed);
        simulation
    }
}

impl<R: RandomSource> BinomialSimulation<R> {
    /// Create a model drawing from the given random source
    pub fn with_rng(success_probability: f64, trial_count: i64, rng: R) -> Self {
        Self {
            params: SimulationParameters::new(success_probability, trial_count),
            outcomes: Vec::new(),
            rng,
            rng_seed: None,
        }
    }

    // ========================================================================
    // Parameter accessors
    // ========================================================================

    pub fn success_probability(&self) -> f64 {
        self.params.success_probability
    }

    /// Set the success probability; not validated until generation
    pub fn set_success_probability(&mut self, success_probability: f64) {
        self.params.success_probability = success_probability;
    }

    pub fn trial_count(&self) -> i64 {
        self.params.trial_count
    }

    /// Set the trial count; not validated until generation
    pub fn set_trial_count(&mut self, trial_count: i64) {
        self.params.trial_count = trial_count;
    }

    pub fn parameters(&self) -> SimulationParameters {
        self.params
    }

    pub fn rng_seed(&self) -> Option<u64> {
        self.rng_seed
    }

    // ========================================================================
    // Trials
    // ========================================================================

    /// Run one Bernoulli trial
    ///
    /// Consumes one draw `u` in [0, 1) and succeeds iff `u < p`, so p = 0
    /// never succeeds and p = 1 always does. Stored outcomes are untouched.
    pub fn run_single_trial(&mut self) -> bool {
        self.rng.next_f64() < self.params.success_probability
    }

    /// True iff the trial count is >= 1 and the probability lies in [0, 1]
    pub fn validate_parameters(&self) -> bool {
        self.params.is_valid()
    }

    /// Replace the stored outcomes with a fresh run of `trial_count` trials
    ///
    /// Returns the number of trials run. With invalid parameters a
    /// diagnostic is logged, the previous outcomes are kept and the
    /// validation error is returned.
    pub fn generate_simulation(&mut self) -> Result<usize, ParameterError> {
        let trial_count = match self.params.check() {
            Ok(n) => n,
            Err(e) => {
                warn!(error = %e, "Cannot generate simulation, check parameter values");
                return Err(e);
            }
        };

        self.outcomes.clear();
        self.outcomes.reserve_exact(trial_count);
        for _ in 0..trial_count {
            let outcome = self.run_single_trial();
            self.outcomes.push(outcome);
        }

        debug!(
            trial_count,
            success_probability = self.params.success_probability,
            "Generated simulation"
        );
        Ok(trial_count)
    }

    /// Read-only view of the latest run's outcomes
    ///
    /// `None` means no simulation has been generated yet; a diagnostic is
    /// logged in that case. The view borrows the model, so it cannot
    /// outlive the next run.
    pub fn current_simulation(&self) -> Option<&[bool]> {
        if self.outcomes.is_empty() {
            warn!("No current simulation, no data returned");
            return None;
        }
        Some(&self.outcomes)
    }

    // ========================================================================
    // Reporting
    // ========================================================================

    /// Success and failure counts of the latest run (zeros before any run)
    pub fn tally(&self) -> Tally {
        Tally::from_outcomes(&self.outcomes)
    }

    /// Write the tally followed by a newline
    pub fn write_tally<W: Write>(&self, mut out: W) -> io::Result<()> {
        writeln!(out, "{}", self.tally())
    }

    /// Print the tally to standard output
    pub fn print_tally(&self) {
        if let Err(e) = self.write_tally(io::stdout().lock()) {
            warn!(error = %e, "Failed to print tally");
        }
    }

    /// Human-readable summary of the current parameters
    ///
    /// Outcomes are deliberately left out: with large trial counts they
    /// are too long to print.
    pub fn describe(&self) -> String {
        format!(
            "Current value of parameters:\n\tProbability of success: {:?}\n\tNumber of trials: {}\n",
            self.params.success_probability, self.params.trial_count
        )
    }

    /// Machine-readable summary of parameters and the latest tally
    pub fn report(&self) -> SimulationReport {
        SimulationReport {
            parameters: self.params,
            rng_seed: self.rng_seed,
            trials_run: self.outcomes.len(),
            tally: self.tally(),
        }
    }
}

impl<R: RandomSource> fmt::Display for BinomialSimulation<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
