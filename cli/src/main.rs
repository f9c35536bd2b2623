//! binomial-sim: run a binomial simulation from the command line
//!
//! ```text
//! binomial-sim -p 0.5 -n 10 --seed 12345
//! binomial-sim --config run.json --format json
//! ```

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use anyhow::{Context, Result};
use binomial_simulator_core_rs::{BinomialSimulation, SimulationConfig};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Simulate independent Bernoulli trials and tally the outcomes
#[derive(Debug, Parser)]
#[command(name = "binomial-sim", version, about)]
struct Args {
    /// Probability of success of a single trial
    #[arg(short = 'p', long, default_value_t = 0.5, allow_negative_numbers = true)]
    probability: f64,

    /// Number of trials to run
    #[arg(short = 'n', long, default_value_t = 10, allow_negative_numbers = true)]
    trials: i64,

    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// JSON config file; overrides --probability, --trials and --seed
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Also print every outcome of the run (text format only)
    #[arg(long)]
    show_outcomes: bool,
}

impl Args {
    fn simulation_config(&self) -> Result<SimulationConfig> {
        match &self.config {
            Some(path) => {
                let json = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config {}", path.display()))?;
                Ok(SimulationConfig::from_json_str(&json)?)
            }
            None => Ok(SimulationConfig {
                success_probability: self.probability,
                trial_count: self.trials,
                rng_seed: self.seed,
            }),
        }
    }
}

/// Diagnostics go to stdout alongside the report, plain text unless
/// stdout is a terminal
fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "binomial_simulator_core_rs=warn".into());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_ansi(io::stdout().is_terminal())
        .with_writer(io::stdout)
        .init();
}

fn main() -> Result<()> {
    init_logging();

    let args = Args::parse();
    let config = args.simulation_config()?;

    let mut simulation = BinomialSimulation::from_config(&config);
    tracing::debug!(seed = ?simulation.rng_seed(), "Simulation created");

    // Invalid parameters are logged by the model; report what we have
    let _ = simulation.generate_simulation();

    match args.format {
        OutputFormat::Text => {
            print!("{simulation}");
            if args.show_outcomes {
                if let Some(outcomes) = simulation.current_simulation() {
                    println!("Current run:\n\t{outcomes:?}");
                }
            }
            simulation.print_tally();
        }
        OutputFormat::Json => {
            println!("{}", simulation.report().to_json_string()?);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_build_config() {
        let args = Args::parse_from(["binomial-sim", "-p", "0.25", "-n", "40", "--seed", "7"]);
        let config = args.simulation_config().unwrap();
        assert_eq!(config, SimulationConfig::new(0.25, 40).with_seed(7));
    }

    #[test]
    fn test_negative_trials_accepted_for_deferred_validation() {
        let args = Args::parse_from(["binomial-sim", "-n", "-5"]);
        assert_eq!(args.simulation_config().unwrap().trial_count, -5);
    }

    #[test]
    fn test_defaults_match_coin_flip_demo() {
        let args = Args::parse_from(["binomial-sim"]);
        assert_eq!(args.probability, 0.5);
        assert_eq!(args.trials, 10);
        assert_eq!(args.format, OutputFormat::Text);
    }

    #[test]
    fn test_missing_config_file_is_error() {
        let args = Args::parse_from(["binomial-sim", "--config", "/nonexistent/run.json"]);
        assert!(args.simulation_config().is_err());
    }
}
