//! Tests for config loading and reports

use binomial_simulator_core_rs::{
    BinomialSimulation, SimulationConfig, SimulationError, SimulationReport,
};

#[test]
fn test_config_with_seed_is_reproducible() {
    let config = SimulationConfig::from_json_str(
        r#"{"success_probability": 0.5, "trial_count": 50, "rng_seed": 11}"#,
    )
    .unwrap();

    let mut sim1 = BinomialSimulation::from_config(&config);
    let mut sim2 = BinomialSimulation::from_config(&config);
    sim1.generate_simulation().unwrap();
    sim2.generate_simulation().unwrap();

    assert_eq!(sim1.current_simulation(), sim2.current_simulation());
    assert_eq!(sim1.rng_seed(), Some(11));
}

#[test]
fn test_config_without_seed_records_entropy_seed() {
    let sim = BinomialSimulation::from_config(&SimulationConfig::new(0.5, 10));
    assert!(sim.rng_seed().is_some());
}

#[test]
fn test_invalid_values_load_without_validation() {
    // Validation is deferred to generation time
    let config =
        SimulationConfig::from_json_str(r#"{"success_probability": 1.5, "trial_count": -5}"#)
            .unwrap();

    let sim = BinomialSimulation::from_config(&config);
    assert_eq!(sim.trial_count(), -5);
    assert!(!sim.validate_parameters());
}

#[test]
fn test_malformed_json_is_invalid_config() {
    let err = SimulationConfig::from_json_str("not json").unwrap_err();
    assert!(matches!(err, SimulationError::InvalidConfig(_)));
    assert!(err.to_string().starts_with("Invalid config:"));
}

#[test]
fn test_config_json_roundtrip() {
    let config = SimulationConfig::new(0.25, 8).with_seed(3);
    let json = config.to_json_string().unwrap();
    assert_eq!(SimulationConfig::from_json_str(&json).unwrap(), config);
}

#[test]
fn test_report_tracks_latest_run() {
    let mut sim = BinomialSimulation::with_seed(1.0, 5, 8);
    sim.generate_simulation().unwrap();
    sim.set_trial_count(50);

    let report = sim.report();
    assert_eq!(report.parameters.trial_count, 50);
    assert_eq!(report.trials_run, 5);
    assert_eq!(report.tally.success, 5);
    assert_eq!(report.rng_seed, Some(8));

    let parsed: SimulationReport = serde_json::from_str(&report.to_json_string().unwrap()).unwrap();
    assert_eq!(parsed, report);
}
