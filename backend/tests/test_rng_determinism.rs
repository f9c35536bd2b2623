//! Tests for seeded RNG
//!
//! Same seed MUST produce the same sequence, and therefore the same run.

use binomial_simulator_core_rs::{BinomialSimulation, RngManager};

#[test]
fn test_rng_new_with_seed() {
    let rng = RngManager::new(12345);
    assert_eq!(rng.get_state(), 12345);
}

#[test]
fn test_rng_next_deterministic() {
    let mut rng1 = RngManager::new(12345);
    let mut rng2 = RngManager::new(12345);

    for _ in 0..100 {
        assert_eq!(rng1.next(), rng2.next(), "RNG not deterministic!");
    }
}

#[test]
fn test_rng_different_seeds_different_sequences() {
    let mut rng1 = RngManager::new(12345);
    let mut rng2 = RngManager::new(54321);

    assert_ne!(
        rng1.next(),
        rng2.next(),
        "Different seeds should produce different values"
    );
}

#[test]
fn test_rng_state_advances() {
    let mut rng = RngManager::new(12345);
    let initial_state = rng.get_state();

    rng.next();

    assert_ne!(initial_state, rng.get_state(), "RNG state should advance");
}

#[test]
fn test_same_seed_same_simulation() {
    let mut sim1 = BinomialSimulation::with_seed(0.3, 500, 777);
    let mut sim2 = BinomialSimulation::with_seed(0.3, 500, 777);

    sim1.generate_simulation().unwrap();
    sim2.generate_simulation().unwrap();

    assert_eq!(sim1.current_simulation(), sim2.current_simulation());
    assert_eq!(sim1.tally(), sim2.tally());
}

#[test]
fn test_consecutive_runs_continue_the_sequence() {
    let mut sim = BinomialSimulation::with_seed(0.5, 200, 2024);

    sim.generate_simulation().unwrap();
    let first = sim.current_simulation().unwrap().to_vec();
    sim.generate_simulation().unwrap();
    let second = sim.current_simulation().unwrap().to_vec();

    assert_ne!(first, second, "Second run should draw fresh values");
}
