//! Statistical checks against known craps figures.
//!
//! Seeds are fixed so the outcomes are reproducible; bounds are roughly
//! four standard errors wide.

use std::sync::Arc;

use craps_sim::core::{SimulationConfig, TableConfig};
use craps_sim::player::Player;
use craps_sim::sim::{run_batch, BatchStats, Simulation};
use craps_sim::strategies::{BetPass, BetPassAndOdds, BettingStrategy, QuitAfterRounds};

/// Pass line house edge: 7/495.
const PASS_EDGE: f64 = -7.0 / 495.0;

/// Expected rolls per pass line decision: 557/165.
const ROLLS_PER_ROUND: f64 = 557.0 / 165.0;

fn config(trials: u32) -> SimulationConfig {
    SimulationConfig::default()
        .with_table(TableConfig::default().with_seed(0xC0FFEE))
        .with_trials(trials)
}

/// `trials` seeded trials of 5000 rounds each.
fn batch(trials: u32, betting: Arc<dyn BettingStrategy>) -> BatchStats {
    run_batch(&config(trials), betting, Arc::new(QuitAfterRounds(5_000))).unwrap()
}

#[test]
fn test_pass_house_edge_1k_rounds() {
    // Theoretical return over 1000 rounds of 5: about -70, std dev about 160
    let mut sim = Simulation::from_config(
        &TableConfig::default().with_seed(31),
        Player::new(BetPass, QuitAfterRounds(1000)),
    )
    .unwrap();
    let report = sim.run().unwrap();

    assert_eq!(report.rounds, 1000);
    assert!(report.winnings > -70 - 640);
    assert!(report.winnings < -70 + 640);
}

#[test]
fn test_pass_house_edge_100k_rounds() {
    let stats = batch(20, Arc::new(BetPass));

    assert_eq!(stats.total_rounds, 100_000);
    let edge = stats.edge(5);
    assert!((edge - PASS_EDGE).abs() < 0.013, "edge {} too far from {}", edge, PASS_EDGE);
}

#[test]
fn test_rolls_per_round() {
    let stats = batch(10, Arc::new(BetPass));
    let rate = stats.rolls_per_round();
    assert!((rate - ROLLS_PER_ROUND).abs() < 0.1, "rolls per round {}", rate);
}

#[test]
fn test_free_odds_carry_no_extra_edge() {
    let pass = batch(20, Arc::new(BetPass));
    let odds = batch(20, Arc::new(BetPassAndOdds));

    // Same seeds, same dice: only the odds bets differ, and they are fair
    assert_eq!(pass.total_rolls, odds.total_rolls);
    assert!(odds.std_dev_winnings > pass.std_dev_winnings);
    assert!((odds.edge(5) - PASS_EDGE).abs() < 0.03, "edge {}", odds.edge(5));
}
