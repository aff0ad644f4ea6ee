//! Parallel batches of independent simulations.
//!
//! Every trial gets its own board and player; the only thing trials share
//! is the read-only bet registry and the stateless strategies. Trial `i`
//! rolls stream `i` of one root `DiceRng`.

use std::sync::Arc;

use rayon::prelude::*;
use tracing::{debug, info};

use super::simulation::{Simulation, SimulationReport};
use super::stats::BatchStats;
use crate::bets::BetRegistry;
use crate::board::Board;
use crate::core::SimulationConfig;
use crate::error::Result;
use crate::player::Player;
use crate::strategies::{BettingStrategy, QuittingStrategy};

/// Run `config.trials` simulations with the standard bets.
pub fn run_batch(
    config: &SimulationConfig,
    betting: Arc<dyn BettingStrategy>,
    quitting: Arc<dyn QuittingStrategy>,
) -> Result<BatchStats> {
    run_batch_with_registry(config, Arc::new(BetRegistry::standard()), betting, quitting)
}

/// Run `config.trials` simulations resolving bets with `registry`.
pub fn run_batch_with_registry(
    config: &SimulationConfig,
    registry: Arc<BetRegistry>,
    betting: Arc<dyn BettingStrategy>,
    quitting: Arc<dyn QuittingStrategy>,
) -> Result<BatchStats> {
    let reports = run_trials(config, &registry, &betting, &quitting)?;
    let stats = BatchStats::from_reports(&reports);
    info!(
        trials = stats.trials,
        rounds = stats.total_rounds,
        mean_winnings = stats.mean_winnings,
        "batch finished"
    );
    Ok(stats)
}

/// Run every trial and return the per-trial reports in trial order.
pub fn run_trials(
    config: &SimulationConfig,
    registry: &Arc<BetRegistry>,
    betting: &Arc<dyn BettingStrategy>,
    quitting: &Arc<dyn QuittingStrategy>,
) -> Result<Vec<SimulationReport>> {
    config.table.validate()?;
    let root = config.table.dice();
    debug!(seed = root.seed(), trials = config.trials, "batch starting");
    (0..config.trials)
        .into_par_iter()
        .map(|trial| {
            let dice = root.with_stream(u64::from(trial));
            let board = Board::with_dice(config.table.min_bet, dice)?
                .with_registry(Arc::clone(registry));
            let player = Player::from_shared(Arc::clone(betting), Arc::clone(quitting));
            Simulation::new(board, player)
                .with_max_rounds(config.max_rounds)
                .run()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{DiceRng, TableConfig};
    use crate::strategies::{AlwaysQuit, BetNothing, BetPass, QuitAfterRounds};

    fn seeded(trials: u32) -> SimulationConfig {
        SimulationConfig::default()
            .with_table(TableConfig::default().with_seed(2024))
            .with_trials(trials)
    }

    fn pass_batch(trials: u32, rounds: u32) -> BatchStats {
        run_batch(&seeded(trials), Arc::new(BetPass), Arc::new(QuitAfterRounds(rounds))).unwrap()
    }

    #[test]
    fn test_batch_counts() {
        let stats = pass_batch(16, 50);
        assert_eq!(stats.trials, 16);
        assert_eq!(stats.total_rounds, 16 * 50);
        assert_eq!(stats.total_bets, 16 * 50);
        assert!(stats.total_rolls > stats.total_rounds);
        assert!(stats.min_winnings <= stats.max_winnings);
    }

    #[test]
    fn test_batch_is_replayable() {
        assert_eq!(pass_batch(8, 20), pass_batch(8, 20));
    }

    #[test]
    fn test_trials_get_distinct_seeds() {
        let registry = Arc::new(BetRegistry::standard());
        let betting: Arc<dyn BettingStrategy> = Arc::new(BetPass);
        let quitting: Arc<dyn QuittingStrategy> = Arc::new(QuitAfterRounds(30));
        let reports = run_trials(&seeded(4), &registry, &betting, &quitting).unwrap();

        assert_eq!(reports.len(), 4);
        assert!(reports.windows(2).any(|w| w[0].winnings_history != w[1].winnings_history));
    }

    #[test]
    fn test_trial_replays_its_own_stream() {
        let registry = Arc::new(BetRegistry::standard());
        let betting: Arc<dyn BettingStrategy> = Arc::new(BetPass);
        let quitting: Arc<dyn QuittingStrategy> = Arc::new(QuitAfterRounds(30));
        let reports = run_trials(&seeded(3), &registry, &betting, &quitting).unwrap();

        let dice = DiceRng::new(2024).with_stream(2);
        let board = Board::with_dice(5, dice).unwrap();
        let solo = Simulation::new(board, Player::new(BetPass, QuitAfterRounds(30)))
            .run()
            .unwrap();
        assert_eq!(reports[2], solo);
    }

    #[test]
    fn test_round_cap_applies_to_every_trial() {
        let config = seeded(4).with_max_rounds(Some(5));
        let stats = run_batch(&config, Arc::new(BetNothing), Arc::new(|_: &Player| false)).unwrap();
        assert_eq!(stats.total_rounds, 20);
        assert_eq!(stats.total_winnings, 0);
    }

    #[test]
    fn test_zero_trials() {
        let stats = run_batch(&seeded(0), Arc::new(BetPass), Arc::new(AlwaysQuit)).unwrap();
        assert_eq!(stats, BatchStats::default());
    }

    #[test]
    fn test_invalid_table_rejected() {
        let config = SimulationConfig::default().with_table(TableConfig::default().with_min_bet(0));
        assert!(run_batch(&config, Arc::new(BetPass), Arc::new(AlwaysQuit)).is_err());
    }
}
