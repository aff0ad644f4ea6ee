//! Aggregate statistics over many simulations.

use serde::{Deserialize, Serialize};

use super::simulation::SimulationReport;
use crate::bets::Amount;

/// Statistics collected over a batch of simulations.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchStats {
    /// Simulations aggregated.
    pub trials: u32,

    /// Rounds played across all trials.
    pub total_rounds: u64,

    /// Rolls bet on across all trials.
    pub total_rolls: u64,

    /// Bets placed across all trials.
    pub total_bets: u64,

    /// Sum of final winnings.
    pub total_winnings: Amount,

    /// Mean final winnings per trial.
    pub mean_winnings: f64,

    /// Population standard deviation of final winnings.
    pub std_dev_winnings: f64,

    /// Worst final winnings.
    pub min_winnings: Amount,

    /// Best final winnings.
    pub max_winnings: Amount,
}

impl BatchStats {
    /// Create empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Aggregate finished simulations.
    #[must_use]
    pub fn from_reports(reports: &[SimulationReport]) -> Self {
        if reports.is_empty() {
            return Self::default();
        }

        let finals: Vec<Amount> = reports.iter().map(|r| r.winnings).collect();
        let n = finals.len() as f64;
        let total_winnings: Amount = finals.iter().sum();
        let mean = total_winnings as f64 / n;
        let variance = finals
            .iter()
            .map(|&w| {
                let d = w as f64 - mean;
                d * d
            })
            .sum::<f64>()
            / n;

        Self {
            trials: reports.len() as u32,
            total_rounds: reports.iter().map(|r| u64::from(r.rounds)).sum(),
            total_rolls: reports.iter().map(|r| r.rolls).sum(),
            total_bets: reports.iter().map(|r| r.bets).sum(),
            total_winnings,
            mean_winnings: mean,
            std_dev_winnings: variance.sqrt(),
            min_winnings: finals.iter().copied().min().unwrap_or(0),
            max_winnings: finals.iter().copied().max().unwrap_or(0),
        }
    }

    /// Mean net result per round played.
    #[must_use]
    pub fn net_per_round(&self) -> f64 {
        if self.total_rounds == 0 {
            0.0
        } else {
            self.total_winnings as f64 / self.total_rounds as f64
        }
    }

    /// Player edge per round relative to a flat stake (negative means the
    /// house wins). For a flat pass line bettor this estimates the
    /// pass line house edge.
    #[must_use]
    pub fn edge(&self, flat_stake: Amount) -> f64 {
        if flat_stake <= 0 {
            0.0
        } else {
            self.net_per_round() / flat_stake as f64
        }
    }

    /// Mean rolls per round.
    #[must_use]
    pub fn rolls_per_round(&self) -> f64 {
        if self.total_rounds == 0 {
            0.0
        } else {
            self.total_rolls as f64 / self.total_rounds as f64
        }
    }
}
