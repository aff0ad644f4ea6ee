//! Table and simulation configuration.
//!
//! - `TableConfig`: what a `Board` is built from (minimum bet, dice seed)
//! - `SimulationConfig`: how a batch of simulations runs (round cap, trials)

use serde::{Deserialize, Serialize};

use super::dice::DiceRng;
use crate::bets::Amount;
use crate::error::{Error, Result};

/// Default table minimum.
pub const DEFAULT_MIN_BET: Amount = 5;

/// Configuration for a single craps table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
    /// Minimum stake accepted for any bet (default: 5).
    pub min_bet: Amount,

    /// Dice seed. `None` seeds from OS entropy.
    /// Same seed produces the same rolls.
    pub seed: Option<u64>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            min_bet: DEFAULT_MIN_BET,
            seed: None,
        }
    }
}

impl TableConfig {
    /// Set the table minimum.
    #[must_use]
    pub fn with_min_bet(mut self, min_bet: Amount) -> Self {
        self.min_bet = min_bet;
        self
    }

    /// Set the dice seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Dice for this table: seeded if a seed is set, from entropy otherwise.
    #[must_use]
    pub fn dice(&self) -> DiceRng {
        self.seed.map_or_else(DiceRng::from_entropy, DiceRng::new)
    }

    /// Check the configuration is usable.
    pub fn validate(&self) -> Result<()> {
        if self.min_bet <= 0 {
            return Err(Error::InvalidMinBet(self.min_bet));
        }
        Ok(())
    }
}

/// Configuration for running simulations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Table every trial plays at. Trial `i` rolls stream `i` of the
    /// table's dice, so a seeded batch replays exactly.
    pub table: TableConfig,

    /// Hard cap on rounds per trial, independent of the quitting strategy.
    /// `None` trusts the quitting strategy to stop.
    pub max_rounds: Option<u32>,

    /// Number of independent trials in a batch.
    pub trials: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            table: TableConfig::default(),
            max_rounds: Some(100_000),
            trials: 1,
        }
    }
}

impl SimulationConfig {
    /// Set the table configuration.
    #[must_use]
    pub fn with_table(mut self, table: TableConfig) -> Self {
        self.table = table;
        self
    }

    /// Set the round cap.
    #[must_use]
    pub fn with_max_rounds(mut self, max_rounds: Option<u32>) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    /// Set the number of trials.
    #[must_use]
    pub fn with_trials(mut self, trials: u32) -> Self {
        self.trials = trials;
        self
    }
}
