//! Per-player counters and winnings history.

use serde::{Deserialize, Serialize};

use crate::bets::Amount;

/// Append-only record of one player's play.
///
/// Counters only ever grow. `winnings_history` gets one entry per resolved
/// round: cumulative winnings right after that round's payout.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Log {
    num_rounds: u32,
    num_rolls: u64,
    num_bets: u64,
    winnings_history: Vec<Amount>,
}

impl Log {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rounds started.
    #[must_use]
    pub fn num_rounds(&self) -> u32 {
        self.num_rounds
    }

    /// Rolls the player bet ahead of.
    #[must_use]
    pub fn num_rolls(&self) -> u64 {
        self.num_rolls
    }

    /// Bets placed.
    #[must_use]
    pub fn num_bets(&self) -> u64 {
        self.num_bets
    }

    #[must_use]
    pub fn winnings_history(&self) -> &[Amount] {
        &self.winnings_history
    }

    /// Cumulative winnings after the most recent resolved round.
    #[must_use]
    pub fn last_winnings(&self) -> Option<Amount> {
        self.winnings_history.last().copied()
    }

    pub(crate) fn record_round_start(&mut self) {
        self.num_rounds += 1;
    }

    pub(crate) fn record_roll(&mut self) {
        self.num_rolls += 1;
    }

    pub(crate) fn record_bets(&mut self, count: usize) {
        self.num_bets += count as u64;
    }

    pub(crate) fn record_winnings(&mut self, winnings: Amount) {
        self.winnings_history.push(winnings);
    }
}

impl std::fmt::Display for Log {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "<Log #rounds:{} #rolls:{} #bets:{} winnings:{} #history:{}>",
            self.num_rounds,
            self.num_rolls,
            self.num_bets,
            self.last_winnings().unwrap_or(0),
            self.winnings_history.len()
        )
    }
}
