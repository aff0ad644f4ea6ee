//! A bettor: strategies bound to isolated winnings and a log.

use std::sync::Arc;

use tracing::{debug, trace};

use super::log::Log;
use crate::bets::{Amount, Bet};
use crate::board::Status;
use crate::error::{Error, Result};
use crate::strategies::{BettingStrategy, QuittingStrategy};

/// A craps bettor.
///
/// The player never drives the game; an outer loop asks it whether it is
/// quitting, feeds it board status, and hands it payouts.
///
/// ## Example
///
/// ```
/// use craps_sim::board::Status;
/// use craps_sim::player::Player;
/// use craps_sim::strategies::{AlwaysQuit, BetPass};
///
/// let mut player = Player::new(BetPass, AlwaysQuit);
/// let bets = player.make_bets(&Status::new(5, false, 0, false).unwrap()).unwrap();
/// assert_eq!(bets.len(), 1);
/// assert_eq!(player.winnings(), -5);
/// assert!(player.is_quitting());
/// ```
#[derive(Clone)]
pub struct Player {
    betting: Arc<dyn BettingStrategy>,
    quitting: Arc<dyn QuittingStrategy>,
    log: Log,
    winnings: Amount,
}

impl Player {
    /// Create a player from a betting and a quitting strategy.
    pub fn new(
        betting: impl BettingStrategy + 'static,
        quitting: impl QuittingStrategy + 'static,
    ) -> Self {
        Self::from_shared(Arc::new(betting), Arc::new(quitting))
    }

    /// Create a player from strategies shared with other players.
    pub fn from_shared(
        betting: Arc<dyn BettingStrategy>,
        quitting: Arc<dyn QuittingStrategy>,
    ) -> Self {
        Self {
            betting,
            quitting,
            log: Log::new(),
            winnings: 0,
        }
    }

    /// Running winnings: stakes are deducted when placed, payouts added
    /// when received.
    #[must_use]
    pub fn winnings(&self) -> Amount {
        self.winnings
    }

    #[must_use]
    pub fn log(&self) -> &Log {
        &self.log
    }

    /// Whether the quitting strategy says stop.
    #[must_use]
    pub fn is_quitting(&self) -> bool {
        let quitting = self.quitting.should_quit(self);
        if quitting {
            debug!(
                rounds = self.log.num_rounds(),
                winnings = self.winnings,
                "player quitting"
            );
        }
        quitting
    }

    /// Ask the betting strategy for this roll's bets.
    ///
    /// Counts a new round when `status` shows a fresh come-out and a roll
    /// while the round is live. The total stake is deducted from winnings
    /// before the bets are returned; fails with `Error::AmountOverflow` if
    /// winnings cannot absorb it.
    pub fn make_bets(&mut self, status: &Status) -> Result<Vec<Bet>> {
        if status.is_come_out() {
            self.log.record_round_start();
        }
        if !status.round_is_over() {
            self.log.record_roll();
        }

        let slip = self.betting.decide_bets(self, status);
        self.winnings = self
            .winnings
            .checked_sub(slip.stake())
            .ok_or(Error::AmountOverflow("winnings after staking"))?;
        self.log.record_bets(slip.len());
        if !slip.is_empty() {
            trace!(
                bets = slip.len(),
                stake = slip.stake(),
                winnings = self.winnings,
                "bets made"
            );
        }
        Ok(slip.into_bets())
    }

    /// Collect the payouts of a finished round.
    ///
    /// Nothing is recorded if the new winnings would leave the range of
    /// `Amount`.
    pub fn get_payouts(&mut self, payouts: &[Amount]) -> Result<()> {
        self.winnings = payouts
            .iter()
            .try_fold(self.winnings, |total, &payout| total.checked_add(payout))
            .ok_or(Error::AmountOverflow("winnings after payouts"))?;
        self.log.record_winnings(self.winnings);
        trace!(winnings = self.winnings, rounds = self.log.num_rounds(), "payouts collected");
        Ok(())
    }
}

impl std::fmt::Debug for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Player")
            .field("winnings", &self.winnings)
            .field("log", &self.log)
            .finish_non_exhaustive()
    }
}
