//! The craps board: round state machine plus the bets riding on it.
//!
//! ## Round lifecycle
//!
//! - **Come-out**: point off, round live. 2, 3, 7, 11 or 12 ends the round;
//!   4, 5, 6, 8, 9 or 10 sets the point.
//! - **Point on**: 7 or the point ends the round. The roll that set the
//!   point never ends the round itself.
//! - **Round over**: no more rolls until `return_payouts` (or `reset`)
//!   starts the next round.
//!
//! ```
//! use craps_sim::bets::Bet;
//! use craps_sim::board::Board;
//!
//! let mut board = Board::new(5).unwrap();
//! board.take_bets(vec![Bet::pass(5).unwrap()]).unwrap();
//! board.roll_fixed(7).unwrap();
//! assert!(board.get_status().round_is_over());
//! assert_eq!(board.return_payouts().unwrap(), vec![10]);
//! ```

use std::sync::Arc;

use smallvec::SmallVec;
use tracing::{debug, trace};

use super::status::{RoundState, Status};
use crate::bets::{Amount, Bet, BetRegistry};
use crate::core::{is_valid_roll, DiceRng, DiceSource, Point, TableConfig, COME_OUT_DECIDERS};
use crate::error::{Error, Result};

/// A single-player craps table.
pub struct Board {
    min_bet: Amount,
    registry: Arc<BetRegistry>,
    dice: Box<dyn DiceSource>,
    round: RoundState,
    /// Bets placed since the last reset, in placement order.
    bets: SmallVec<[Bet; 4]>,
}

impl Board {
    /// Create a board with the standard bets and entropy-seeded dice.
    pub fn new(min_bet: Amount) -> Result<Self> {
        Self::with_dice(min_bet, DiceRng::from_entropy())
    }

    /// Create a board from a table configuration.
    pub fn from_config(config: &TableConfig) -> Result<Self> {
        config.validate()?;
        Self::with_dice(config.min_bet, config.dice())
    }

    /// Create a board that draws rolls from `dice`.
    pub fn with_dice(min_bet: Amount, dice: impl DiceSource + 'static) -> Result<Self> {
        if min_bet <= 0 {
            return Err(Error::InvalidMinBet(min_bet));
        }
        Ok(Self {
            min_bet,
            registry: Arc::new(BetRegistry::standard()),
            dice: Box::new(dice),
            round: RoundState::come_out(),
            bets: SmallVec::new(),
        })
    }

    /// Resolve bets with `registry` instead of the standard one.
    #[must_use]
    pub fn with_registry(mut self, registry: Arc<BetRegistry>) -> Self {
        self.registry = registry;
        self
    }

    #[must_use]
    pub fn min_bet(&self) -> Amount {
        self.min_bet
    }

    #[must_use]
    pub fn registry(&self) -> &Arc<BetRegistry> {
        &self.registry
    }

    /// Bets riding on the current round.
    #[must_use]
    pub fn bets(&self) -> &[Bet] {
        &self.bets
    }

    /// Copy of the current round state.
    #[must_use]
    pub fn round(&self) -> RoundState {
        self.round
    }

    /// Total of the last roll, 0 before the first roll of a round.
    #[must_use]
    pub fn last_roll(&self) -> u8 {
        self.round.last_roll
    }

    /// Throw the dice and advance the round.
    ///
    /// Fails with `Error::IllegalState` once the round is over; collect
    /// payouts (or reset) first.
    pub fn roll(&mut self) -> Result<u8> {
        self.ensure_round_live()?;
        let total = self.dice.roll_total();
        self.advance(total);
        Ok(total)
    }

    /// Advance the round as if `outcome` had been thrown.
    ///
    /// Any total in 2..=12 is used verbatim; anything else is rejected.
    pub fn roll_fixed(&mut self, outcome: u8) -> Result<u8> {
        if !is_valid_roll(outcome) {
            return Err(Error::InvalidRoll(outcome));
        }
        self.ensure_round_live()?;
        self.advance(outcome);
        Ok(outcome)
    }

    /// Apply a roll to the round state.
    fn advance(&mut self, total: u8) {
        let round = &mut self.round;
        round.last_roll = total;

        let established = if round.point.is_on() {
            None
        } else {
            Point::from_come_out(total)
        };
        if let Some(point) = established {
            round.point = point;
            round.point_just_set = true;
            debug!(point = total, "point established");
        } else if round.point_just_set {
            round.point_just_set = false;
        }

        if !round.point.is_on() {
            round.round_is_over = COME_OUT_DECIDERS.contains(&total);
        } else if !round.point_just_set {
            round.round_is_over = total == 7 || total == round.point.value();
        }

        trace!(roll = total, point = round.point.value(), "dice rolled");
        if round.round_is_over {
            debug!(
                roll = total,
                point = round.point.value(),
                bets = self.bets.len(),
                "round over"
            );
        }
    }

    fn ensure_round_live(&self) -> Result<()> {
        if self.round.round_is_over {
            Err(Error::IllegalState("round is over; return payouts before rolling again"))
        } else {
            Ok(())
        }
    }

    /// Check a bet against the table minimum and its rule.
    pub fn validate_bet(&self, bet: &Bet) -> Result<()> {
        if bet.amount() < self.min_bet {
            return Err(Error::InvalidBet {
                bet: bet.clone(),
                reason: format!("amount below table minimum of {}", self.min_bet),
            });
        }
        let rule = self.registry.rule(bet.kind())?;
        if !rule.is_valid(&self.round, bet) {
            return Err(Error::InvalidBet {
                bet: bet.clone(),
                reason: format!(
                    "not allowed with point {} (round over: {})",
                    self.round.point, self.round.round_is_over
                ),
            });
        }
        Ok(())
    }

    /// Accept bets for the current round, in order.
    ///
    /// Not atomic: on the first rejected bet the call fails, and bets
    /// before it in the same call stay on the table.
    pub fn take_bets(&mut self, bets: impl IntoIterator<Item = Bet>) -> Result<()> {
        for bet in bets {
            if let Err(err) = self.validate_bet(&bet) {
                debug!(%bet, error = %err, "bet rejected");
                return Err(err);
            }
            trace!(%bet, "bet taken");
            self.bets.push(bet);
        }
        Ok(())
    }

    /// Pay every bet of the finished round and reset the board.
    ///
    /// Returns one amount per bet in placement order: 0 for a loser, the
    /// full return (principal included) for a winner. Fails with
    /// `Error::IllegalState` if the round is not over, and with
    /// `Error::AmountOverflow` if a win cannot be represented; the board
    /// keeps its bets in both cases.
    pub fn return_payouts(&mut self) -> Result<Vec<Amount>> {
        if !self.round.round_is_over {
            return Err(Error::IllegalState("payouts requested before the round is over"));
        }
        let payouts = self
            .bets
            .iter()
            .map(|bet| self.registry.rule(bet.kind())?.payout(&self.round, bet))
            .collect::<Result<Vec<_>>>()?;
        debug!(
            bets = payouts.len(),
            winners = payouts.iter().filter(|&&payout| payout > 0).count(),
            "payouts returned"
        );
        self.reset();
        Ok(payouts)
    }

    /// Snapshot of the board for strategies.
    #[must_use]
    pub fn get_status(&self) -> Status {
        Status::from_round(self.min_bet, &self.round)
    }

    /// Clear bets and round state, returning the fresh status.
    pub fn reset(&mut self) -> Status {
        self.bets.clear();
        self.round = RoundState::come_out();
        self.get_status()
    }
}

impl std::fmt::Debug for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Board")
            .field("min_bet", &self.min_bet)
            .field("round", &self.round)
            .field("bets", &self.bets)
            .finish_non_exhaustive()
    }
}
