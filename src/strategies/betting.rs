//! Reference betting strategies.

use serde::{Deserialize, Serialize};

use super::BettingStrategy;
use crate::bets::{exact_odds_stake, Bet, BetSlip};
use crate::board::Status;
use crate::player::Player;

/// Never bets.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct BetNothing;

impl BettingStrategy for BetNothing {
    fn decide_bets(&self, _player: &Player, _status: &Status) -> BetSlip {
        BetSlip::empty()
    }
}

/// Flat pass line bet of the table minimum on every come-out.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct BetPass;

impl BettingStrategy for BetPass {
    fn decide_bets(&self, _player: &Player, status: &Status) -> BetSlip {
        if status.is_come_out() {
            pass_line(status)
        } else {
            BetSlip::empty()
        }
    }
}

/// Pass line on the come-out, then odds the moment the point is set.
///
/// The odds stake is the table minimum rounded up to the next multiple of
/// the point's odds denominator, so a win is always paid exactly.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct BetPassAndOdds;

impl BettingStrategy for BetPassAndOdds {
    fn decide_bets(&self, _player: &Player, status: &Status) -> BetSlip {
        if status.is_come_out() {
            return pass_line(status);
        }
        if !status.point_just_set() || status.round_is_over() {
            return BetSlip::empty();
        }
        exact_odds_stake(status.min_bet(), status.point())
            .and_then(|amount| Bet::pass_odds(amount).ok())
            .map_or_else(BetSlip::empty, BetSlip::single)
    }
}

fn pass_line(status: &Status) -> BetSlip {
    Bet::pass(status.min_bet()).map(BetSlip::single).unwrap_or_default()
}
