//! Standard bet rules: pass line and pass odds.

use super::odds::{is_exact_odds_stake, odds_return};
use super::registry::BetRule;
use super::{Amount, Bet};
use crate::board::RoundState;
use crate::error::{Error, Result};

/// Pass line.
///
/// Placed on the come-out. Wins even money on a natural (7 or 11) or when
/// the point repeats before a 7. Returns `2 × amount` on a win.
#[derive(Clone, Copy, Debug, Default)]
pub struct PassLine;

impl BetRule for PassLine {
    fn is_valid(&self, round: &RoundState, _bet: &Bet) -> bool {
        round.is_come_out()
    }

    fn payout(&self, round: &RoundState, bet: &Bet) -> Result<Amount> {
        ensure_round_over(round)?;
        let natural = !round.point.is_on() && matches!(round.last_roll, 7 | 11);
        let point_made = round.point.is_on() && round.last_roll == round.point.value();
        if natural || point_made {
            bet.amount().checked_mul(2).ok_or(Error::AmountOverflow("pass line payout"))
        } else {
            Ok(0)
        }
    }
}

/// Free odds behind the pass line.
///
/// Placed any time a point is live, in multiples of the point's odds
/// denominator so the win is paid exactly. Wins at true odds if the point
/// repeats before a 7.
#[derive(Clone, Copy, Debug, Default)]
pub struct PassOdds;

impl BetRule for PassOdds {
    fn is_valid(&self, round: &RoundState, bet: &Bet) -> bool {
        !round.round_is_over && is_exact_odds_stake(bet.amount(), round.point)
    }

    fn payout(&self, round: &RoundState, bet: &Bet) -> Result<Amount> {
        ensure_round_over(round)?;
        if round.point.is_on() && round.last_roll == round.point.value() {
            odds_return(bet.amount(), round.point)
        } else {
            Ok(0)
        }
    }
}

fn ensure_round_over(round: &RoundState) -> Result<()> {
    if round.round_is_over {
        Ok(())
    } else {
        Err(Error::IllegalState("payout requested before the round is over"))
    }
}
