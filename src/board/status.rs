//! Round state and the public status snapshot.
//!
//! `RoundState` is the board's own per-round state; bet rules read it to
//! decide validity and payouts. `Status` is the copy handed to strategies.
//! It is built fresh on every query, so holding one can never change the
//! board.

use serde::{Deserialize, Serialize};

use crate::bets::Amount;
use crate::core::Point;
use crate::error::{Error, Result};

/// Mutable per-round state owned by the board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    /// Established point, or `Point::OFF` during the come-out.
    pub point: Point,
    /// The last roll decided the round.
    pub round_is_over: bool,
    /// The last roll was the one that established the point.
    pub point_just_set: bool,
    /// Total of the last roll, 0 before the first roll of a round.
    pub last_roll: u8,
}

impl RoundState {
    /// Fresh come-out state.
    #[must_use]
    pub fn come_out() -> Self {
        Self::default()
    }

    /// Come-out phase of a live round.
    #[must_use]
    pub fn is_come_out(&self) -> bool {
        !self.point.is_on() && !self.round_is_over
    }
}

/// Immutable snapshot of the board exposed to strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Status {
    min_bet: Amount,
    round_is_over: bool,
    point: Point,
    point_just_set: bool,
}

impl Status {
    /// Create a status, validating the point and the minimum bet.
    pub fn new(
        min_bet: Amount,
        round_is_over: bool,
        point: u8,
        point_just_set: bool,
    ) -> Result<Self> {
        let point = Point::new(point)?;
        if min_bet <= 0 {
            return Err(Error::InvalidMinBet(min_bet));
        }
        Ok(Self {
            min_bet,
            round_is_over,
            point,
            point_just_set,
        })
    }

    /// Snapshot a round state. The minimum must already be validated.
    pub(crate) fn from_round(min_bet: Amount, round: &RoundState) -> Self {
        Self {
            min_bet,
            round_is_over: round.round_is_over,
            point: round.point,
            point_just_set: round.point_just_set,
        }
    }

    #[must_use]
    pub fn min_bet(&self) -> Amount {
        self.min_bet
    }

    #[must_use]
    pub fn round_is_over(&self) -> bool {
        self.round_is_over
    }

    #[must_use]
    pub fn point(&self) -> Point {
        self.point
    }

    #[must_use]
    pub fn point_just_set(&self) -> bool {
        self.point_just_set
    }

    /// A new round is waiting for its come-out roll.
    #[must_use]
    pub fn is_come_out(&self) -> bool {
        !self.point.is_on() && !self.round_is_over
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "<Status min_bet:{} rnd_ovr:{} point:{} just_set:{}>",
            self.min_bet, self.round_is_over, self.point, self.point_just_set
        )
    }
}
