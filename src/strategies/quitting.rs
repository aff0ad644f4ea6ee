//! Reference quitting strategies.

use serde::{Deserialize, Serialize};

use super::QuittingStrategy;
use crate::bets::Amount;
use crate::player::Player;

/// Quits before playing.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct AlwaysQuit;

impl QuittingStrategy for AlwaysQuit {
    fn should_quit(&self, _player: &Player) -> bool {
        true
    }
}

/// Never quits; pair with a round cap.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct NeverQuit;

impl QuittingStrategy for NeverQuit {
    fn should_quit(&self, _player: &Player) -> bool {
        false
    }
}

/// Quits once `n` rounds have started.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct QuitAfterRounds(pub u32);

impl QuittingStrategy for QuitAfterRounds {
    fn should_quit(&self, player: &Player) -> bool {
        player.log().num_rounds() >= self.0
    }
}

/// Quits on a winnings target, a loss limit, or a round limit.
///
/// Only checked once at least one round has been resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuitOnThreshold {
    /// Quit once cumulative winnings reach this.
    pub gain: Amount,
    /// Quit once cumulative winnings fall to minus this (sign ignored).
    pub loss: Amount,
    /// Quit once this many rounds have started.
    pub max_rounds: Option<u32>,
}

impl QuitOnThreshold {
    /// Same bound for gains and losses, no round limit.
    #[must_use]
    pub fn symmetric(bound: Amount) -> Self {
        Self {
            gain: bound.abs(),
            loss: bound.abs(),
            max_rounds: None,
        }
    }

    /// Also quit after `rounds` rounds.
    #[must_use]
    pub fn with_max_rounds(mut self, rounds: u32) -> Self {
        self.max_rounds = Some(rounds);
        self
    }
}

impl QuittingStrategy for QuitOnThreshold {
    fn should_quit(&self, player: &Player) -> bool {
        let Some(last) = player.log().last_winnings() else {
            return false;
        };
        last >= self.gain
            || last <= -self.loss.abs()
            || self.max_rounds.is_some_and(|max| player.log().num_rounds() >= max)
    }
}
