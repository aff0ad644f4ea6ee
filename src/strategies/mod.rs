//! Betting and quitting strategies.
//!
//! A strategy reads the player (and, for betting, the board status) and
//! decides; it never mutates either. Betting strategies report their total
//! stake in the returned `BetSlip` and the `Player` deducts it.
//!
//! Any `Fn(&Player, &Status) -> BetSlip` is a betting strategy and any
//! `Fn(&Player) -> bool` is a quitting strategy, so closures work anywhere
//! the reference strategies do.

pub mod betting;
pub mod quitting;

pub use betting::{BetNothing, BetPass, BetPassAndOdds};
pub use quitting::{AlwaysQuit, NeverQuit, QuitAfterRounds, QuitOnThreshold};

use crate::bets::BetSlip;
use crate::board::Status;
use crate::player::Player;

/// Decides which bets to place before a roll.
pub trait BettingStrategy: Send + Sync {
    /// Choose bets for the next roll. Must self-gate on `status`: return
    /// an empty slip when nothing should be staked.
    fn decide_bets(&self, player: &Player, status: &Status) -> BetSlip;
}

impl<F> BettingStrategy for F
where
    F: Fn(&Player, &Status) -> BetSlip + Send + Sync,
{
    fn decide_bets(&self, player: &Player, status: &Status) -> BetSlip {
        self(player, status)
    }
}

/// Decides when a player walks away from the table.
pub trait QuittingStrategy: Send + Sync {
    /// Pure predicate over the player's log and winnings.
    fn should_quit(&self, player: &Player) -> bool;
}

impl<F> QuittingStrategy for F
where
    F: Fn(&Player) -> bool + Send + Sync,
{
    fn should_quit(&self, player: &Player) -> bool {
        self(player)
    }
}
