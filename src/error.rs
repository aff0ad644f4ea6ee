//! Error types for the simulator.
//!
//! Every failure is reported synchronously to the caller. A driver may
//! catch an error and abort that single simulation run, but nothing here
//! retries or downgrades an error to a default value.

use thiserror::Error;

use crate::bets::{Amount, Bet, BetKind};

/// Result type alias for simulator operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Simulator error types.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// A bet was constructed with a non-positive amount.
    #[error("bet amount must be positive, got {0}")]
    InvalidAmount(Amount),

    /// A table or status was constructed with a non-positive minimum bet.
    #[error("minimum bet must be positive, got {0}")]
    InvalidMinBet(Amount),

    /// A point outside {0, 4, 5, 6, 8, 9, 10}.
    #[error("unacceptable point: {0}")]
    InvalidPoint(u8),

    /// A forced roll outside 2..=12.
    #[error("roll must be between 2 and 12, got {0}")]
    InvalidRoll(u8),

    /// The bet fails its validity rule or the table minimum.
    #[error("{bet} not valid: {reason}")]
    InvalidBet { bet: Bet, reason: String },

    /// No rule is registered for the bet's kind.
    #[error("bet kind '{0}' not implemented")]
    UnimplementedBet(BetKind),

    /// An operation was requested in a board state that does not allow it.
    #[error("illegal state: {0}")]
    IllegalState(&'static str),

    /// Money arithmetic left the range of `Amount`.
    #[error("amount overflow in {0}")]
    AmountOverflow(&'static str),
}

impl Error {
    /// Whether this error rejected a single bet (invalid or unimplemented).
    #[must_use]
    pub fn is_bet_rejection(&self) -> bool {
        matches!(self, Error::InvalidBet { .. } | Error::UnimplementedBet(_))
    }
}
