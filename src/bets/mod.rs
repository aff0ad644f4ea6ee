//! Bets and the rules that resolve them.
//!
//! - `Bet`, `BetKind`, `BetSlip`: value objects passed from strategies to the board
//! - `BetRule`: validity predicate plus payout for one kind of bet
//! - `BetRegistry`: kind to rule lookup, read-only once built
//! - `PassLine`, `PassOdds`: the standard rules

pub mod bet;
pub mod odds;
pub mod registry;
pub mod rules;

pub use bet::{Amount, Bet, BetKind, BetSlip};
pub use odds::{exact_odds_stake, is_exact_odds_stake, odds_return, true_odds};
pub use registry::{BetRegistry, BetRule};
pub use rules::{PassLine, PassOdds};
