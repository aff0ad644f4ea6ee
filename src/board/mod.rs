//! The craps board and the state it exposes.
//!
//! - `Board`: round state machine that takes bets, rolls, and pays out
//! - `RoundState`: per-round state read by bet rules
//! - `Status`: immutable snapshot handed to strategies

#[allow(clippy::module_inception)]
mod board;
pub mod status;

pub use board::Board;
pub use status::{RoundState, Status};
