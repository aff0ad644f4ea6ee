//! # craps-sim
//!
//! A craps table simulator for evaluating betting strategies statistically.
//!
//! ## Design Principles
//!
//! 1. **Board owns the round**: come-out, point, resolution. Strategies only
//!    ever see an immutable `Status` snapshot.
//!
//! 2. **Bets are data, rules are registered**: a `Bet` is a kind tag and a
//!    stake. The `BetRegistry` maps each kind to its validity rule and
//!    payout, and is read-only once built.
//!
//! 3. **Strategies are pluggable**: betting and quitting strategies are
//!    small traits (closures work too). Stakes are reported in the
//!    `BetSlip` and deducted by the `Player`, never by the strategy.
//!
//! 4. **Replayable**: dice come from an injectable `DiceSource`; seeded
//!    `DiceRng` streams and `ScriptedDice` make every run reproducible.
//!
//! ## Driver protocol
//!
//! ```
//! use craps_sim::board::Board;
//! use craps_sim::player::Player;
//! use craps_sim::strategies::{BetPass, QuitAfterRounds};
//!
//! let mut board = Board::new(5).unwrap();
//! let mut player = Player::new(BetPass, QuitAfterRounds(10));
//!
//! while !player.is_quitting() {
//!     board.reset();
//!     while !board.get_status().round_is_over() {
//!         let bets = player.make_bets(&board.get_status()).unwrap();
//!         board.take_bets(bets).unwrap();
//!         board.roll().unwrap();
//!     }
//!     player.get_payouts(&board.return_payouts().unwrap()).unwrap();
//! }
//! assert_eq!(player.log().winnings_history().len(), 10);
//! ```
//!
//! ## Modules
//!
//! - `core`: points, dice sources, configuration
//! - `bets`: bet values, rules, registry
//! - `board`: round state machine and status snapshots
//! - `player`: bettor state and log
//! - `strategies`: betting and quitting strategies
//! - `sim`: simulation driver, parallel batches, statistics
//!
//! Diagnostics go through `tracing`; install a subscriber to see them.

pub mod bets;
pub mod board;
pub mod core;
pub mod error;
pub mod player;
pub mod sim;
pub mod strategies;

// Re-export commonly used types
pub use crate::core::{DiceRng, DiceSource, Point, ScriptedDice, SimulationConfig, TableConfig};

pub use crate::bets::{Amount, Bet, BetKind, BetRegistry, BetRule, BetSlip, PassLine, PassOdds};

pub use crate::board::{Board, RoundState, Status};

pub use crate::error::{Error, Result};

pub use crate::player::{Log, Player};

pub use crate::strategies::{
    BettingStrategy, QuittingStrategy,
    BetNothing, BetPass, BetPassAndOdds,
    AlwaysQuit, NeverQuit, QuitAfterRounds, QuitOnThreshold,
};

pub use crate::sim::{run_batch, BatchStats, RoundSummary, Simulation, SimulationReport};
