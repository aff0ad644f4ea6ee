//! Simulation drivers.
//!
//! - `Simulation`: one player at one board, round by round
//! - `run_batch`: many independent simulations in parallel
//! - `BatchStats`: aggregate results for comparing strategies
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use craps_sim::core::{SimulationConfig, TableConfig};
//! use craps_sim::sim::run_batch;
//! use craps_sim::strategies::{BetPass, QuitAfterRounds};
//!
//! let config = SimulationConfig::default()
//!     .with_table(TableConfig::default().with_seed(7))
//!     .with_trials(4);
//!
//! let stats = run_batch(&config, Arc::new(BetPass), Arc::new(QuitAfterRounds(100))).unwrap();
//! assert_eq!(stats.total_rounds, 400);
//! ```

pub mod batch;
pub mod simulation;
pub mod stats;

pub use batch::{run_batch, run_batch_with_registry, run_trials};
pub use simulation::{RoundSummary, Simulation, SimulationReport};
pub use stats::BatchStats;
