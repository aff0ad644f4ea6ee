//! Core building blocks: points, dice, configuration.

pub mod config;
pub mod dice;
pub mod point;

pub use config::{SimulationConfig, TableConfig, DEFAULT_MIN_BET};
pub use dice::{DiceRng, DiceSource, ScriptedDice};
pub use point::{is_point_number, is_valid_roll, Point, COME_OUT_DECIDERS, POINT_NUMBERS};
