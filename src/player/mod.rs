//! Players and their logs.

pub mod log;
#[allow(clippy::module_inception)]
mod player;

pub use log::Log;
pub use player::Player;
