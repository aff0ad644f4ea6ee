//! Driver loop binding one player to one board.
//!
//! Each round follows the table protocol: read status, collect bets,
//! hand them to the board, roll; repeat until the round is decided, then
//! return payouts to the player.

use serde::{Deserialize, Serialize};
use tracing::{debug, debug_span, Span};

use crate::bets::{Amount, BetRegistry};
use crate::board::Board;
use crate::core::{Point, TableConfig};
use crate::error::{Error, Result};
use crate::player::Player;

/// Outcome of a single round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    /// Rolls thrown in the round.
    pub rolls: u32,
    /// Point established, or `Point::OFF` if the come-out decided it.
    pub point: Point,
    /// The deciding roll.
    pub final_roll: u8,
    /// Change in the player's winnings over the round.
    pub net: Amount,
}

/// Totals for a finished simulation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationReport {
    pub rounds: u32,
    pub rolls: u64,
    pub bets: u64,
    /// Final winnings.
    pub winnings: Amount,
    /// Cumulative winnings after each resolved round.
    pub winnings_history: Vec<Amount>,
}

impl SimulationReport {
    /// Snapshot a player's results.
    #[must_use]
    pub fn from_player(player: &Player) -> Self {
        let log = player.log();
        Self {
            rounds: log.num_rounds(),
            rolls: log.num_rolls(),
            bets: log.num_bets(),
            winnings: player.winnings(),
            winnings_history: log.winnings_history().to_vec(),
        }
    }
}

/// One player at one board.
#[derive(Debug)]
pub struct Simulation {
    board: Board,
    player: Player,
    max_rounds: Option<u32>,
    rounds_played: u32,
    span: Span,
}

impl Simulation {
    /// Bind a player to a board.
    pub fn new(board: Board, player: Player) -> Self {
        let span = debug_span!("simulation", min_bet = board.min_bet());
        Self {
            board,
            player,
            max_rounds: None,
            rounds_played: 0,
            span,
        }
    }

    /// Build the board from a table configuration.
    pub fn from_config(config: &TableConfig, player: Player) -> Result<Self> {
        let board = Board::from_config(config)?;
        let mut sim = Self::new(board, player);
        sim.span = debug_span!("simulation", min_bet = config.min_bet, seed = ?config.seed);
        Ok(sim)
    }

    /// Stop after `max_rounds` rounds even if the player would play on.
    #[must_use]
    pub fn with_max_rounds(mut self, max_rounds: Option<u32>) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Give the player back.
    #[must_use]
    pub fn into_player(self) -> Player {
        self.player
    }

    /// Registry the board resolves bets with.
    #[must_use]
    pub fn registry(&self) -> &BetRegistry {
        self.board.registry()
    }

    /// Play one full round.
    ///
    /// Any rejected bet or overflowing amount aborts the round with its
    /// error; the driver should treat the whole run as failed.
    pub fn play_round(&mut self) -> Result<RoundSummary> {
        let _enter = self.span.enter();
        self.board.reset();
        let before = self.player.winnings();
        let mut rolls = 0;

        while !self.board.get_status().round_is_over() {
            let bets = self.player.make_bets(&self.board.get_status())?;
            self.board.take_bets(bets)?;
            self.board.roll()?;
            rolls += 1;
        }

        let round = self.board.round();
        let payouts = self.board.return_payouts()?;
        self.player.get_payouts(&payouts)?;
        self.rounds_played += 1;

        let summary = RoundSummary {
            rolls,
            point: round.point,
            final_roll: round.last_roll,
            net: self
                .player
                .winnings()
                .checked_sub(before)
                .ok_or(Error::AmountOverflow("round net"))?,
        };
        debug!(
            round = self.rounds_played,
            rolls,
            point = summary.point.value(),
            net = summary.net,
            "round resolved"
        );
        Ok(summary)
    }

    /// Whether the run should stop before another round.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.max_rounds.is_some_and(|max| self.rounds_played >= max) || self.player.is_quitting()
    }

    /// Play rounds until the player quits or the round cap is hit.
    pub fn run(&mut self) -> Result<SimulationReport> {
        while !self.is_finished() {
            self.play_round()?;
        }
        let report = SimulationReport::from_player(&self.player);
        debug!(
            parent: &self.span,
            rounds = report.rounds,
            winnings = report.winnings,
            "simulation finished"
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bets::{Bet, BetSlip};
    use crate::board::Status;
    use crate::core::ScriptedDice;
    use crate::strategies::{AlwaysQuit, BetPass, BetPassAndOdds, NeverQuit, QuitAfterRounds};

    fn scripted(totals: impl IntoIterator<Item = u8>, player: Player) -> Simulation {
        Simulation::new(Board::with_dice(5, ScriptedDice::new(totals)).unwrap(), player)
    }

    #[test]
    fn test_play_round_natural() {
        let mut sim = scripted([7], Player::new(BetPass, NeverQuit));
        let summary = sim.play_round().unwrap();
        assert_eq!(summary.rolls, 1);
        assert_eq!(summary.point, Point::OFF);
        assert_eq!(summary.final_roll, 7);
        assert_eq!(summary.net, 5);
    }

    #[test]
    fn test_play_round_point_with_odds() {
        let mut sim = scripted([5, 11, 3, 5], Player::new(BetPassAndOdds, NeverQuit));
        let summary = sim.play_round().unwrap();
        assert_eq!(summary.rolls, 4);
        assert_eq!(summary.point.value(), 5);
        // pass +5, odds of 6 at 3:2 +9
        assert_eq!(summary.net, 14);
        assert_eq!(sim.player().log().num_rolls(), 4);
        assert_eq!(sim.player().log().num_bets(), 2);
    }

    #[test]
    fn test_run_stops_when_quitting() {
        let mut sim = scripted([7, 2, 11], Player::new(BetPass, QuitAfterRounds(3)));
        let report = sim.run().unwrap();
        assert_eq!(report.rounds, 3);
        assert_eq!(report.winnings_history, vec![5, 0, 5]);
        assert_eq!(report.winnings, 5);
    }

    #[test]
    fn test_run_respects_round_cap() {
        let mut sim = scripted([7, 7], Player::new(BetPass, NeverQuit)).with_max_rounds(Some(2));
        let report = sim.run().unwrap();
        assert_eq!(report.rounds, 2);
        assert!(sim.is_finished());
    }

    #[test]
    fn test_run_with_quitter_plays_nothing() {
        let mut sim = scripted(std::iter::empty::<u8>(), Player::new(BetPass, AlwaysQuit));
        let report = sim.run().unwrap();
        assert_eq!(report, SimulationReport::default());
    }

    #[test]
    fn test_rejected_bet_aborts_round() {
        let greedy = |_: &Player, status: &Status| {
            BetSlip::single(Bet::pass(status.min_bet()).unwrap())
        };
        let mut sim = scripted([6, 7], Player::new(greedy, NeverQuit));
        let err = sim.play_round().unwrap_err();
        assert!(err.is_bet_rejection());
    }

    #[test]
    fn test_unpayable_win_aborts_round() {
        let high_roller = |_: &Player, status: &Status| {
            if status.is_come_out() {
                BetSlip::single(Bet::pass(Amount::MAX / 2 + 1).unwrap())
            } else {
                BetSlip::empty()
            }
        };
        let mut sim = scripted([7], Player::new(high_roller, NeverQuit));
        assert_eq!(sim.play_round(), Err(Error::AmountOverflow("pass line payout")));
        assert!(sim.player().log().winnings_history().is_empty());
    }

    #[test]
    fn test_from_config_is_replayable() {
        let config = TableConfig::default().with_seed(11);
        let run = |config: &TableConfig| {
            Simulation::from_config(config, Player::new(BetPass, QuitAfterRounds(25)))
                .unwrap()
                .run()
                .unwrap()
        };
        assert_eq!(run(&config), run(&config));
    }
}
