//! Dice sources.
//!
//! The board draws its rolls from a `DiceSource`. Two implementations ship:
//!
//! - **`DiceRng`**: deterministic ChaCha8 dice; same seed, same rolls.
//!   One seed carries 2^64 independent streams, one per batch trial.
//! - **`ScriptedDice`**: replays a fixed list of totals, for tests.
//!
//! ```
//! use craps_sim::core::{DiceRng, DiceSource};
//!
//! let mut dice = DiceRng::new(42);
//! let (a, b) = dice.roll_pair();
//! assert!((1..=6).contains(&a) && (1..=6).contains(&b));
//!
//! // Same seed replays the same rolls
//! let mut replay = DiceRng::new(42);
//! assert_eq!(replay.roll_pair(), (a, b));
//! ```

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::point::{is_valid_roll, MAX_ROLL, MIN_ROLL};

/// Anything that can throw a pair of six-sided dice.
pub trait DiceSource: Send {
    /// Throw both dice. Each value must be in 1..=6.
    fn roll_pair(&mut self) -> (u8, u8);

    /// Throw both dice and return the total.
    fn roll_total(&mut self) -> u8 {
        let (a, b) = self.roll_pair();
        a + b
    }
}

/// Deterministic dice backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct DiceRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl DiceRng {
    /// Create dice with the given seed, on stream 0.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create dice seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed these dice started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// ChaCha stream these dice roll on.
    #[must_use]
    pub fn stream(&self) -> u64 {
        self.inner.get_stream()
    }

    /// Fresh dice with the same seed on stream `stream`.
    ///
    /// Streams never overlap, so every trial of a batch can roll its own
    /// stream of one seed and the whole batch replays from that seed.
    #[must_use]
    pub fn with_stream(&self, stream: u64) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(self.seed);
        inner.set_stream(stream);
        Self {
            inner,
            seed: self.seed,
        }
    }
}

impl DiceSource for DiceRng {
    fn roll_pair(&mut self) -> (u8, u8) {
        (self.inner.gen_range(1..=6), self.inner.gen_range(1..=6))
    }
}

/// Dice that replay a fixed list of totals.
///
/// Each total is split into a legal pair of dice. Panics when the script
/// runs out, since a test that rolls more than it scripted is broken.
#[derive(Clone, Debug, Default)]
pub struct ScriptedDice {
    totals: VecDeque<u8>,
}

impl ScriptedDice {
    /// Create scripted dice.
    ///
    /// Panics if any total is outside 2..=12.
    pub fn new(totals: impl IntoIterator<Item = u8>) -> Self {
        let totals: VecDeque<u8> = totals.into_iter().collect();
        for &total in &totals {
            assert!(
                is_valid_roll(total),
                "Scripted total {} outside {}..={}",
                total,
                MIN_ROLL,
                MAX_ROLL
            );
        }
        Self { totals }
    }

    /// Number of totals left to replay.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.totals.len()
    }
}

impl DiceSource for ScriptedDice {
    fn roll_pair(&mut self) -> (u8, u8) {
        let total = self.totals.pop_front().expect("Scripted dice exhausted");
        let first = total.saturating_sub(6).max(1);
        (first, total - first)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut dice1 = DiceRng::new(42);
        let mut dice2 = DiceRng::new(42);

        for _ in 0..100 {
            assert_eq!(dice1.roll_pair(), dice2.roll_pair());
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut dice1 = DiceRng::new(1);
        let mut dice2 = DiceRng::new(2);

        let seq1: Vec<_> = (0..20).map(|_| dice1.roll_total()).collect();
        let seq2: Vec<_> = (0..20).map(|_| dice2.roll_total()).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_each_die_in_range() {
        let mut dice = DiceRng::new(7);
        for _ in 0..1000 {
            let (a, b) = dice.roll_pair();
            assert!((1..=6).contains(&a));
            assert!((1..=6).contains(&b));
        }
    }

    #[test]
    fn test_streams_differ_and_replay() {
        let root = DiceRng::new(42);
        let mut first = root.with_stream(1);
        let mut second = root.with_stream(2);
        assert_eq!(first.seed(), 42);
        assert_eq!(second.stream(), 2);

        let seq1: Vec<_> = (0..20).map(|_| first.roll_total()).collect();
        let seq2: Vec<_> = (0..20).map(|_| second.roll_total()).collect();
        assert_ne!(seq1, seq2);

        let mut replay = DiceRng::new(42).with_stream(1);
        let again: Vec<_> = (0..20).map(|_| replay.roll_total()).collect();
        assert_eq!(seq1, again);
    }

    #[test]
    fn test_stream_restarts_from_seed() {
        let mut root = DiceRng::new(9);
        let fresh: Vec<_> = (0..10).map(|_| root.roll_pair()).collect();
        // Rolling the root does not shift the streams derived from it
        let mut zero = root.with_stream(0);
        let replay: Vec<_> = (0..10).map(|_| zero.roll_pair()).collect();
        assert_eq!(fresh, replay);
        assert_eq!(DiceRng::new(9).stream(), 0);
    }

    #[test]
    fn test_scripted_pairs() {
        let mut dice = ScriptedDice::new([2, 7, 12]);
        assert_eq!(dice.remaining(), 3);
        assert_eq!(dice.roll_pair(), (1, 1));
        assert_eq!(dice.roll_pair(), (1, 6));
        assert_eq!(dice.roll_pair(), (6, 6));
        assert_eq!(dice.remaining(), 0);
    }

    #[test]
    #[should_panic(expected = "Scripted dice exhausted")]
    fn test_scripted_exhausted() {
        let mut dice = ScriptedDice::new([7]);
        dice.roll_pair();
        dice.roll_pair();
    }

    #[test]
    #[should_panic(expected = "outside 2..=12")]
    fn test_scripted_rejects_bad_total() {
        ScriptedDice::new([1]);
    }
}
