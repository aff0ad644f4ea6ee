//! Bet value objects.
//!
//! A `Bet` is a kind tag plus a positive stake. It is created by a betting
//! strategy, handed to the board, and dropped once payouts are returned.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Money amounts: stakes, payouts, minimums and running winnings.
pub type Amount = i64;

/// Symbolic bet type tag.
///
/// The board never interprets the tag itself; it looks the tag up in its
/// `BetRegistry` to find the rule that validates and pays the bet.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BetKind(Cow<'static, str>);

impl BetKind {
    /// Pass line bet.
    pub const PASS: BetKind = BetKind(Cow::Borrowed("pass"));

    /// Free odds behind the pass line.
    pub const PASS_ODDS: BetKind = BetKind(Cow::Borrowed("pass_odds"));

    /// Create a kind with a custom tag, for rules registered outside this crate.
    pub fn custom(tag: impl Into<String>) -> Self {
        Self(Cow::Owned(tag.into()))
    }

    /// Get the tag.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// An immutable wager: kind plus a positive amount.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Bet {
    kind: BetKind,
    amount: Amount,
}

impl Bet {
    /// Create a bet, failing if `amount` is not positive.
    pub fn new(kind: BetKind, amount: Amount) -> Result<Self> {
        if amount <= 0 {
            return Err(Error::InvalidAmount(amount));
        }
        Ok(Self { kind, amount })
    }

    /// Pass line bet.
    pub fn pass(amount: Amount) -> Result<Self> {
        Self::new(BetKind::PASS, amount)
    }

    /// Pass line odds bet.
    pub fn pass_odds(amount: Amount) -> Result<Self> {
        Self::new(BetKind::PASS_ODDS, amount)
    }

    #[must_use]
    pub fn kind(&self) -> &BetKind {
        &self.kind
    }

    #[must_use]
    pub fn amount(&self) -> Amount {
        self.amount
    }
}

impl std::fmt::Display for Bet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<Bet {} amount:{}>", self.kind, self.amount)
    }
}

/// The bets a strategy chose for one roll, together with their total stake.
///
/// The stake is summed at construction so the player can deduct exactly
/// what was put on the table, before the outcome is known. Construction
/// fails if that sum leaves the range of `Amount`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BetSlip {
    bets: Vec<Bet>,
    stake: Amount,
}

impl BetSlip {
    /// A slip with no bets.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a slip from a list of bets.
    pub fn new(bets: Vec<Bet>) -> Result<Self> {
        let stake = bets
            .iter()
            .try_fold(0, |total: Amount, bet| total.checked_add(bet.amount()))
            .ok_or(Error::AmountOverflow("bet slip stake"))?;
        Ok(Self { bets, stake })
    }

    /// A slip holding a single bet.
    pub fn single(bet: Bet) -> Self {
        Self {
            stake: bet.amount(),
            bets: vec![bet],
        }
    }

    /// Total amount staked.
    #[must_use]
    pub fn stake(&self) -> Amount {
        self.stake
    }

    #[must_use]
    pub fn bets(&self) -> &[Bet] {
        &self.bets
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bets.is_empty()
    }

    /// Consume the slip, returning the bets in order.
    #[must_use]
    pub fn into_bets(self) -> Vec<Bet> {
        self.bets
    }
}
