//! Bet registry: bet kind to validity rule and payout.
//!
//! The board holds a `BetRegistry` behind an `Arc` and only ever reads it.
//! Build it once, register every rule, then share it between tables.

use rustc_hash::FxHashMap;

use super::rules::{PassLine, PassOdds};
use super::{Amount, Bet, BetKind};
use crate::board::RoundState;
use crate::error::{Error, Result};

/// Semantics of one kind of bet.
///
/// Rules see the board's round state, never the board itself.
pub trait BetRule: Send + Sync {
    /// Whether `bet` may be placed in the current round state.
    fn is_valid(&self, round: &RoundState, bet: &Bet) -> bool;

    /// Full return for `bet` once the round is over, principal included.
    /// 0 for a losing bet.
    ///
    /// Fails with `Error::IllegalState` if the round is not over.
    fn payout(&self, round: &RoundState, bet: &Bet) -> Result<Amount>;
}

/// Registry of bet rules.
///
/// ## Example
///
/// ```
/// use craps_sim::bets::{BetKind, BetRegistry};
///
/// let registry = BetRegistry::standard();
/// assert!(registry.contains(&BetKind::PASS));
/// assert!(registry.contains(&BetKind::PASS_ODDS));
/// assert!(!registry.contains(&BetKind::custom("field")));
/// ```
#[derive(Default)]
pub struct BetRegistry {
    rules: FxHashMap<BetKind, Box<dyn BetRule>>,
}

impl BetRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the pass line and pass odds rules.
    #[must_use]
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register(BetKind::PASS, PassLine);
        registry.register(BetKind::PASS_ODDS, PassOdds);
        registry
    }

    /// Register a rule for a bet kind.
    ///
    /// Panics if the kind is already registered.
    pub fn register(&mut self, kind: BetKind, rule: impl BetRule + 'static) {
        if self.rules.contains_key(&kind) {
            panic!("Bet kind '{}' already registered", kind);
        }
        self.rules.insert(kind, Box::new(rule));
    }

    /// Register a rule, builder style.
    #[must_use]
    pub fn with_rule(mut self, kind: BetKind, rule: impl BetRule + 'static) -> Self {
        self.register(kind, rule);
        self
    }

    /// Get the rule for a kind.
    #[must_use]
    pub fn get(&self, kind: &BetKind) -> Option<&dyn BetRule> {
        self.rules.get(kind).map(|rule| rule.as_ref())
    }

    /// Get the rule for a kind, failing with `Error::UnimplementedBet`.
    pub fn rule(&self, kind: &BetKind) -> Result<&dyn BetRule> {
        self.get(kind).ok_or_else(|| Error::UnimplementedBet(kind.clone()))
    }

    #[must_use]
    pub fn contains(&self, kind: &BetKind) -> bool {
        self.rules.contains_key(kind)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterate over registered kinds.
    pub fn kinds(&self) -> impl Iterator<Item = &BetKind> {
        self.rules.keys()
    }
}

impl std::fmt::Debug for BetRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.rules.keys()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Any seven wins; only valid on the come-out.
    struct AnySeven;

    impl BetRule for AnySeven {
        fn is_valid(&self, round: &RoundState, _bet: &Bet) -> bool {
            round.is_come_out()
        }

        fn payout(&self, round: &RoundState, bet: &Bet) -> Result<Amount> {
            Ok(if round.last_roll == 7 { 5 * bet.amount() } else { 0 })
        }
    }

    #[test]
    fn test_standard_registry() {
        let registry = BetRegistry::standard();
        assert_eq!(registry.len(), 2);
        assert!(registry.get(&BetKind::PASS).is_some());
        assert!(registry.get(&BetKind::PASS_ODDS).is_some());
    }

    #[test]
    fn test_unregistered_kind() {
        let registry = BetRegistry::standard();
        let field = BetKind::custom("field");
        assert!(registry.get(&field).is_none());
        assert!(matches!(registry.rule(&field), Err(Error::UnimplementedBet(k)) if k == field));
    }

    #[test]
    fn test_extension() {
        let registry = BetRegistry::standard().with_rule(BetKind::custom("any_seven"), AnySeven);
        assert_eq!(registry.len(), 3);

        let rule = registry.rule(&BetKind::custom("any_seven")).unwrap();
        let bet = Bet::new(BetKind::custom("any_seven"), 5).unwrap();
        let round = RoundState {
            round_is_over: true,
            last_roll: 7,
            ..RoundState::default()
        };
        assert_eq!(rule.payout(&round, &bet), Ok(25));
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn test_duplicate_kind_panics() {
        let mut registry = BetRegistry::standard();
        registry.register(BetKind::PASS, PassLine);
    }

    #[test]
    fn test_kinds() {
        let registry = BetRegistry::standard();
        let mut kinds: Vec<_> = registry.kinds().map(BetKind::as_str).collect();
        kinds.sort_unstable();
        assert_eq!(kinds, vec!["pass", "pass_odds"]);
    }

    #[test]
    fn test_empty() {
        let registry = BetRegistry::new();
        assert!(registry.is_empty());
    }
}
