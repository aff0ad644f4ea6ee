//! True odds for free-odds bets.

use crate::bets::Amount;
use crate::core::Point;
use crate::error::{Error, Result};

/// True odds `(numerator, denominator)` for a point: 2:1 on 4/10, 3:2 on
/// 5/9, 6:5 on 6/8. `None` when no point is on.
#[must_use]
pub fn true_odds(point: Point) -> Option<(Amount, Amount)> {
    match point.value() {
        4 | 10 => Some((2, 1)),
        5 | 9 => Some((3, 2)),
        6 | 8 => Some((6, 5)),
        _ => None,
    }
}

/// Whether `amount` is an odds stake the table can pay exactly on `point`:
/// a point is on and the stake is a multiple of the odds denominator.
#[must_use]
pub fn is_exact_odds_stake(amount: Amount, point: Point) -> bool {
    true_odds(point).is_some_and(|(_, den)| amount % den == 0)
}

/// Smallest stake of at least `min` that pays exactly on `point`.
///
/// `None` when no point is on or rounding up leaves the range of `Amount`.
#[must_use]
pub fn exact_odds_stake(min: Amount, point: Point) -> Option<Amount> {
    let (_, den) = true_odds(point)?;
    match min % den {
        0 => Some(min),
        rem => min.checked_add(den - rem),
    }
}

/// Full return on a winning odds bet: the stake plus winnings at true odds.
///
/// The stake must pay exactly (see `is_exact_odds_stake`); the board
/// refuses other stakes before they can win.
pub fn odds_return(amount: Amount, point: Point) -> Result<Amount> {
    let (num, den) =
        true_odds(point).ok_or(Error::IllegalState("odds need an established point"))?;
    if amount % den != 0 {
        return Err(Error::IllegalState("odds stake does not pay exactly"));
    }
    (amount / den)
        .checked_mul(num)
        .and_then(|winnings| winnings.checked_add(amount))
        .ok_or(Error::AmountOverflow("odds payout"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(value: u8) -> Point {
        Point::new(value).unwrap()
    }

    #[test]
    fn test_true_odds_table() {
        assert_eq!(true_odds(point(4)), Some((2, 1)));
        assert_eq!(true_odds(point(10)), Some((2, 1)));
        assert_eq!(true_odds(point(5)), Some((3, 2)));
        assert_eq!(true_odds(point(9)), Some((3, 2)));
        assert_eq!(true_odds(point(6)), Some((6, 5)));
        assert_eq!(true_odds(point(8)), Some((6, 5)));
        assert_eq!(true_odds(Point::OFF), None);
    }

    #[test]
    fn test_odds_return() {
        assert_eq!(odds_return(5, point(4)), Ok(15));
        assert_eq!(odds_return(6, point(5)), Ok(15));
        assert_eq!(odds_return(5, point(8)), Ok(11));
        assert_eq!(odds_return(10, point(6)), Ok(22));
        assert!(matches!(odds_return(5, Point::OFF), Err(Error::IllegalState(_))));
    }

    #[test]
    fn test_inexact_stake_never_paid() {
        // 3:2 on 5 would be 7.5
        assert!(!is_exact_odds_stake(5, point(9)));
        assert!(matches!(odds_return(5, point(9)), Err(Error::IllegalState(_))));
        assert!(!is_exact_odds_stake(7, point(6)));
        assert!(is_exact_odds_stake(7, point(4)));
        assert!(!is_exact_odds_stake(6, Point::OFF));
    }

    #[test]
    fn test_exact_stake_rounds_up() {
        assert_eq!(exact_odds_stake(5, point(4)), Some(5));
        assert_eq!(exact_odds_stake(5, point(5)), Some(6));
        assert_eq!(exact_odds_stake(6, point(6)), Some(10));
        assert_eq!(exact_odds_stake(7, point(8)), Some(10));
        assert_eq!(exact_odds_stake(7, point(9)), Some(8));
        assert_eq!(exact_odds_stake(5, Point::OFF), None);
        assert_eq!(exact_odds_stake(Amount::MAX, point(6)), None);
    }

    #[test]
    fn test_odds_return_overflow() {
        let huge = Amount::MAX - Amount::MAX % 5;
        assert_eq!(odds_return(huge, point(6)), Err(Error::AmountOverflow("odds payout")));
    }
}
