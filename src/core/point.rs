//! Points and dice totals.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Totals that establish a point on the come-out roll.
pub const POINT_NUMBERS: [u8; 6] = [4, 5, 6, 8, 9, 10];

/// Come-out totals that end the round immediately.
pub const COME_OUT_DECIDERS: [u8; 5] = [2, 3, 7, 11, 12];

/// Smallest possible total of two dice.
pub const MIN_ROLL: u8 = 2;

/// Largest possible total of two dice.
pub const MAX_ROLL: u8 = 12;

/// The table point. `Point::OFF` (0) means the come-out phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Point(u8);

impl Point {
    /// No point established.
    pub const OFF: Point = Point(0);

    /// Create a point, failing unless `value` is 0, 4, 5, 6, 8, 9 or 10.
    pub fn new(value: u8) -> Result<Self> {
        if value == 0 || POINT_NUMBERS.contains(&value) {
            Ok(Self(value))
        } else {
            Err(Error::InvalidPoint(value))
        }
    }

    /// The point a come-out roll of `total` establishes, if any.
    #[must_use]
    pub fn from_come_out(total: u8) -> Option<Self> {
        is_point_number(total).then_some(Self(total))
    }

    /// Whether a point is established.
    #[must_use]
    pub const fn is_on(self) -> bool {
        self.0 != 0
    }

    /// Get the raw value (0 when off).
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Point {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Point> for u8 {
    fn from(point: Point) -> u8 {
        point.0
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Whether `total` establishes a point on the come-out roll.
#[must_use]
pub fn is_point_number(total: u8) -> bool {
    POINT_NUMBERS.contains(&total)
}

/// Whether `total` can come from two six-sided dice.
#[must_use]
pub fn is_valid_roll(total: u8) -> bool {
    (MIN_ROLL..=MAX_ROLL).contains(&total)
}
