use std::fmt::{self, Display, Formatter};

use derive_more::{Add, Sub, Sum};

/// An exact amount of money, stored as a whole number of cents.
///
/// Sums of balances never lose precision, unlike with floating point values.
///
/// # Examples
/// ```
/// # use textbook::streams::Balance;
/// let total: Balance = [Balance::from_cents(1050), Balance::from_units(2)].into_iter().sum();
/// assert_eq!(total.to_string(), "12.50");
/// assert_eq!((Balance::ZERO - total).to_string(), "-12.50");
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Add, Sub, Sum)]
pub struct Balance(i64);

impl Balance {
    pub const ZERO: Balance = Balance(0);

    pub const fn from_cents(cents: i64) -> Balance {
        Balance(cents)
    }

    /// Creates a Balance of a whole number of units (dollars, euros, etc.).
    pub const fn from_units(units: i64) -> Balance {
        Balance(units * 100)
    }

    pub const fn cents(self) -> i64 {
        self.0
    }
}

impl Display for Balance {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let cents = self.0.unsigned_abs();
        write!(f, "{sign}{}.{:02}", cents / 100, cents % 100)
    }
}
