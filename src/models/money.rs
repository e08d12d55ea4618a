//! Monetary amounts in integer minor units

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// A non-negative USD amount held as whole cents.
///
/// Prices arrive from catalog feeds and admin forms as formatted strings
/// (`"$489"`, `"10.99"`); they are parsed exactly once at the boundary and
/// every computation afterwards is integer arithmetic. Formatting back to a
/// display string happens only through [`fmt::Display`].
#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Zero dollars.
    pub const ZERO: Money = Money(0);

    /// Creates an amount from whole cents.
    pub fn from_minor(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates an amount from whole dollars.
    pub fn from_major(dollars: i64) -> Self {
        Money(dollars * 100)
    }

    /// Parses a formatted amount such as `"$489"`, `"489"` or `"10.99"`.
    ///
    /// A leading currency symbol is optional. Negative amounts, more than
    /// two decimal places and anything non-numeric are rejected.
    pub fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        let digits = trimmed.strip_prefix('$').unwrap_or(trimmed);
        if digits.is_empty() || digits.starts_with('-') || digits.starts_with('+') {
            return None;
        }

        let (whole, frac) = match digits.split_once('.') {
            Some((w, f)) => (w, f),
            None => (digits, ""),
        };
        if whole.is_empty() || frac.len() > 2 {
            return None;
        }

        let dollars: i64 = whole.parse().ok()?;
        let cents: i64 = if frac.is_empty() {
            0
        } else {
            // "5" means 50 cents, "05" means 5.
            let parsed: i64 = frac.parse().ok()?;
            if frac.len() == 1 {
                parsed * 10
            } else {
                parsed
            }
        };

        Some(Money(dollars.checked_mul(100)?.checked_add(cents)?))
    }

    /// The amount in whole cents.
    pub fn minor_units(&self) -> i64 {
        self.0
    }

    /// Returns true for a zero amount.
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Multiplies the amount by a unit count.
    pub fn times(&self, quantity: u32) -> Money {
        Money(self.0 * i64::from(quantity))
    }

    /// Applies a rate given in basis points, rounding half up at the cent.
    pub fn percent_bps(&self, rate_bps: u32) -> Money {
        let numerator = self.0 * i64::from(rate_bps);
        Money((numerator + 5_000) / 10_000)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 += rhs.0;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}.{:02}", self.0 / 100, (self.0 % 100).abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_symbol_and_plain() {
        assert_eq!(Money::parse("$489"), Some(Money::from_major(489)));
        assert_eq!(Money::parse("489"), Some(Money::from_major(489)));
        assert_eq!(Money::parse("10.99"), Some(Money::from_minor(1099)));
        assert_eq!(Money::parse("$0.05"), Some(Money::from_minor(5)));
        assert_eq!(Money::parse("  $25.5 "), Some(Money::from_minor(2550)));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert_eq!(Money::parse(""), None);
        assert_eq!(Money::parse("$"), None);
        assert_eq!(Money::parse("-5"), None);
        assert_eq!(Money::parse("$-5"), None);
        assert_eq!(Money::parse("1.234"), None);
        assert_eq!(Money::parse("abc"), None);
        assert_eq!(Money::parse(".99"), None);
    }

    #[test]
    fn test_arithmetic() {
        let price = Money::from_major(100);
        assert_eq!(price.times(3), Money::from_major(300));
        assert_eq!(price + Money::from_minor(50), Money::from_minor(10050));

        let lines = vec![Money::from_major(489), Money::from_minor(1099)];
        assert_eq!(
            lines.into_iter().sum::<Money>(),
            Money::from_minor(48900 + 1099)
        );
    }

    #[test]
    fn test_percent_rounds_half_up() {
        // 8% of $500.00 is exactly $40.00
        assert_eq!(Money::from_major(500).percent_bps(800), Money::from_major(40));
        // 8% of $0.06 is 0.48 cents, rounds to 0
        assert_eq!(Money::from_minor(6).percent_bps(800), Money::ZERO);
        // 8% of $0.07 is 0.56 cents, rounds to 1
        assert_eq!(Money::from_minor(7).percent_bps(800), Money::from_minor(1));
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_major(489).to_string(), "$489.00");
        assert_eq!(Money::from_minor(1099).to_string(), "$10.99");
        assert_eq!(Money::from_minor(5).to_string(), "$0.05");
    }

    #[test]
    fn test_serde_transparent() {
        let json = serde_json::to_string(&Money::from_minor(48900)).unwrap();
        assert_eq!(json, "48900");
        let back: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Money::from_minor(48900));
    }
}
