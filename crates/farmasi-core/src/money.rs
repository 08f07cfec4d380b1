//! Rupiah amounts.
//!
//! Amounts are stored in sen (1/100 Rupiah) as integers. The backend sends
//! prices as JSON numbers, which are rounded to the nearest sen on the way
//! in; everything after that is integer arithmetic.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Sub};

/// Sen per Rupiah.
pub const SEN_PER_RUPIAH: i64 = 100;

/// A Rupiah amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Money {
    amount_sen: i64,
}

impl Money {
    /// Create from sen.
    pub const fn from_sen(amount_sen: i64) -> Self {
        Self { amount_sen }
    }

    /// Create from whole Rupiah.
    pub const fn from_rupiah(rupiah: i64) -> Self {
        Self::from_sen(rupiah.saturating_mul(SEN_PER_RUPIAH))
    }

    /// Create from a decimal Rupiah value, rounding half away from zero.
    ///
    /// ```
    /// use farmasi_core::money::Money;
    /// assert_eq!(Money::from_decimal(49.99).amount_sen(), 4999);
    /// ```
    pub fn from_decimal(amount: f64) -> Self {
        // `as` saturates and maps NaN to 0.
        Self::from_sen((amount * SEN_PER_RUPIAH as f64).round() as i64)
    }

    pub const fn zero() -> Self {
        Self::from_sen(0)
    }

    pub const fn amount_sen(&self) -> i64 {
        self.amount_sen
    }

    pub fn is_zero(&self) -> bool {
        self.amount_sen == 0
    }

    pub fn is_negative(&self) -> bool {
        self.amount_sen < 0
    }

    /// Convert to a decimal Rupiah value.
    pub fn to_decimal(&self) -> f64 {
        self.amount_sen as f64 / SEN_PER_RUPIAH as f64
    }

    /// Multiply by a quantity, saturating on overflow.
    pub fn times(&self, quantity: u32) -> Money {
        Money::from_sen(self.amount_sen.saturating_mul(i64::from(quantity)))
    }

    /// `percent`% of this amount, rounded half away from zero to the sen.
    pub fn percentage(&self, percent: u32) -> Money {
        let scaled = i128::from(self.amount_sen) * i128::from(percent);
        let quotient = scaled / 100;
        let remainder = scaled % 100;
        let rounded = if remainder.abs() * 2 >= 100 {
            quotient + scaled.signum()
        } else {
            quotient
        };
        Money::from_sen(rounded.clamp(i64::MIN as i128, i64::MAX as i128) as i64)
    }

    pub fn saturating_add(&self, other: Money) -> Money {
        Money::from_sen(self.amount_sen.saturating_add(other.amount_sen))
    }

    pub fn saturating_sub(&self, other: Money) -> Money {
        Money::from_sen(self.amount_sen.saturating_sub(other.amount_sen))
    }

    /// Format for display with the `id-ID` conventions, e.g. `Rp 18.000`.
    pub fn display(&self) -> String {
        format!("Rp {}", self.display_amount())
    }

    /// Format without the currency prefix, e.g. `1.234,5`.
    ///
    /// Groups thousands with `.`, uses `,` for the decimal separator and
    /// omits trailing zero sen.
    pub fn display_amount(&self) -> String {
        let magnitude = self.amount_sen.unsigned_abs();
        let rupiah = magnitude / SEN_PER_RUPIAH as u64;
        let sen = magnitude % SEN_PER_RUPIAH as u64;

        let mut out = String::new();
        if self.is_negative() {
            out.push('-');
        }
        out.push_str(&group_thousands(rupiah));

        if sen != 0 {
            if sen % 10 == 0 {
                out.push_str(&format!(",{}", sen / 10));
            } else {
                out.push_str(&format!(",{:02}", sen));
            }
        }
        out
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}

impl From<f64> for Money {
    fn from(amount: f64) -> Self {
        Money::from_decimal(amount)
    }
}

impl From<Money> for f64 {
    fn from(money: Money) -> Self {
        money.to_decimal()
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        self.saturating_add(other)
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        self.saturating_sub(other)
    }
}

impl Mul<u32> for Money {
    type Output = Money;

    fn mul(self, quantity: u32) -> Money {
        self.times(quantity)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_rupiah() {
        let m = Money::from_rupiah(10_000);
        assert_eq!(m.amount_sen(), 1_000_000);
        assert!((m.to_decimal() - 10_000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_money_from_decimal_rounds_half_away_from_zero() {
        assert_eq!(Money::from_decimal(0.005).amount_sen(), 1);
        assert_eq!(Money::from_decimal(-0.005).amount_sen(), -1);
        assert_eq!(Money::from_decimal(49.994).amount_sen(), 4999);
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::from_rupiah(18_000).display(), "Rp 18.000");
        assert_eq!(Money::from_rupiah(0).display(), "Rp 0");
        assert_eq!(Money::from_rupiah(1_250_000).display(), "Rp 1.250.000");
        assert_eq!(Money::from_sen(123_450).display(), "Rp 1.234,5");
        assert_eq!(Money::from_sen(1_205).display(), "Rp 12,05");
        assert_eq!(Money::from_rupiah(-500).display(), "Rp -500");
    }

    #[test]
    fn test_money_percentage() {
        let m = Money::from_rupiah(20_000);
        assert_eq!(m.percentage(10), Money::from_rupiah(2_000));

        // 0.15 Rp * 50% = 0.075 Rp -> 7.5 sen -> 8 sen
        let m = Money::from_sen(15);
        assert_eq!(m.percentage(50).amount_sen(), 8);

        let m = Money::from_sen(-15);
        assert_eq!(m.percentage(50).amount_sen(), -8);
    }

    #[test]
    fn test_money_arithmetic_saturates() {
        let max = Money::from_sen(i64::MAX);
        assert_eq!(max.times(2).amount_sen(), i64::MAX);
        assert_eq!((max + Money::from_sen(1)).amount_sen(), i64::MAX);
        assert_eq!(max.percentage(100), max);
    }

    #[test]
    fn test_money_operators() {
        let price = Money::from_rupiah(10_000);
        assert_eq!(price * 2, Money::from_rupiah(20_000));
        assert_eq!(price - Money::from_rupiah(1_000), Money::from_rupiah(9_000));
    }

    #[test]
    fn test_money_serde_as_number() {
        let m: Money = serde_json::from_str("10000").unwrap();
        assert_eq!(m, Money::from_rupiah(10_000));

        let m: Money = serde_json::from_str("2500.5").unwrap();
        assert_eq!(m.amount_sen(), 250_050);

        assert_eq!(serde_json::to_string(&Money::from_sen(250_050)).unwrap(), "2500.5");
    }
}
