//! Money type for representing monetary values.
//!
//! Uses cents-based integer representation so that subtotals and discounts
//! never accumulate floating-point error.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    USD,
    EUR,
    GBP,
    JPY,
    CAD,
}

impl Currency {
    /// Get the currency code (e.g., "USD").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
            Currency::CAD => "CAD",
        }
    }

    /// Get the currency symbol (e.g., "$").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
            Currency::JPY => "\u{00a5}",
            Currency::CAD => "CA$",
        }
    }

    /// Get the number of decimal places for this currency.
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::JPY => 0,
            _ => 2,
        }
    }

    fn minor_units(&self) -> i64 {
        10_i64.pow(self.decimal_places())
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
///
/// Amounts are stored in the smallest unit of the currency (e.g., cents for USD).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in smallest currency unit (e.g., cents).
    pub amount_cents: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from cents.
    pub fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    /// Create a Money value from whole currency units (e.g. dollars).
    pub fn from_units(units: i64, currency: Currency) -> Self {
        Self::new(units.saturating_mul(currency.minor_units()), currency)
    }

    /// Create a Money value from a decimal amount.
    ///
    /// ```
    /// use shopco_commerce::money::{Money, Currency};
    /// let fee = Money::from_decimal(15.0, Currency::USD);
    /// assert_eq!(fee.amount_cents, 1500);
    /// ```
    pub fn from_decimal(amount: f64, currency: Currency) -> Self {
        let amount_cents = (amount * currency.minor_units() as f64).round() as i64;
        Self::new(amount_cents, currency)
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_cents == 0
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.amount_cents < 0
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        self.amount_cents as f64 / self.currency.minor_units() as f64
    }

    /// Format with all decimal places (e.g., "$495.00").
    pub fn display(&self) -> String {
        let places = self.currency.decimal_places() as usize;
        let sign = if self.is_negative() { "-" } else { "" };
        let abs = Money::new(self.amount_cents.saturating_abs(), self.currency);
        format!(
            "{}{}{:.places$}",
            sign,
            self.currency.symbol(),
            abs.to_decimal()
        )
    }

    /// Format whole amounts without decimals (e.g., "$120"), as on price tags.
    pub fn display_compact(&self) -> String {
        if self.amount_cents % self.currency.minor_units() == 0 {
            let sign = if self.is_negative() { "-" } else { "" };
            let units = (self.amount_cents / self.currency.minor_units()).saturating_abs();
            format!("{}{}{}", sign, self.currency.symbol(), units)
        } else {
            self.display()
        }
    }

    /// Try to add another Money value.
    ///
    /// Returns `None` if currencies differ or the sum overflows.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        self.amount_cents
            .checked_add(other.amount_cents)
            .map(|amount| Money::new(amount, self.currency))
    }

    /// Try to subtract another Money value.
    pub fn try_subtract(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        self.amount_cents
            .checked_sub(other.amount_cents)
            .map(|amount| Money::new(amount, self.currency))
    }

    /// Try to multiply by a scalar.
    pub fn try_multiply(&self, factor: i64) -> Option<Money> {
        self.amount_cents
            .checked_mul(factor)
            .map(|amount| Money::new(amount, self.currency))
    }

    /// Calculate a whole-number percentage of this amount.
    ///
    /// Percentages above 100 are treated as 100. The result is rounded half
    /// away from zero to the nearest minor unit.
    pub fn percentage(&self, percent: u8) -> Money {
        let percent = i128::from(percent.min(100));
        let scaled = i128::from(self.amount_cents) * percent;
        let rounded = (scaled.abs() + 50) / 100 * scaled.signum();
        // |rounded| <= |amount_cents|, so it always fits.
        Money::new(rounded as i64, self.currency)
    }

    /// Sum an iterator of Money values, returning `None` on mismatch or overflow.
    pub fn try_sum<'a>(mut iter: impl Iterator<Item = &'a Money>, currency: Currency) -> Option<Money> {
        iter.try_fold(Money::zero(currency), |acc, m| acc.try_add(m))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_units() {
        let m = Money::from_units(120, Currency::USD);
        assert_eq!(m.amount_cents, 12000);

        let m = Money::from_units(120, Currency::JPY);
        assert_eq!(m.amount_cents, 120);
    }

    #[test]
    fn test_money_from_decimal() {
        let m = Money::from_decimal(49.99, Currency::USD);
        assert_eq!(m.amount_cents, 4999);
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::new(49500, Currency::USD).display(), "$495.00");
        assert_eq!(Money::new(-12000, Currency::USD).display(), "-$120.00");
        assert_eq!(Money::new(100, Currency::JPY).display(), "\u{00a5}100");
    }

    #[test]
    fn test_money_display_compact() {
        assert_eq!(Money::new(12000, Currency::USD).display_compact(), "$120");
        assert_eq!(Money::new(12050, Currency::USD).display_compact(), "$120.50");
    }

    #[test]
    fn test_money_checked_arithmetic() {
        let a = Money::new(1000, Currency::USD);
        let b = Money::new(300, Currency::USD);
        assert_eq!(a.try_add(&b).unwrap().amount_cents, 1300);
        assert_eq!(a.try_subtract(&b).unwrap().amount_cents, 700);
        assert_eq!(a.try_multiply(3).unwrap().amount_cents, 3000);

        let max = Money::new(i64::MAX, Currency::USD);
        assert!(max.try_add(&a).is_none());
        assert!(max.try_multiply(2).is_none());
    }

    #[test]
    fn test_money_currency_mismatch() {
        let usd = Money::new(1000, Currency::USD);
        let eur = Money::new(1000, Currency::EUR);
        assert!(usd.try_add(&eur).is_none());
        assert!(usd.try_subtract(&eur).is_none());
    }

    #[test]
    fn test_money_percentage() {
        let m = Money::new(60000, Currency::USD);
        assert_eq!(m.percentage(20).amount_cents, 12000);

        // 20% of $0.33 = 6.6 cents, rounds to 7
        assert_eq!(Money::new(33, Currency::USD).percentage(20).amount_cents, 7);

        // Capped at the full amount
        assert_eq!(m.percentage(150).amount_cents, 60000);
    }

    #[test]
    fn test_money_try_sum() {
        let values = [
            Money::new(12000, Currency::USD),
            Money::new(48000, Currency::USD),
        ];
        let total = Money::try_sum(values.iter(), Currency::USD).unwrap();
        assert_eq!(total.amount_cents, 60000);
        assert!(Money::try_sum(values.iter(), Currency::EUR).is_none());
    }
}
