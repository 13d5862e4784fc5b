//! Money type with decimal precision.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! This type wraps `rust_decimal::Decimal` so totals accumulate without drift.

use std::iter::Sum;
use std::ops::{Add, AddAssign};
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A non-float monetary amount in the user's currency.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Zero.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Number of decimal places kept for stored and displayed amounts.
    pub const SCALE: u32 = 2;

    /// Wraps a decimal amount as is.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Creates an amount from minor units (cents).
    #[must_use]
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, Self::SCALE))
    }

    /// Returns the underlying decimal.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns true if the amount is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Returns true if the amount carries significant digits below one cent.
    #[must_use]
    pub fn scale_exceeds_cents(&self) -> bool {
        self.0.normalize().scale() > Self::SCALE
    }

    /// Rounds to whole cents, halves away from zero.
    #[must_use]
    pub fn rounded(&self) -> Self {
        Self(
            self.0
                .round_dp_with_strategy(Self::SCALE, RoundingStrategy::MidpointAwayFromZero),
        )
    }

    /// Rounds to whole cents and fixes the scale at two decimal places.
    #[must_use]
    pub fn to_cents_scale(&self) -> Self {
        let mut amount = self.rounded().0;
        amount.rescale(Self::SCALE);
        Self(amount)
    }

    /// Divides the amount evenly across `days` days without rounding.
    ///
    /// A zero divisor yields zero.
    #[must_use]
    pub fn per_day(&self, days: u32) -> Decimal {
        if days == 0 {
            return Decimal::ZERO;
        }
        self.0 / Decimal::from(days)
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl From<Money> for Decimal {
    fn from(money: Money) -> Self {
        money.0
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Error returned when text is not a plain decimal amount.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("not a plain decimal amount: {0}")]
pub struct ParseMoneyError(pub String);

/// Only an optional minus sign, digits and at most one decimal point.
fn is_plain_decimal(s: &str) -> bool {
    let unsigned = s.strip_prefix('-').unwrap_or(s);
    let (whole, fraction) = match unsigned.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (unsigned, None),
    };

    let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
    all_digits(whole) && fraction.is_none_or(all_digits)
}

impl FromStr for Money {
    type Err = ParseMoneyError;

    /// Parses plain decimal text such as `12.50`.
    ///
    /// Digit separators, exponents and signs other than a leading minus are
    /// rejected even though `Decimal` itself would accept some of them.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if !is_plain_decimal(trimmed) {
            return Err(ParseMoneyError(s.to_string()));
        }
        Decimal::from_str(trimmed)
            .map(Self)
            .map_err(|_| ParseMoneyError(s.to_string()))
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_cents_scale().0)
    }
}
