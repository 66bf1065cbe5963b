//! Non-negative decimal quantity with checked arithmetic.

use core::fmt;

use rust_decimal::Decimal;

use super::{Decimals, Rounding};
use crate::error::CurveError;
use crate::math::div_round;

/// A human-readable quantity of the settlement coin or of market shares.
///
/// `Amount` wraps a [`Decimal`] that is never negative.  Raw on-chain
/// integers (octas, 8-decimal share units) are converted with
/// [`from_raw_units`](Self::from_raw_units).
///
/// Arithmetic methods are checked: they return `None` on overflow,
/// on a negative result, or on division by zero.
///
/// # Examples
///
/// ```
/// use blipp_curve::domain::Amount;
/// use blipp_curve::dec;
///
/// let a = Amount::new(dec!(1.5)).expect("non-negative");
/// let b = Amount::new(dec!(2)).expect("non-negative");
/// assert_eq!(a.checked_add(&b).map(|v| v.get()), Some(dec!(3.5)));
/// assert_eq!(a.checked_sub(&b), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Decimal", into = "Decimal"))]
#[must_use]
pub struct Amount(Decimal);

impl Amount {
    /// Zero amount.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Creates a new `Amount`.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidAmount`] if `value` is negative.
    pub fn new(value: Decimal) -> Result<Self, CurveError> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(CurveError::InvalidAmount("amount must not be negative"));
        }
        Ok(Self(value.normalize()))
    }

    /// Creates an amount from a whole number of units.
    pub fn from_units(value: u64) -> Self {
        Self(Decimal::from(value))
    }

    /// Converts a raw on-chain integer into an amount.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::Overflow`] if `raw` exceeds the decimal range.
    pub fn from_raw_units(raw: u128, decimals: Decimals) -> Result<Self, CurveError> {
        decimals.from_raw(raw).map(|v| Self(v.normalize()))
    }

    /// Converts this amount into raw on-chain integer units, truncating
    /// precision beyond `decimals`.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::Overflow`] if the raw value does not fit in `u128`.
    pub fn to_raw_units(&self, decimals: Decimals) -> Result<u128, CurveError> {
        decimals.to_raw(self.0)
    }

    /// Returns the underlying decimal.
    #[must_use]
    pub const fn get(&self) -> Decimal {
        self.0
    }

    /// Returns `true` if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checked addition. Returns `None` on overflow.
    #[must_use]
    pub fn checked_add(&self, other: &Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Checked subtraction. Returns `None` if the result would be negative.
    #[must_use]
    pub fn checked_sub(&self, other: &Self) -> Option<Self> {
        if other.0 > self.0 {
            return None;
        }
        self.0.checked_sub(other.0).map(Self)
    }

    /// Checked multiplication. Returns `None` on overflow.
    #[must_use]
    pub fn checked_mul(&self, other: &Self) -> Option<Self> {
        self.0.checked_mul(other.0).map(Self)
    }

    /// Checked division rounded at `scale` decimal places in the given
    /// direction.
    ///
    /// Returns `None` if `divisor` is zero or the quotient overflows.
    #[must_use]
    pub fn checked_div(&self, divisor: &Self, rounding: Rounding, scale: u32) -> Option<Self> {
        div_round(self.0, divisor.0, rounding, scale).map(Self)
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = CurveError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(value: Amount) -> Self {
        value.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
