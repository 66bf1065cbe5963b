//! Settlement-coin price of one share.

use core::fmt;

use rust_decimal::Decimal;

use super::Amount;
use crate::error::CurveError;

/// Price of one share expressed in the settlement coin (`base / shares`).
///
/// Wraps a non-negative [`Decimal`].
///
/// # Examples
///
/// ```
/// use blipp_curve::dec;
/// use blipp_curve::domain::Price;
///
/// let price = Price::new(dec!(0.00000003));
/// assert!(price.is_ok());
/// assert!(Price::new(dec!(-1)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Decimal", into = "Decimal"))]
pub struct Price(Decimal);

impl Price {
    /// Price of zero.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Creates a new `Price`.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidAmount`] if `value` is negative.
    pub fn new(value: Decimal) -> Result<Self, CurveError> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(CurveError::InvalidAmount("price must not be negative"));
        }
        Ok(Self(value))
    }

    /// Returns the underlying decimal.
    #[must_use]
    pub const fn get(&self) -> Decimal {
        self.0
    }

    /// Computes `base / shares` at full decimal precision.
    ///
    /// # Errors
    ///
    /// - [`CurveError::DegenerateQuote`] if `shares` is zero.
    /// - [`CurveError::Overflow`] if the ratio is not representable.
    pub fn from_amounts(base: Amount, shares: Amount) -> Result<Self, CurveError> {
        if shares.is_zero() {
            return Err(CurveError::DegenerateQuote);
        }
        base.get()
            .checked_div(shares.get())
            .map(Self)
            .ok_or(CurveError::Overflow("price ratio overflow"))
    }

    /// Values `shares` at this price.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::Overflow`] if the product is not representable.
    pub fn value_of(&self, shares: Amount) -> Result<Amount, CurveError> {
        self.0
            .checked_mul(shares.get())
            .ok_or(CurveError::Overflow("price valuation overflow"))
            .and_then(Amount::new)
    }

    /// Percentage deviation of `self` from `reference`:
    /// `(self - reference) / reference * 100`.
    ///
    /// # Errors
    ///
    /// - [`CurveError::DegenerateMarket`] if `reference` is zero.
    /// - [`CurveError::Overflow`] if the ratio is not representable.
    pub fn deviation_pct(&self, reference: Price) -> Result<Decimal, CurveError> {
        if reference.0.is_zero() {
            return Err(CurveError::DegenerateMarket);
        }
        (self.0 - reference.0)
            .checked_div(reference.0)
            .and_then(|r| r.checked_mul(Decimal::ONE_HUNDRED))
            .ok_or(CurveError::Overflow("price deviation overflow"))
    }
}

impl TryFrom<Decimal> for Price {
    type Error = CurveError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Price> for Decimal {
    fn from(value: Price) -> Self {
        value.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
