//! Basis-point representation of the platform fee rate.

use core::fmt;

use rust_decimal::Decimal;

use super::Amount;
use crate::error::CurveError;

/// Maximum value that represents 100%.
const MAX_BPS: u32 = 10_000;

/// A percentage expressed in basis points (1 bp = 0.01%, 10 000 bp = 100%).
///
/// # Examples
///
/// ```
/// use blipp_curve::domain::BasisPoints;
///
/// let bp = BasisPoints::new(100);
/// assert_eq!(bp.get(), 100);
/// assert!(bp.is_valid_percent());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BasisPoints(u32);

impl BasisPoints {
    /// Zero basis points (0%).
    pub const ZERO: Self = Self(0);

    /// 100% expressed in basis points.
    pub const MAX_PERCENT: Self = Self(MAX_BPS);

    /// Creates a new `BasisPoints` from a raw `u32` value.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the underlying `u32` value.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Returns `true` if the value is in the valid percentage range (`0..=10_000`).
    #[must_use]
    pub const fn is_valid_percent(&self) -> bool {
        self.0 <= MAX_BPS
    }

    /// The rate as a decimal fraction (100 bp → `0.01`).
    #[must_use]
    pub fn as_fraction(&self) -> Decimal {
        Decimal::new(i64::from(self.0), 4)
    }

    /// Computes `amount * self / 10_000` exactly.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::Overflow`] if the product is not representable.
    pub fn apply(&self, amount: Amount) -> Result<Amount, CurveError> {
        amount
            .get()
            .checked_mul(self.as_fraction())
            .ok_or(CurveError::Overflow("basis points apply overflow"))
            .and_then(Amount::new)
    }
}

impl fmt::Display for BasisPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}bp", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn constants() {
        assert_eq!(BasisPoints::ZERO.get(), 0);
        assert_eq!(BasisPoints::MAX_PERCENT.get(), 10_000);
        assert_eq!(BasisPoints::default(), BasisPoints::ZERO);
    }

    #[test]
    fn valid_percent_range() {
        assert!(BasisPoints::MAX_PERCENT.is_valid_percent());
        assert!(!BasisPoints::new(10_001).is_valid_percent());
    }

    #[test]
    fn one_percent_fraction() {
        assert_eq!(BasisPoints::new(100).as_fraction(), dec!(0.01));
    }

    #[test]
    fn apply_one_percent() {
        let Ok(fee) = BasisPoints::new(100).apply(Amount::from_units(25)) else {
            panic!("expected Ok");
        };
        assert_eq!(fee.get(), dec!(0.25));
    }

    #[test]
    fn apply_zero_rate() {
        assert_eq!(
            BasisPoints::ZERO.apply(Amount::from_units(1_000)),
            Ok(Amount::ZERO)
        );
    }

    #[test]
    fn display() {
        assert_eq!(BasisPoints::new(100).to_string(), "100bp");
    }
}
