//! On-chain decimal places for raw integer units.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::error::CurveError;

/// Largest scale `rust_decimal` can represent.
const MAX_DECIMALS: u8 = 28;

/// Number of decimal places between a raw on-chain integer and its
/// human-readable value.
///
/// The settlement coin is denominated in octas (8 decimals) and share
/// balances use the same precision.
///
/// # Examples
///
/// ```
/// use blipp_curve::domain::Decimals;
///
/// let d = Decimals::new(8).expect("8 is valid");
/// assert_eq!(d.get(), 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Decimals(u8);

impl Default for Decimals {
    fn default() -> Self {
        Self::OCTAS
    }
}

impl Decimals {
    /// Zero decimal places.
    pub const ZERO: Self = Self(0);

    /// Octa precision (1 coin = 10^8 octas).
    pub const OCTAS: Self = Self(8);

    /// Creates a new `Decimals` value after validating the range.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidConfiguration`] if `value` exceeds 28.
    pub const fn new(value: u8) -> Result<Self, CurveError> {
        if value > MAX_DECIMALS {
            return Err(CurveError::InvalidConfiguration("decimals must be 0..=28"));
        }
        Ok(Self(value))
    }

    /// Returns the raw decimal count.
    #[must_use]
    pub const fn get(&self) -> u8 {
        self.0
    }

    /// Interprets a raw integer as a human-readable decimal.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::Overflow`] if `raw` exceeds the 96-bit
    /// decimal mantissa.
    pub fn from_raw(&self, raw: u128) -> Result<Decimal, CurveError> {
        let mantissa =
            i128::try_from(raw).map_err(|_| CurveError::Overflow("raw units exceed i128"))?;
        Decimal::try_from_i128_with_scale(mantissa, u32::from(self.0))
            .map_err(|_| CurveError::Overflow("raw units exceed decimal range"))
    }

    /// Converts a non-negative decimal into raw integer units, truncating
    /// any precision beyond this scale.
    ///
    /// # Errors
    ///
    /// - [`CurveError::InvalidAmount`] if `value` is negative.
    /// - [`CurveError::Overflow`] if the scaled value does not fit.
    pub fn to_raw(&self, value: Decimal) -> Result<u128, CurveError> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(CurveError::InvalidAmount("cannot convert a negative amount"));
        }
        let factor = Decimal::from_i128_with_scale(10i128.pow(u32::from(self.0)), 0);
        let scaled = value
            .checked_mul(factor)
            .ok_or(CurveError::Overflow("raw unit scaling overflow"))?
            .trunc();
        scaled
            .to_u128()
            .ok_or(CurveError::Overflow("raw units exceed u128"))
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn valid_octas() {
        let Ok(d) = Decimals::new(8) else {
            panic!("expected Ok");
        };
        assert_eq!(d, Decimals::OCTAS);
    }

    #[test]
    fn invalid_twenty_nine() {
        let Err(e) = Decimals::new(29) else {
            panic!("expected Err");
        };
        assert_eq!(e, CurveError::InvalidConfiguration("decimals must be 0..=28"));
    }

    #[test]
    fn default_is_octas() {
        assert_eq!(Decimals::default().get(), 8);
    }

    #[test]
    fn from_raw_octas() {
        let Ok(v) = Decimals::OCTAS.from_raw(3_000_000_000) else {
            panic!("expected Ok");
        };
        assert_eq!(v, dec!(30));
    }

    #[test]
    fn to_raw_truncates() {
        // 1.234567891 coins -> 123_456_789 octas, last digit dropped.
        assert_eq!(Decimals::OCTAS.to_raw(dec!(1.234567891)), Ok(123_456_789));
    }

    #[test]
    fn to_raw_rejects_negative() {
        assert!(matches!(
            Decimals::OCTAS.to_raw(dec!(-1)),
            Err(CurveError::InvalidAmount(_))
        ));
    }

    #[test]
    fn zero_decimals_is_identity() {
        assert_eq!(Decimals::ZERO.to_raw(dec!(42)), Ok(42));
        assert_eq!(Decimals::ZERO.from_raw(42), Ok(dec!(42)));
    }
}
