//! Checked arithmetic trait for domain wrapper types.
//!
//! The [`CheckedArithmetic`] trait turns the `Option`-returning checked
//! operations of [`Amount`] into [`Result`]s carrying a specific
//! [`CurveError`] so they compose with `?` inside the engine.
//!
//! # Examples
//!
//! ```
//! use blipp_curve::domain::Amount;
//! use blipp_curve::math::CheckedArithmetic;
//!
//! let a = Amount::from_units(100);
//! let b = Amount::from_units(200);
//! assert!(a.safe_add(&b).is_ok());
//! assert!(a.safe_sub(&b).is_err());
//! ```

use crate::domain::{Amount, Rounding};
use crate::error::CurveError;

/// Working scale (decimal places) for reserve divisions.
pub const QUOTE_SCALE: u32 = 18;

/// Fallible arithmetic for domain wrapper types.
///
/// # Contract
///
/// - **No panics**: all error conditions produce `Err`.
/// - **No saturation**: errors propagate instead.
pub trait CheckedArithmetic: Sized {
    /// Checked addition.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::Overflow`] if the result is not representable.
    fn safe_add(&self, other: &Self) -> Result<Self, CurveError>;

    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InsufficientLiquidity`] if the result would be
    /// negative.
    fn safe_sub(&self, other: &Self) -> Result<Self, CurveError>;

    /// Checked multiplication.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::Overflow`] if the result is not representable.
    fn safe_mul(&self, other: &Self) -> Result<Self, CurveError>;

    /// Checked division at [`QUOTE_SCALE`] with explicit [`Rounding`].
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::DegenerateMarket`] if `other` is zero and
    /// [`CurveError::Overflow`] if the quotient is not representable.
    fn safe_div(&self, other: &Self, rounding: Rounding) -> Result<Self, CurveError>;
}

impl CheckedArithmetic for Amount {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self, CurveError> {
        self.checked_add(other)
            .ok_or(CurveError::Overflow("amount addition overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self, CurveError> {
        self.checked_sub(other)
            .ok_or(CurveError::InsufficientLiquidity)
    }

    #[inline]
    fn safe_mul(&self, other: &Self) -> Result<Self, CurveError> {
        self.checked_mul(other)
            .ok_or(CurveError::Overflow("amount multiplication overflow"))
    }

    fn safe_div(&self, other: &Self, rounding: Rounding) -> Result<Self, CurveError> {
        if other.is_zero() {
            return Err(CurveError::DegenerateMarket);
        }
        self.checked_div(other, rounding, QUOTE_SCALE)
            .ok_or(CurveError::Overflow("amount division overflow"))
    }
}
