//! Explicit rounding direction for decimal division.

/// Rounding direction for divisions that feed reserves or payouts.
///
/// Every reserve-producing division in the engine names its direction so
/// that rounding can never hand value to the trader.
///
/// # Examples
///
/// ```
/// use blipp_curve::domain::Rounding;
///
/// let r = Rounding::Up;
/// assert!(r.is_up());
/// assert!(!r.is_down());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rounding {
    /// Round towards positive infinity (ceiling).
    Up,
    /// Round towards zero (floor for non-negative values).
    Down,
}

impl Rounding {
    /// Returns `true` if this is [`Rounding::Up`].
    #[must_use]
    pub const fn is_up(&self) -> bool {
        matches!(self, Self::Up)
    }

    /// Returns `true` if this is [`Rounding::Down`].
    #[must_use]
    pub const fn is_down(&self) -> bool {
        matches!(self, Self::Down)
    }
}
