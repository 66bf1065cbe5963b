//! Snapshot of a market's reserve pair.

use core::fmt;

use rust_decimal::Decimal;

use super::{Amount, BuyQuote, Decimals, Price, SellQuote};
use crate::config::CurveConfig;
use crate::error::CurveError;
use crate::math::CheckedArithmetic;

/// Read-only snapshot of one video's bonding-curve market.
///
/// The authoritative state lives on the ledger; a `MarketState` is a
/// copy taken at one moment.  Every trade changes both reserves
/// reciprocally, preserving `base_reserve × share_reserve = k` up to
/// rounding, so a snapshot must be refreshed after each submitted trade.
///
/// # Invariants (checked at construction)
///
/// - `total_issuance > 0`
/// - `share_reserve ≤ total_issuance`
/// - both reserves are non-negative ([`Amount`] guarantees this)
///
/// # Example
///
/// ```rust
/// use blipp_curve::config::CurveConfig;
/// use blipp_curve::domain::{Amount, MarketState};
///
/// let state = MarketState::genesis(&CurveConfig::default());
/// assert_eq!(state.base_reserve(), Amount::from_units(30));
/// assert_eq!(state.share_reserve(), Amount::from_units(1_000_000_000));
/// assert!(state.total_sold().is_zero());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarketState {
    base_reserve: Amount,
    share_reserve: Amount,
    total_issuance: Amount,
    graduated: bool,
}

impl MarketState {
    /// Creates a validated snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidMarketState`] if `total_issuance` is
    /// zero or `share_reserve` exceeds it.
    pub fn new(
        base_reserve: Amount,
        share_reserve: Amount,
        total_issuance: Amount,
        graduated: bool,
    ) -> Result<Self, CurveError> {
        if total_issuance.is_zero() {
            return Err(CurveError::InvalidMarketState(
                "total issuance must be positive",
            ));
        }
        if share_reserve > total_issuance {
            return Err(CurveError::InvalidMarketState(
                "share reserve exceeds total issuance",
            ));
        }
        Ok(Self {
            base_reserve,
            share_reserve,
            total_issuance,
            graduated,
        })
    }

    /// The state of a freshly initialised market: only the virtual base
    /// offset on one side and the whole issuance on the other.
    pub fn genesis(config: &CurveConfig) -> Self {
        Self {
            base_reserve: config.virtual_base_offset(),
            share_reserve: config.total_issuance(),
            total_issuance: config.total_issuance(),
            graduated: false,
        }
    }

    /// Builds a snapshot from the ledger's raw integer view (octas and
    /// share units at `decimals` precision).
    ///
    /// # Errors
    ///
    /// - [`CurveError::Overflow`] if a raw value exceeds the decimal range.
    /// - Any error from [`MarketState::new`].
    pub fn from_raw_units(
        base_units: u128,
        share_units: u128,
        total_issuance: Amount,
        graduated: bool,
        decimals: Decimals,
    ) -> Result<Self, CurveError> {
        let base = Amount::from_raw_units(base_units, decimals)?;
        let shares = Amount::from_raw_units(share_units, decimals)?;
        Self::new(base, shares, total_issuance, graduated)
    }

    /// Settlement coin held by the market, virtual offset included.
    pub const fn base_reserve(&self) -> Amount {
        self.base_reserve
    }

    /// Shares not yet sold.
    pub const fn share_reserve(&self) -> Amount {
        self.share_reserve
    }

    /// Fixed total share supply.
    pub const fn total_issuance(&self) -> Amount {
        self.total_issuance
    }

    /// Whether the ledger has marked this market as graduated.
    #[must_use]
    pub const fn graduated(&self) -> bool {
        self.graduated
    }

    /// Shares in circulation: `total_issuance − share_reserve`.
    pub fn total_sold(&self) -> Amount {
        // share_reserve <= total_issuance is a construction invariant.
        self.total_issuance
            .checked_sub(&self.share_reserve)
            .unwrap_or(Amount::ZERO)
    }

    /// The curve constant `k = base_reserve × share_reserve`.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::Overflow`] if the product is not representable.
    pub fn invariant(&self) -> Result<Decimal, CurveError> {
        self.base_reserve
            .safe_mul(&self.share_reserve)
            .map(|k| k.get())
    }

    /// Spot price `base_reserve / share_reserve`.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::DegenerateMarket`] if the share reserve is zero.
    pub fn spot_price(&self) -> Result<Price, CurveError> {
        if self.share_reserve.is_zero() {
            return Err(CurveError::DegenerateMarket);
        }
        Price::from_amounts(self.base_reserve, self.share_reserve)
    }

    /// Returns a copy with the graduation flag set as given.
    pub const fn with_graduated(self, graduated: bool) -> Self {
        Self { graduated, ..self }
    }

    /// The hypothetical snapshot after executing `quote` against `self`.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidMarketState`] if the quote was computed
    /// against a different snapshot.
    pub fn apply_buy(&self, quote: &BuyQuote) -> Result<Self, CurveError> {
        let pre_base = quote.new_base_reserve().checked_sub(&quote.base_amount_in());
        let pre_share = quote.new_share_reserve().checked_add(&quote.shares_out());
        if pre_base != Some(self.base_reserve) || pre_share != Some(self.share_reserve) {
            return Err(CurveError::InvalidMarketState(
                "buy quote was computed against a different snapshot",
            ));
        }
        Self::new(
            quote.new_base_reserve(),
            quote.new_share_reserve(),
            self.total_issuance,
            self.graduated,
        )
    }

    /// The hypothetical snapshot after executing a sell `quote` against `self`.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidMarketState`] if the quote was computed
    /// against a different snapshot.
    pub fn apply_sell(&self, quote: &SellQuote) -> Result<Self, CurveError> {
        let pre_base = quote.new_base_reserve().checked_add(&quote.proceeds_out());
        let pre_share = quote.new_share_reserve().checked_sub(&quote.shares_in());
        if pre_base != Some(self.base_reserve) || pre_share != Some(self.share_reserve) {
            return Err(CurveError::InvalidMarketState(
                "sell quote was computed against a different snapshot",
            ));
        }
        Self::new(
            quote.new_base_reserve(),
            quote.new_share_reserve(),
            self.total_issuance,
            self.graduated,
        )
    }
}

impl fmt::Display for MarketState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MarketState(base={}, shares={}/{}, graduated={})",
            self.base_reserve, self.share_reserve, self.total_issuance, self.graduated
        )
    }
}
