//! Stateless pricing engine bound to one deployment's constants.
//!
//! [`BondingCurveEngine`] owns a validated [`CurveConfig`] and forwards
//! every call to the free functions in [`pricing`](super::pricing) and
//! [`synthetic`](super::synthetic), filling in the configured fee rate,
//! graduation parameters and chart resolution.

use rust_decimal::Decimal;

use super::{pricing, synthetic, SyntheticCurve};
use crate::config::CurveConfig;
use crate::domain::{
    Amount, BuyQuote, ChartPoint, MarketPhase, MarketState, Price, SellQuote, TradeHistoryPoint,
};
use crate::error::CurveError;
use crate::traits::FromConfig;

/// Quote engine for constant-product attention markets.
///
/// The engine holds no market state; every method takes a snapshot and
/// returns a fresh value, so one engine can serve any number of markets
/// from any number of threads.
///
/// # Example
///
/// ```rust
/// use blipp_curve::curve::BondingCurveEngine;
/// use blipp_curve::domain::Amount;
/// use blipp_curve::dec;
///
/// let engine = BondingCurveEngine::default();
/// let state = engine.genesis();
///
/// let quote = engine.quote_buy(&state, Amount::from_units(1)).expect("quote");
/// assert_eq!(quote.shares_out().get().round_dp(2), dec!(32258064.52));
/// assert_eq!(quote.fee_amount().get(), dec!(0.01));
///
/// let next = state.apply_buy(&quote).expect("same snapshot");
/// assert!(engine.current_price(&next).expect("price") > engine.current_price(&state).expect("price"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BondingCurveEngine {
    config: CurveConfig,
}

impl BondingCurveEngine {
    /// Creates an engine after validating `config`.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidConfiguration`] if `config` is
    /// inconsistent.
    pub fn new(config: CurveConfig) -> Result<Self, CurveError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The deployment constants this engine prices with.
    #[must_use]
    pub const fn config(&self) -> &CurveConfig {
        &self.config
    }

    /// Snapshot of a freshly initialised market.
    pub fn genesis(&self) -> MarketState {
        MarketState::genesis(&self.config)
    }

    /// Snapshot from raw on-chain reserve units at the configured
    /// [`asset_decimals`](CurveConfig::asset_decimals).
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::Overflow`] if a raw value does not fit a
    /// decimal, or [`CurveError::InvalidMarketState`] if the reserves are
    /// inconsistent with the configured issuance.
    pub fn state_from_raw_units(
        &self,
        base_units: u128,
        share_units: u128,
        graduated: bool,
    ) -> Result<MarketState, CurveError> {
        MarketState::from_raw_units(
            base_units,
            share_units,
            self.config.total_issuance(),
            graduated,
            self.config.asset_decimals(),
        )
    }

    /// Quotes a buy of `base_amount_in` coin.
    ///
    /// # Errors
    ///
    /// See [`pricing::quote_buy`].
    pub fn quote_buy(
        &self,
        state: &MarketState,
        base_amount_in: Amount,
    ) -> Result<BuyQuote, CurveError> {
        pricing::quote_buy(state, base_amount_in, self.config.fee())
    }

    /// Quotes a sell of `shares_in` shares.
    ///
    /// # Errors
    ///
    /// See [`pricing::quote_sell`].
    pub fn quote_sell(&self, state: &MarketState, shares_in: Amount) -> Result<SellQuote, CurveError> {
        pricing::quote_sell(state, shares_in, self.config.fee())
    }

    /// Spot price of the market.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::DegenerateMarket`] if the share reserve is zero.
    pub fn current_price(&self, state: &MarketState) -> Result<Price, CurveError> {
        pricing::current_price(state)
    }

    /// Market capitalisation at the spot price.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::DegenerateMarket`] if the share reserve is zero.
    pub fn market_cap(&self, state: &MarketState) -> Result<Amount, CurveError> {
        pricing::market_cap(state)
    }

    /// Graduation progress in percent, uncapped.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::Overflow`] if the ratio is not representable.
    pub fn graduation_progress(&self, state: &MarketState) -> Result<Decimal, CurveError> {
        pricing::graduation_progress(
            state,
            self.config.virtual_base_offset(),
            self.config.graduation_threshold(),
        )
    }

    /// Returns `true` once the real base reserve reaches the graduation
    /// threshold.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::Overflow`] if the ratio is not representable.
    pub fn has_reached_graduation(&self, state: &MarketState) -> Result<bool, CurveError> {
        Ok(self.graduation_progress(state)? >= Decimal::ONE_HUNDRED)
    }

    /// Theoretical curve sampled at the configured resolution.
    ///
    /// # Errors
    ///
    /// See [`synthetic::synthetic_curve`].
    pub fn synthetic_curve(&self, state: &MarketState) -> Result<SyntheticCurve, CurveError> {
        synthetic::synthetic_curve(
            state,
            state.total_issuance(),
            self.config.chart_steps(),
            self.config.min_chart_range(),
        )
    }

    /// Points for the market's price chart.
    ///
    /// Real trades are plotted when `history` is non-empty; otherwise the
    /// theoretical curve is sampled.
    ///
    /// # Errors
    ///
    /// Only the synthetic fallback can fail; see
    /// [`synthetic::synthetic_curve`].
    pub fn chart_series(
        &self,
        state: &MarketState,
        history: &[TradeHistoryPoint],
    ) -> Result<Vec<ChartPoint>, CurveError> {
        if history.is_empty() {
            return Ok(self.synthetic_curve(state)?.map(ChartPoint::from).collect());
        }
        Ok(history.iter().copied().map(ChartPoint::from).collect())
    }

    /// Lifecycle phase of an optional ledger snapshot.
    #[must_use]
    pub fn phase(&self, state: Option<&MarketState>) -> MarketPhase {
        MarketPhase::of(state)
    }
}

impl FromConfig<CurveConfig> for BondingCurveEngine {
    fn from_config(config: &CurveConfig) -> Result<Self, CurveError> {
        Self::new(*config)
    }
}
