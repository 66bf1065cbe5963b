//! Constant-product quote math.
//!
//! The market invariant is `base_reserve × share_reserve = k`.  A buy
//! adds coin to the base side and removes shares; a sell does the
//! reverse.  The platform fee is reported next to each quote but is
//! **not** deducted from the curve math.
//!
//! # Buy (coin → shares)
//!
//! 1. `k = base × shares`
//! 2. `new_base = base + amount_in`
//! 3. `new_shares = ⌈k / new_base⌉`
//! 4. `shares_out = shares − new_shares`
//!
//! # Sell (shares → coin)
//!
//! 1. `new_shares = shares + shares_in`
//! 2. `new_base = ⌈k / new_shares⌉`
//! 3. `proceeds_out = base − new_base`
//!
//! Post-trade reserves are rounded up at [`QUOTE_SCALE`](crate::math::QUOTE_SCALE) places,
//! so rounding always leaves value in the market.  A trade whose
//! post-trade reserve would round down to zero at that scale drains the
//! market and is rejected as [`CurveError::InsufficientLiquidity`].

use log::{debug, trace};
use rust_decimal::Decimal;

use crate::domain::{Amount, BasisPoints, BuyQuote, MarketState, Price, Rounding, SellQuote};
use crate::error::CurveError;
use crate::math::CheckedArithmetic;

/// Quotes spending `base_amount_in` of the settlement coin on shares.
///
/// # Errors
///
/// - [`CurveError::InvalidAmount`] if `base_amount_in` is zero.
/// - [`CurveError::InsufficientLiquidity`] if the trade would take the
///   whole remaining share supply.
/// - [`CurveError::DegenerateQuote`] if the trade yields no shares.
/// - [`CurveError::Overflow`] if an intermediate value is not representable.
pub fn quote_buy(
    state: &MarketState,
    base_amount_in: Amount,
    fee: BasisPoints,
) -> Result<BuyQuote, CurveError> {
    if base_amount_in.is_zero() {
        debug!("buy quote rejected: zero input against {state}");
        return Err(CurveError::InvalidAmount("base amount in must be positive"));
    }

    let base = state.base_reserve();
    let shares = state.share_reserve();
    let k = base.safe_mul(&shares)?;
    let new_base = base.safe_add(&base_amount_in)?;

    if k.safe_div(&new_base, Rounding::Down)?.is_zero() {
        debug!("buy quote rejected: {base_amount_in} would drain {state}");
        return Err(CurveError::InsufficientLiquidity);
    }
    let new_shares = k.safe_div(&new_base, Rounding::Up)?;

    let Some(shares_out) = shares.checked_sub(&new_shares) else {
        debug!("buy quote rejected: {base_amount_in} buys nothing from {state}");
        return Err(CurveError::DegenerateQuote);
    };
    if shares_out >= shares {
        return Err(CurveError::InsufficientLiquidity);
    }
    if shares_out.is_zero() {
        debug!("buy quote rejected: {base_amount_in} buys nothing from {state}");
        return Err(CurveError::DegenerateQuote);
    }

    let price_per_share = Price::from_amounts(base_amount_in, shares_out)?;
    let price_impact_pct = price_per_share.deviation_pct(state.spot_price()?)?;
    let fee_amount = fee.apply(base_amount_in)?;

    let quote = BuyQuote::new(
        base_amount_in,
        shares_out,
        price_per_share,
        price_impact_pct,
        fee_amount,
        new_base,
        new_shares,
    );
    trace!("{quote}");
    Ok(quote)
}

/// Quotes selling `shares_in` back to the curve.
///
/// Only the circulating supply (`total_issuance − share_reserve`) can be
/// sold; whether the trader actually holds `shares_in` is the caller's
/// concern.
///
/// # Errors
///
/// - [`CurveError::InvalidAmount`] if `shares_in` is zero.
/// - [`CurveError::InsufficientBalance`] if `shares_in` exceeds the
///   circulating supply.
/// - [`CurveError::InsufficientLiquidity`] if the proceeds would reach the
///   whole base reserve or the post-trade base reserve overshoots it.
/// - [`CurveError::DegenerateQuote`] if the trade yields no proceeds.
/// - [`CurveError::Overflow`] if an intermediate value is not representable.
pub fn quote_sell(
    state: &MarketState,
    shares_in: Amount,
    fee: BasisPoints,
) -> Result<SellQuote, CurveError> {
    if shares_in.is_zero() {
        debug!("sell quote rejected: zero input against {state}");
        return Err(CurveError::InvalidAmount("shares in must be positive"));
    }
    let circulating = state.total_sold();
    if shares_in > circulating {
        debug!("sell quote rejected: {shares_in} exceeds circulating {circulating}");
        return Err(CurveError::InsufficientBalance {
            requested: shares_in.get(),
            available: circulating.get(),
        });
    }

    let base = state.base_reserve();
    let shares = state.share_reserve();
    let k = base.safe_mul(&shares)?;
    let new_shares = shares.safe_add(&shares_in)?;

    if k.safe_div(&new_shares, Rounding::Down)?.is_zero() {
        debug!("sell quote rejected: {shares_in} would drain {state}");
        return Err(CurveError::InsufficientLiquidity);
    }
    let new_base = k.safe_div(&new_shares, Rounding::Up)?;

    let proceeds_out = base.safe_sub(&new_base)?;
    if proceeds_out >= base {
        return Err(CurveError::InsufficientLiquidity);
    }
    if proceeds_out.is_zero() {
        debug!("sell quote rejected: {shares_in} returns nothing from {state}");
        return Err(CurveError::DegenerateQuote);
    }

    let price_per_share = Price::from_amounts(proceeds_out, shares_in)?;
    let price_impact_pct = price_per_share.deviation_pct(state.spot_price()?)?;
    let fee_amount = fee.apply(proceeds_out)?;

    let quote = SellQuote::new(
        shares_in,
        proceeds_out,
        price_per_share,
        price_impact_pct,
        fee_amount,
        new_base,
        new_shares,
    );
    trace!("{quote}");
    Ok(quote)
}

/// Spot price `base_reserve / share_reserve`.
///
/// # Errors
///
/// Returns [`CurveError::DegenerateMarket`] if the share reserve is zero.
pub fn current_price(state: &MarketState) -> Result<Price, CurveError> {
    state.spot_price()
}

/// Market capitalisation: spot price × circulating supply.
///
/// # Errors
///
/// Returns [`CurveError::DegenerateMarket`] if the share reserve is zero.
pub fn market_cap(state: &MarketState) -> Result<Amount, CurveError> {
    current_price(state)?.value_of(state.total_sold())
}

/// Progress toward graduation in percent:
/// `max(0, (base_reserve − virtual_base_offset) / graduation_threshold × 100)`.
///
/// The value is not capped at 100; clamping for display is the caller's
/// concern.
///
/// # Errors
///
/// - [`CurveError::InvalidConfiguration`] if `graduation_threshold` is zero.
/// - [`CurveError::Overflow`] if the ratio is not representable.
pub fn graduation_progress(
    state: &MarketState,
    virtual_base_offset: Amount,
    graduation_threshold: Amount,
) -> Result<Decimal, CurveError> {
    if graduation_threshold.is_zero() {
        return Err(CurveError::InvalidConfiguration(
            "graduation threshold must be positive",
        ));
    }
    let pct = state
        .base_reserve()
        .get()
        .checked_sub(virtual_base_offset.get())
        .and_then(|real_base| real_base.checked_div(graduation_threshold.get()))
        .and_then(|r| r.checked_mul(Decimal::ONE_HUNDRED))
        .ok_or(CurveError::Overflow("graduation progress overflow"))?;
    Ok(pct.max(Decimal::ZERO))
}
