//! Theoretical price curve for markets without trade history.
//!
//! With `base × shares = k`, the spot price when `t` shares remain in the
//! pool is `(k / t) / t = k / t²`.  [`SyntheticCurve`] samples that
//! function from zero shares sold up to the current sold supply.

use core::iter::FusedIterator;

use rust_decimal::Decimal;

use crate::domain::{Amount, CurvePoint, MarketState, Price, Rounding};
use crate::error::CurveError;
use crate::math::{div_round, QUOTE_SCALE};

/// Lazy, finite sequence of `steps + 1` samples of the theoretical curve.
///
/// The iterator is pure: cloning it, or building it again from the same
/// inputs, replays exactly the same points.
///
/// # Example
///
/// ```rust
/// use blipp_curve::config::CurveConfig;
/// use blipp_curve::curve::synthetic_curve;
/// use blipp_curve::domain::MarketState;
///
/// let config = CurveConfig::default();
/// let state = MarketState::genesis(&config);
/// let curve = synthetic_curve(&state, config.total_issuance(), 10, config.min_chart_range())
///     .expect("valid market");
/// let points: Vec<_> = curve.collect();
/// assert_eq!(points.len(), 11);
/// assert!(points[0].supply_sold.is_zero());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntheticCurve {
    k: Decimal,
    total_issuance: Decimal,
    max_sold: Amount,
    steps: u32,
    next: u64,
}

impl SyntheticCurve {
    /// Right edge of the sampled supply range.
    pub const fn max_sold(&self) -> Amount {
        self.max_sold
    }

    /// Number of intervals; the sequence yields `steps + 1` points.
    #[must_use]
    pub const fn steps(&self) -> u32 {
        self.steps
    }

    fn point_at(&self, index: u64) -> Result<CurvePoint, CurveError> {
        const OVERFLOW: CurveError = CurveError::Overflow("synthetic curve sample overflow");
        let sold = if self.steps == 0 {
            Decimal::ZERO
        } else {
            let scaled = self
                .max_sold
                .get()
                .checked_mul(Decimal::from(index))
                .ok_or(OVERFLOW)?;
            div_round(scaled, Decimal::from(self.steps), Rounding::Down, QUOTE_SCALE)
                .ok_or(OVERFLOW)?
        };
        let in_pool = self.total_issuance.checked_sub(sold).ok_or(OVERFLOW)?;
        let squared = in_pool.checked_mul(in_pool).ok_or(OVERFLOW)?;
        // Pools too small to square at 28 digits.
        if squared.is_zero() {
            return Err(CurveError::DegenerateMarket);
        }
        let price = self.k.checked_div(squared).ok_or(OVERFLOW)?;
        Ok(CurvePoint {
            supply_sold: Amount::new(sold)?,
            price: Price::new(price)?,
        })
    }

    fn last_index(&self) -> u64 {
        u64::from(self.steps)
    }
}

impl Iterator for SyntheticCurve {
    type Item = CurvePoint;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next > self.last_index() {
            return None;
        }
        let point = self.point_at(self.next).ok()?;
        self.next += 1;
        Some(point)
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        let skip = u64::try_from(n).unwrap_or(u64::MAX);
        self.next = self
            .next
            .saturating_add(skip)
            .min(self.last_index().saturating_add(1));
        self.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.last_index() + 1).saturating_sub(self.next);
        let remaining = usize::try_from(remaining).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SyntheticCurve {}

impl FusedIterator for SyntheticCurve {}

/// Builds the theoretical curve for `state`.
///
/// The sampled supply range runs from zero to the current sold supply
/// (`total_issuance − share_reserve`).  When fewer than
/// `min_display_range` shares have been sold the range is widened to
/// `min_display_range`, unless that would reach `total_issuance`.
///
/// # Errors
///
/// - [`CurveError::DegenerateMarket`] if the share reserve is zero, or the
///   reserves are too small for `k` or the remaining pool to be squared
///   at 28 digits.
/// - [`CurveError::InvalidMarketState`] if the share reserve exceeds
///   `total_issuance`.
/// - [`CurveError::Overflow`] if `total_issuance²` or `k` is not
///   representable.
pub fn synthetic_curve(
    state: &MarketState,
    total_issuance: Amount,
    steps: u32,
    min_display_range: Amount,
) -> Result<SyntheticCurve, CurveError> {
    if state.share_reserve().is_zero() {
        return Err(CurveError::DegenerateMarket);
    }
    let current_sold = total_issuance
        .checked_sub(&state.share_reserve())
        .ok_or(CurveError::InvalidMarketState(
            "share reserve exceeds total issuance",
        ))?;

    let widened = current_sold.max(min_display_range);
    let max_sold = if widened >= total_issuance {
        current_sold
    } else {
        widened
    };

    let k = state.invariant()?;
    if k.is_zero() && !state.base_reserve().is_zero() {
        return Err(CurveError::DegenerateMarket);
    }
    let curve = SyntheticCurve {
        k,
        total_issuance: total_issuance.get(),
        max_sold,
        steps,
        next: 0,
    };
    // The endpoints bound every intermediate: the first squares the whole
    // issuance, the last has the smallest pool.
    curve.point_at(0)?;
    curve.point_at(curve.last_index())?;
    Ok(curve)
}
