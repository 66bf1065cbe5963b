//! Human-readable rendering of market figures.
//!
//! These helpers format numbers the way the trading screen shows them:
//! compact dollar figures for capitalisation and balances, eight decimal
//! places for share prices, and signed two-place percentages for price
//! impact.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::domain::Price;

const THOUSAND: u64 = 1_000;
const MILLION: u64 = 1_000_000;
const BILLION: u64 = 1_000_000_000;
const TRILLION: u64 = 1_000_000_000_000;

/// Rounds half away from zero and pads to exactly `dp` places.
fn fixed(value: Decimal, dp: u32) -> String {
    let mut v = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    v.rescale(dp);
    v.to_string()
}

fn scaled(value: Decimal, unit: u64, dp: u32, suffix: &str) -> String {
    let v = value / Decimal::from(unit);
    format!("${}{suffix}", fixed(v, dp))
}

/// Compact dollar rendering: `$512`, `$1.5K`, `$2.35M`, `$1.20B`, `$3.00T`.
///
/// ```rust
/// use blipp_curve::display::format_compact;
/// use blipp_curve::dec;
///
/// assert_eq!(format_compact(dec!(512.4)), "$512");
/// assert_eq!(format_compact(dec!(1_500)), "$1.5K");
/// assert_eq!(format_compact(dec!(2_345_678)), "$2.35M");
/// ```
#[must_use]
pub fn format_compact(value: Decimal) -> String {
    if value < Decimal::from(THOUSAND) {
        format!("${}", fixed(value, 0))
    } else if value < Decimal::from(MILLION) {
        scaled(value, THOUSAND, 1, "K")
    } else if value < Decimal::from(BILLION) {
        scaled(value, MILLION, 2, "M")
    } else if value < Decimal::from(TRILLION) {
        scaled(value, BILLION, 2, "B")
    } else {
        scaled(value, TRILLION, 2, "T")
    }
}

/// Share price with eight decimal places, e.g. `$0.00000003`.
#[must_use]
pub fn format_price(price: Price) -> String {
    format!("${}", fixed(price.get(), 8))
}

/// Signed price impact with two decimal places, e.g. `+3.33%` or `-25.00%`.
#[must_use]
pub fn format_impact_pct(impact_pct: Decimal) -> String {
    let sign = if impact_pct > Decimal::ZERO { "+" } else { "" };
    format!("{sign}{}%", fixed(impact_pct, 2))
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn compact_thresholds() {
        assert_eq!(format_compact(dec!(0)), "$0");
        assert_eq!(format_compact(dec!(512)), "$512");
        assert_eq!(format_compact(dec!(999.4)), "$999");
        assert_eq!(format_compact(dec!(1_500)), "$1.5K");
        assert_eq!(format_compact(dec!(2_350_000)), "$2.35M");
        assert_eq!(format_compact(dec!(1_200_000_000)), "$1.20B");
        assert_eq!(format_compact(dec!(3_000_000_000_000)), "$3.00T");
    }

    #[test]
    fn compact_rounds_half_away_from_zero() {
        assert_eq!(format_compact(dec!(12.5)), "$13");
        assert_eq!(format_compact(dec!(1_250)), "$1.3K");
    }

    #[test]
    fn price_has_eight_places() {
        let Ok(p) = Price::new(dec!(0.00000003)) else {
            panic!("valid price");
        };
        assert_eq!(format_price(p), "$0.00000003");
        assert_eq!(format_price(Price::ZERO), "$0.00000000");
    }

    #[test]
    fn impact_is_signed() {
        assert_eq!(format_impact_pct(dec!(3.3333)), "+3.33%");
        assert_eq!(format_impact_pct(dec!(-25)), "-25.00%");
        assert_eq!(format_impact_pct(Decimal::ZERO), "0.00%");
    }
}
