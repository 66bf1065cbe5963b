//! Directed decimal division at a fixed scale.
//!
//! [`div_round`] is the building block for every reserve-producing
//! division in the engine.  `rust_decimal` division rounds its 28-digit
//! result to nearest, which may land on either side of the exact
//! quotient; `div_round` truncates to the requested scale and then
//! corrects by one unit in the last place using an exact
//! multiply-back check, so [`Rounding::Up`] is a true ceiling and
//! [`Rounding::Down`] a true floor at that scale.
//!
//! # Convention
//!
//! **Always round against the trader**:
//!
//! | Quantity | Direction | Effect |
//! |----------|-----------|--------|
//! | Post-trade share reserve (buy) | [`Rounding::Up`] | fewer shares out |
//! | Post-trade base reserve (sell) | [`Rounding::Up`] | less coin out |
//!
//! # Examples
//!
//! ```
//! use blipp_curve::dec;
//! use blipp_curve::domain::Rounding;
//! use blipp_curve::math::div_round;
//!
//! assert_eq!(div_round(dec!(10), dec!(3), Rounding::Down, 2), Some(dec!(3.33)));
//! assert_eq!(div_round(dec!(10), dec!(3), Rounding::Up, 2), Some(dec!(3.34)));
//! assert_eq!(div_round(dec!(10), dec!(0), Rounding::Up, 2), None);
//! ```

use rust_decimal::{Decimal, RoundingStrategy};

use crate::domain::Rounding;

/// Significant digits `rust_decimal` can carry.
const MAX_DIGITS: u32 = 28;

/// Divides two non-negative decimals, rounding at `scale` decimal places.
///
/// The effective scale is capped by the quotient's magnitude: a value
/// with `n` integer digits cannot carry more than `28 - n` fractional
/// digits.
///
/// Returns [`None`] if `denominator` is zero or any step overflows.
#[must_use]
pub fn div_round(
    numerator: Decimal,
    denominator: Decimal,
    rounding: Rounding,
    scale: u32,
) -> Option<Decimal> {
    if denominator.is_zero() {
        return None;
    }
    let quotient = numerator.checked_div(denominator)?;
    let dp = scale.min(MAX_DIGITS.saturating_sub(integer_digits(quotient)));
    let ulp = Decimal::new(1, dp);

    let mut floor = quotient.round_dp_with_strategy(dp, RoundingStrategy::ToZero);
    // The 28-digit quotient may have been rounded above the exact value.
    if floor.checked_mul(denominator)? > numerator {
        floor = floor.checked_sub(ulp)?;
    }

    match rounding {
        Rounding::Down => Some(floor),
        Rounding::Up => {
            if floor.checked_mul(denominator)? < numerator {
                floor.checked_add(ulp)
            } else {
                Some(floor)
            }
        }
    }
}

fn integer_digits(value: Decimal) -> u32 {
    let ten = Decimal::from(10);
    let mut t = value.abs().trunc();
    let mut n = 0;
    while !t.is_zero() {
        t = (t / ten).trunc();
        n += 1;
    }
    n
}
