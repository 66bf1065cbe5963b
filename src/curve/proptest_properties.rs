//! Property-based tests for the bonding-curve math.
//!
//! 1. **Invariant preservation**: post-trade reserves keep `base × shares ≈ k`.
//! 2. **Monotonicity**: spending more buys strictly more shares, never at a
//!    lower average price.
//! 3. **Inverse consistency**: buying then selling every share bought
//!    returns at most the coin spent.
//! 4. **Sell direction**: a sell always lowers the spot price.
//! 5. **Chart determinism**: the theoretical curve is replayable, has
//!    `steps + 1` points and never decreases in price.
//! 6. **Graduation progress** is never negative.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::{graduation_progress, quote_buy, quote_sell, synthetic_curve};
use crate::config::FEE_RATE;
use crate::domain::{Amount, MarketState};

const TOTAL_ISSUANCE: u64 = 1_000_000_000;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn amt(v: Decimal) -> Amount {
    let Ok(a) = Amount::new(v) else {
        panic!("valid amount");
    };
    a
}

fn make_state(base_cents: i64, share_reserve: u64) -> MarketState {
    let Ok(s) = MarketState::new(
        amt(Decimal::new(base_cents, 2)),
        Amount::from_units(share_reserve),
        Amount::from_units(TOTAL_ISSUANCE),
        false,
    ) else {
        panic!("valid state");
    };
    s
}

/// `|a − b| ≤ b × 10⁻¹²`.
fn approx_eq(a: Decimal, b: Decimal) -> bool {
    let tolerance = b * Decimal::new(1, 12);
    (a - b).abs() <= tolerance
}

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Base reserve in cents: [30.00, 1 000 000.00].
fn base_strategy() -> impl Strategy<Value = i64> {
    3_000i64..=100_000_000i64
}

/// Share reserve in whole shares: [1 000, 1 000 000 000].
fn share_strategy() -> impl Strategy<Value = u64> {
    1_000u64..=TOTAL_ISSUANCE
}

/// Trade size in cents: [0.01, 100 000.00].
fn trade_strategy() -> impl Strategy<Value = i64> {
    1i64..=10_000_000i64
}

// ---------------------------------------------------------------------------
// Property 1: Invariant preservation
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_buy_preserves_invariant(
        base in base_strategy(),
        shares in share_strategy(),
        spend in trade_strategy(),
    ) {
        let state = make_state(base, shares);
        let Ok(k) = state.invariant() else {
            return Ok(());
        };
        let Ok(q) = quote_buy(&state, amt(Decimal::new(spend, 2)), FEE_RATE) else {
            return Ok(());
        };
        let k_after = q.new_base_reserve().get() * q.new_share_reserve().get();
        prop_assert!(approx_eq(k_after, k), "k drifted: {} vs {}", k_after, k);
        prop_assert!(q.new_share_reserve().get() * q.new_base_reserve().get() >= k - k * Decimal::new(1, 20));
    }

    #[test]
    fn prop_sell_preserves_invariant(
        base in base_strategy(),
        shares in 1_000u64..=TOTAL_ISSUANCE / 2,
        sell_pct in 1u64..=100u64,
    ) {
        let state = make_state(base, shares);
        let Ok(k) = state.invariant() else {
            return Ok(());
        };
        let sold = state.total_sold().get();
        let shares_in = sold * Decimal::from(sell_pct) / Decimal::ONE_HUNDRED;
        let Ok(q) = quote_sell(&state, amt(shares_in), FEE_RATE) else {
            return Ok(());
        };
        let k_after = q.new_base_reserve().get() * q.new_share_reserve().get();
        prop_assert!(approx_eq(k_after, k), "k drifted: {} vs {}", k_after, k);
    }
}

// ---------------------------------------------------------------------------
// Property 2: Monotonicity
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_larger_buy_gets_more_shares_at_higher_price(
        base in base_strategy(),
        shares in share_strategy(),
        small in trade_strategy(),
        extra in 100i64..=1_000_000i64,
    ) {
        let state = make_state(base, shares);
        let Ok(a) = quote_buy(&state, amt(Decimal::new(small, 2)), FEE_RATE) else {
            return Ok(());
        };
        let Ok(b) = quote_buy(&state, amt(Decimal::new(small + extra, 2)), FEE_RATE) else {
            return Ok(());
        };
        prop_assert!(a.shares_out() < b.shares_out());
        prop_assert!(a.price_per_share() <= b.price_per_share());
        prop_assert!(a.price_impact_pct() <= b.price_impact_pct());
    }
}

// ---------------------------------------------------------------------------
// Property 3: Inverse consistency
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_buy_then_sell_never_profits(
        base in base_strategy(),
        shares in share_strategy(),
        spend in trade_strategy(),
    ) {
        let state = make_state(base, shares);
        let spent = amt(Decimal::new(spend, 2));
        let Ok(buy) = quote_buy(&state, spent, FEE_RATE) else {
            return Ok(());
        };
        let applied = state.apply_buy(&buy);
        prop_assert!(applied.is_ok(), "own quote rejected: {:?}", applied);
        let Ok(after_buy) = applied else {
            return Ok(());
        };
        let Ok(sell) = quote_sell(&after_buy, buy.shares_out(), FEE_RATE) else {
            return Ok(());
        };
        prop_assert!(
            sell.proceeds_out() <= spent,
            "round-trip should lose value: proceeds={} > spent={}",
            sell.proceeds_out(), spent
        );
    }
}

// ---------------------------------------------------------------------------
// Property 4: Sell direction
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_sell_lowers_spot_price(
        base in base_strategy(),
        shares in 1_000u64..=TOTAL_ISSUANCE / 2,
        sell_pct in 1u64..=100u64,
    ) {
        let state = make_state(base, shares);
        let shares_in = state.total_sold().get() * Decimal::from(sell_pct) / Decimal::ONE_HUNDRED;
        let Ok(q) = quote_sell(&state, amt(shares_in), FEE_RATE) else {
            return Ok(());
        };
        let applied = state.apply_sell(&q);
        prop_assert!(applied.is_ok(), "own quote rejected: {:?}", applied);
        let Ok(after) = applied else {
            return Ok(());
        };
        let (Ok(before_px), Ok(after_px)) = (state.spot_price(), after.spot_price()) else {
            return Ok(());
        };
        prop_assert!(after_px < before_px);
        prop_assert!(q.price_impact_pct() <= Decimal::ZERO);
    }
}

// ---------------------------------------------------------------------------
// Property 5: Chart determinism
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_synthetic_curve_is_replayable_and_monotone(
        base in base_strategy(),
        shares in share_strategy(),
        steps in 0u32..=200u32,
    ) {
        let state = make_state(base, shares);
        let total = Amount::from_units(TOTAL_ISSUANCE);
        let min_range = Amount::from_units(1_000);
        let Ok(first) = synthetic_curve(&state, total, steps, min_range) else {
            return Ok(());
        };
        let Ok(second) = synthetic_curve(&state, total, steps, min_range) else {
            return Ok(());
        };
        prop_assert_eq!(first.len(), steps as usize + 1);

        let a: Vec<_> = first.collect();
        let b: Vec<_> = second.collect();
        prop_assert_eq!(&a, &b);
        prop_assert!(a.windows(2).all(|w| w[0].price <= w[1].price));
        prop_assert!(a.windows(2).all(|w| w[0].supply_sold <= w[1].supply_sold));
    }
}

// ---------------------------------------------------------------------------
// Property 6: Graduation progress
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_graduation_progress_non_negative(
        base in 0i64..=100_000_000i64,
        offset in 0u64..=1_000u64,
        threshold in 1u64..=1_000u64,
    ) {
        let state = make_state(base, TOTAL_ISSUANCE);
        let Ok(pct) = graduation_progress(
            &state,
            Amount::from_units(offset),
            Amount::from_units(threshold),
        ) else {
            return Ok(());
        };
        prop_assert!(pct >= Decimal::ZERO);
    }
}
