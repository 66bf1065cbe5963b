//! Integration tests exercising the full system from config to ledger.
//!
//! These tests verify end-to-end flows through the public API:
//! quoting against fresh snapshots, the trading lifecycle up to
//! graduation, ledger error reporting, chart series selection and raw
//! on-chain unit conversion.

#![allow(clippy::panic)]

use blipp_curve::config::CurveConfig;
use blipp_curve::curve::BondingCurveEngine;
use blipp_curve::dec;
use blipp_curve::display::format_compact;
use blipp_curve::domain::{
    Amount, ChartPoint, ContentId, Decimals, ImpactSeverity, MarketPhase, MarketState, TradeSide,
};
use blipp_curve::error::CurveError;
use blipp_curve::ledger::InMemoryLedger;
use blipp_curve::traits::{FromConfig, MarketReader, TradeHistoryFeed, TradeSubmitter};
use blipp_curve::Decimal;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn video(id: &str) -> ContentId {
    let Ok(c) = ContentId::new(id) else {
        panic!("valid content id");
    };
    c
}

fn coin(v: Decimal) -> Amount {
    let Ok(a) = Amount::new(v) else {
        panic!("valid amount");
    };
    a
}

fn ledger_with(id: &ContentId) -> InMemoryLedger {
    let Ok(mut ledger) = InMemoryLedger::from_config(&CurveConfig::default()) else {
        panic!("valid config");
    };
    let Ok(_) = ledger.initialize_market(id, "0xcreator") else {
        panic!("new market");
    };
    ledger
}

fn state_of(ledger: &InMemoryLedger, id: &ContentId) -> MarketState {
    let Ok(info) = ledger.market_info(id) else {
        panic!("market exists");
    };
    info.state
}

// ===========================================================================
// Suite 1: Quotes against the ledger
// ===========================================================================

#[test]
fn quote_matches_settlement_on_fresh_snapshot() {
    let id = video("video-1");
    let mut ledger = ledger_with(&id);

    for (trader, spend) in [("0xa", dec!(0.5)), ("0xb", dec!(3)), ("0xc", dec!(12.25))] {
        let state = state_of(&ledger, &id);
        let Ok(quote) = ledger.engine().quote_buy(&state, coin(spend)) else {
            panic!("expected quote");
        };
        let Ok(receipt) = ledger.buy(&id, trader, coin(spend)) else {
            panic!("expected buy");
        };
        assert_eq!(receipt.amount_out, quote.shares_out());
        assert_eq!(receipt.price_per_share, quote.price_per_share());
        assert_eq!(state_of(&ledger, &id).share_reserve(), quote.new_share_reserve());
    }
}

#[test]
fn genesis_buy_example() {
    let engine = BondingCurveEngine::default();
    let Ok(quote) = engine.quote_buy(&engine.genesis(), Amount::from_units(1)) else {
        panic!("expected quote");
    };
    assert_eq!(quote.shares_out().get().round_dp(2), dec!(32258064.52));
    assert_eq!(quote.price_per_share().get().round_dp(10), dec!(0.0000000310));
    assert!(quote.price_impact_pct() > Decimal::ZERO);
    assert_eq!(quote.impact_severity(), ImpactSeverity::Moderate);
    assert_eq!(quote.fee_amount().get(), dec!(0.01));
}

#[test]
fn spot_price_rises_with_buys_and_falls_with_sells() {
    let id = video("video-2");
    let mut ledger = ledger_with(&id);
    let engine = *ledger.engine();

    let Ok(p0) = engine.current_price(&state_of(&ledger, &id)) else {
        panic!("priced");
    };
    let Ok(bought) = ledger.buy(&id, "0xa", Amount::from_units(5)) else {
        panic!("expected buy");
    };
    let Ok(p1) = engine.current_price(&state_of(&ledger, &id)) else {
        panic!("priced");
    };
    let Some(half) = bought
        .amount_out
        .checked_div(&Amount::from_units(2), blipp_curve::domain::Rounding::Down, 8)
    else {
        panic!("non-zero divisor");
    };
    let Ok(sold) = ledger.sell(&id, "0xa", half) else {
        panic!("expected sell");
    };
    let Ok(p2) = engine.current_price(&state_of(&ledger, &id)) else {
        panic!("priced");
    };

    assert!(p0 < p1);
    assert!(p2 < p1);
    assert_eq!(sold.side, TradeSide::Sell);
    assert!(sold.amount_out < Amount::from_units(5));
}

// ===========================================================================
// Suite 2: Lifecycle and graduation
// ===========================================================================

#[test]
fn lifecycle_from_uninitialized_to_graduated() {
    let id = video("video-3");
    let Ok(mut ledger) = InMemoryLedger::from_config(&CurveConfig::default()) else {
        panic!("valid config");
    };
    assert_eq!(ledger.phase(&id), MarketPhase::Uninitialized);

    let Ok(_) = ledger.initialize_market(&id, "0xcreator") else {
        panic!("new market");
    };
    assert_eq!(ledger.phase(&id), MarketPhase::Active);

    let engine = *ledger.engine();
    let mut spent = Decimal::ZERO;
    for trader in ["0xa", "0xb", "0xc"] {
        let Ok(_) = ledger.buy(&id, trader, Amount::from_units(20)) else {
            panic!("expected buy");
        };
        spent += dec!(20);
        let Ok(progress) = engine.graduation_progress(&state_of(&ledger, &id)) else {
            panic!("progress");
        };
        assert_eq!(progress, spent / dec!(69) * dec!(100));
        assert_eq!(ledger.phase(&id), MarketPhase::Active);
    }

    // 60 real so far; 9 more reaches the threshold exactly.
    let Ok(_) = ledger.buy(&id, "0xd", Amount::from_units(9)) else {
        panic!("expected buy");
    };
    assert_eq!(ledger.phase(&id), MarketPhase::Graduated);
    let Ok(progress) = engine.graduation_progress(&state_of(&ledger, &id)) else {
        panic!("progress");
    };
    assert_eq!(progress, dec!(100));

    assert_eq!(
        ledger.buy(&id, "0xe", Amount::from_units(1)),
        Err(CurveError::InvalidMarketState("market has graduated"))
    );
}

// ===========================================================================
// Suite 3: Ledger errors
// ===========================================================================

#[test]
fn unknown_market_is_reported() {
    let Ok(mut ledger) = InMemoryLedger::from_config(&CurveConfig::default()) else {
        panic!("valid config");
    };
    let id = video("nobody-made-this");
    assert_eq!(
        ledger.sell(&id, "0xa", Amount::from_units(1)),
        Err(CurveError::MarketNotFound("nobody-made-this".to_string()))
    );
    assert!(matches!(
        ledger.share_balance(&id, "0xa"),
        Err(CurveError::MarketNotFound(_))
    ));
}

#[test]
fn oversell_is_rejected_without_side_effects() {
    let id = video("video-4");
    let mut ledger = ledger_with(&id);
    let Ok(bought) = ledger.buy(&id, "0xa", Amount::from_units(2)) else {
        panic!("expected buy");
    };
    let before = state_of(&ledger, &id);
    let Some(more) = bought.amount_out.checked_add(&coin(dec!(0.00000001))) else {
        panic!("no overflow");
    };
    assert!(matches!(
        ledger.sell(&id, "0xa", more),
        Err(CurveError::InsufficientBalance { .. })
    ));
    assert_eq!(state_of(&ledger, &id), before);
    assert_eq!(ledger.share_balance(&id, "0xa"), Ok(bought.amount_out));
}

#[test]
fn zero_amounts_are_invalid() {
    let id = video("video-5");
    let mut ledger = ledger_with(&id);
    assert!(matches!(
        ledger.buy(&id, "0xa", Amount::ZERO),
        Err(CurveError::InvalidAmount(_))
    ));
    assert!(matches!(
        ledger.sell(&id, "0xa", Amount::ZERO),
        Err(CurveError::InvalidAmount(_))
    ));
}

// ===========================================================================
// Suite 4: Charting
// ===========================================================================

#[test]
fn chart_switches_from_curve_to_history() {
    let id = video("video-6");
    let mut ledger = ledger_with(&id);
    let engine = *ledger.engine();

    let Ok(history) = ledger.trade_history(&id) else {
        panic!("market exists");
    };
    let Ok(series) = engine.chart_series(&state_of(&ledger, &id), &history) else {
        panic!("chart");
    };
    assert_eq!(series.len(), 51);
    assert!(matches!(series[0], ChartPoint::Theoretical(_)));

    let Ok(receipt) = ledger.buy(&id, "0xa", Amount::from_units(1)) else {
        panic!("expected buy");
    };
    let Ok(history) = ledger.trade_history(&id) else {
        panic!("market exists");
    };
    let Ok(series) = engine.chart_series(&state_of(&ledger, &id), &history) else {
        panic!("chart");
    };
    assert_eq!(series.len(), 1);
    assert_eq!(series[0].price(), receipt.price_per_share);
}

#[test]
fn synthetic_curve_ends_at_current_spot() {
    let id = video("video-7");
    let mut ledger = ledger_with(&id);
    let Ok(_) = ledger.buy(&id, "0xa", Amount::from_units(10)) else {
        panic!("expected buy");
    };
    let engine = *ledger.engine();
    let state = state_of(&ledger, &id);
    let Ok(curve) = engine.synthetic_curve(&state) else {
        panic!("curve");
    };
    let Some(last) = curve.last() else {
        panic!("non-empty curve");
    };
    let Ok(spot) = engine.current_price(&state) else {
        panic!("priced");
    };
    assert_eq!(last.supply_sold, state.total_sold());
    let diff = (last.price.get() - spot.get()).abs();
    assert!(diff < dec!(0.000000000000000001));
}

// ===========================================================================
// Suite 5: Raw units and display
// ===========================================================================

#[test]
fn raw_ledger_view_matches_genesis() {
    let cfg = CurveConfig::default();
    let Ok(engine) = BondingCurveEngine::new(cfg) else {
        panic!("valid engine");
    };
    let Ok(state) = engine.state_from_raw_units(3_000_000_000, 100_000_000_000_000_000, false) else {
        panic!("valid raw state");
    };
    assert_eq!(state, MarketState::genesis(&cfg));
    assert_eq!(cfg.asset_decimals(), Decimals::OCTAS);
    assert_eq!(
        state.base_reserve().to_raw_units(cfg.asset_decimals()),
        Ok(3_000_000_000)
    );
}

#[test]
fn market_cap_renders_compactly() {
    let id = video("video-8");
    let mut ledger = ledger_with(&id);
    let engine = *ledger.engine();
    let Ok(cap) = engine.market_cap(&state_of(&ledger, &id)) else {
        panic!("priced");
    };
    assert_eq!(format_compact(cap.get()), "$0");

    let Ok(_) = ledger.buy(&id, "0xa", Amount::from_units(30)) else {
        panic!("expected buy");
    };
    // base 60, shares 500M: spot 1.2e-7, cap = 500M × 1.2e-7 = 60
    let Ok(cap) = engine.market_cap(&state_of(&ledger, &id)) else {
        panic!("priced");
    };
    assert_eq!(format_compact(cap.get()), "$60");
}
