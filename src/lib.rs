//! # Blipp Curve
//!
//! Pricing engine for per-video attention markets: every video gets a
//! constant-product bonding curve between a settlement coin and a fixed
//! supply of shares.
//!
//! This crate provides domain types, the quote engine, the theoretical
//! price chart, ledger seams and an in-memory reference ledger:
//!
//! - **Quotes**: buy and sell estimates with price impact and fee
//! - **Spot metrics**: current price, market cap, graduation progress
//! - **Charting**: executed trades or the synthetic `k / t²` curve
//! - **Ledger**: traits for the external ledger plus [`InMemoryLedger`](ledger::InMemoryLedger)
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `serde` | no | `Serialize`/`Deserialize` for domain and config types |
//!
//! # Quick Start
//!
//! Add to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! blipp-curve = "0.1"
//! ```
//!
//! ## Quote a trade and settle it
//!
//! ```rust
//! use blipp_curve::prelude::*;
//!
//! // 1. Deployment constants (1B shares, 30 virtual coin, graduation at 69)
//! let engine = BondingCurveEngine::new(CurveConfig::default()).expect("valid config");
//!
//! // 2. A brand-new market
//! let state = engine.genesis();
//! assert_eq!(engine.market_cap(&state).expect("priced").get(), dec!(0));
//!
//! // 3. Quote a buy of 1 coin
//! let quote = engine.quote_buy(&state, Amount::from_units(1)).expect("quote");
//! assert_eq!(quote.shares_out().get().round_dp(2), dec!(32258064.52));
//! assert_eq!(quote.price_impact_pct().round_dp(2), dec!(3.33));
//!
//! // 4. Execute it on a ledger
//! let mut ledger = InMemoryLedger::new(engine);
//! let video = ContentId::new("video-1").expect("non-empty");
//! ledger.initialize_market(&video, "0xcreator").expect("new market");
//! let receipt = ledger.buy(&video, "0xalice", Amount::from_units(1)).expect("buy");
//! assert_eq!(receipt.amount_out, quote.shares_out());
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │   Consumer    │  trading UI, bots, simulations
//! └──────┬───────┘
//!        │ MarketReader / TradeSubmitter / TradeHistoryFeed
//!        ▼
//! ┌──────────────┐
//! │    Ledger     │  InMemoryLedger or an on-chain adapter
//! └──────┬───────┘
//!        │ quote_buy / quote_sell / chart_series
//!        ▼
//! ┌──────────────┐
//! │    Curve      │  BondingCurveEngine, SyntheticCurve
//! └──────┬───────┘
//!        │ div_round, CheckedArithmetic
//!        ▼
//! ┌──────────────┐
//! │    Domain     │  Amount, Price, MarketState, BuyQuote, …
//! └──────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Newtype value types: [`Amount`](domain::Amount), [`Price`](domain::Price), [`MarketState`](domain::MarketState), etc. |
//! | [`curve`] | Quote math, spot metrics and the [`BondingCurveEngine`](curve::BondingCurveEngine) |
//! | [`config`] | Deployment constants: [`CurveConfig`](config::CurveConfig) |
//! | [`traits`] | Ledger seams: [`MarketReader`](traits::MarketReader), [`TradeSubmitter`](traits::TradeSubmitter), [`TradeHistoryFeed`](traits::TradeHistoryFeed) |
//! | [`ledger`] | [`InMemoryLedger`](ledger::InMemoryLedger) reference implementation |
//! | [`math`]   | Directed-rounding division and checked arithmetic |
//! | [`display`] | Compact number formatting for market figures |
//! | [`error`]  | [`CurveError`](error::CurveError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types and traits |

pub mod config;
pub mod curve;
pub mod display;
pub mod domain;
pub mod error;
pub mod ledger;
pub mod math;
pub mod prelude;
pub mod traits;

pub use rust_decimal::Decimal;
pub use rust_decimal_macros::dec;
