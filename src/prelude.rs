//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use blipp_curve::prelude::*;
//!
//! fn opening_price(engine: &BondingCurveEngine) -> Result<Price, CurveError> {
//!     engine.current_price(&engine.genesis())
//! }
//!
//! assert!(opening_price(&BondingCurveEngine::default()).is_ok());
//! ```
//!
//! This re-exports the most frequently used domain types, the engine,
//! ledger traits, configuration and error types so that consumers don't
//! need to import from individual submodules.

pub use crate::domain::{
    Amount, BasisPoints, BuyQuote, ChartPoint, ContentId, CurvePoint, Decimals, ImpactSeverity,
    MarketInfo, MarketPhase, MarketState, Price, Rounding, SellQuote, TradeHistoryPoint,
    TradeReceipt, TradeSide,
};

pub use crate::traits::{FromConfig, MarketReader, TradeHistoryFeed, TradeSubmitter};

pub use crate::curve::{BondingCurveEngine, SyntheticCurve};

pub use crate::ledger::InMemoryLedger;

pub use crate::config::CurveConfig;

pub use crate::display::format_compact;

pub use crate::error::CurveError;

pub use crate::{dec, Decimal};
