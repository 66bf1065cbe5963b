//! Value types modelling a video's attention market.
//!
//! This module contains amounts, prices, fee rates, market snapshots,
//! quotes, chart samples and trade receipts.  All types use newtypes
//! with validated constructors to enforce invariants.

mod amount;
mod basis_points;
mod chart_point;
mod content_id;
mod decimals;
mod market_info;
mod market_phase;
mod market_state;
mod price;
mod quote;
mod rounding;
mod trade_point;
mod trade_receipt;

pub use amount::Amount;
pub use basis_points::BasisPoints;
pub use chart_point::{ChartPoint, CurvePoint};
pub use content_id::ContentId;
pub use decimals::Decimals;
pub use market_info::MarketInfo;
pub use market_phase::MarketPhase;
pub use market_state::MarketState;
pub use price::Price;
pub use quote::{BuyQuote, ImpactSeverity, SellQuote};
pub use rounding::Rounding;
pub use trade_point::TradeHistoryPoint;
pub use trade_receipt::{TradeReceipt, TradeSide};
