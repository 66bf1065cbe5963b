//! Executed-trade prices for charting.

use crate::domain::{ContentId, TradeHistoryPoint};
use crate::error::CurveError;

/// Chronological execution prices of a market.
pub trait TradeHistoryFeed {
    /// Every recorded trade for `content_id`, oldest first.  Empty when
    /// the market has not traded yet.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::MarketNotFound`] if no market exists.
    fn trade_history(&self, content_id: &ContentId) -> Result<Vec<TradeHistoryPoint>, CurveError>;
}
