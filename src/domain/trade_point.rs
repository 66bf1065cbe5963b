//! Historical trade prices supplied by the trade-history feed.

use super::Price;

/// A past execution price, used only for charting.
///
/// `timestamp` is in Unix seconds, matching the ledger's event clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TradeHistoryPoint {
    /// Price per share of the trade.
    pub price: Price,
    /// Execution time in Unix seconds.
    pub timestamp: u64,
}

impl TradeHistoryPoint {
    /// Creates a new history point.
    #[must_use]
    pub const fn new(price: Price, timestamp: u64) -> Self {
        Self { price, timestamp }
    }
}
