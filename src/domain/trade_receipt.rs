//! Settlement record returned by a trade submitter.

use core::fmt;

use super::{Amount, ContentId, Price};

/// Direction of an executed trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TradeSide {
    /// Coin in, shares out.
    Buy,
    /// Shares in, coin out.
    Sell,
}

impl fmt::Display for TradeSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Buy => f.write_str("buy"),
            Self::Sell => f.write_str("sell"),
        }
    }
}

/// What the ledger actually executed.
///
/// For a buy, `amount_in` is coin and `amount_out` is shares; for a sell
/// the roles are swapped.  `fee` is the informational platform fee in
/// coin.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TradeReceipt {
    /// Market traded.
    pub content_id: ContentId,
    /// Buy or sell.
    pub side: TradeSide,
    /// Amount the trader gave up.
    pub amount_in: Amount,
    /// Amount the trader received.
    pub amount_out: Amount,
    /// Average coin per share of the execution.
    pub price_per_share: Price,
    /// Platform fee reported for the trade.
    pub fee: Amount,
    /// Ledger timestamp in Unix seconds.
    pub timestamp: u64,
}

impl fmt::Display for TradeReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} on {}: in={} out={} pps={} fee={} @{}",
            self.side,
            self.content_id,
            self.amount_in,
            self.amount_out,
            self.price_per_share,
            self.fee,
            self.timestamp
        )
    }
}
