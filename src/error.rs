//! Unified error types for the bonding-curve engine.
//!
//! All fallible operations across the crate return [`CurveError`] so a
//! consumer (typically a trading UI) can render every failure from a single
//! match.  Errors are plain values: the engine never retries and never
//! recovers locally.

use rust_decimal::Decimal;

/// Every failure the pricing engine and its ledger seams can report.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CurveError {
    /// A trade or conversion amount is zero, negative, or otherwise unusable.
    #[error("invalid amount: {0}")]
    InvalidAmount(&'static str),

    /// The trade would exhaust or overrun one side of the reserve pair.
    #[error("insufficient liquidity for the requested trade")]
    InsufficientLiquidity,

    /// A sell exceeds the shares available to the seller.
    #[error("insufficient balance: requested {requested}, available {available}")]
    InsufficientBalance {
        /// Shares the caller tried to sell.
        requested: Decimal,
        /// Shares that can actually be sold.
        available: Decimal,
    },

    /// The market snapshot has a zero reserve where a division needs it.
    #[error("degenerate market: share reserve is zero")]
    DegenerateMarket,

    /// The quote would divide by a zero output amount.
    #[error("degenerate quote: trade produces zero output")]
    DegenerateQuote,

    /// The ledger has no market for the given content identifier.
    #[error("market not found for content `{0}`")]
    MarketNotFound(String),

    /// A market already exists for the given content identifier.
    #[error("market already exists for content `{0}`")]
    MarketAlreadyExists(String),

    /// A market snapshot violates a structural invariant.
    #[error("invalid market state: {0}")]
    InvalidMarketState(&'static str),

    /// A content identifier is malformed.
    #[error("invalid content id: {0}")]
    InvalidContentId(&'static str),

    /// Deployment parameters are inconsistent.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),

    /// Decimal arithmetic left the representable range.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),
}
