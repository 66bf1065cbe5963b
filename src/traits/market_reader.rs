//! Read access to on-ledger market state.

use crate::domain::{Amount, ContentId, MarketInfo};
use crate::error::CurveError;

/// Source of market snapshots and trader balances.
///
/// Callers must read a fresh snapshot after every state-changing trade;
/// quotes computed against an older snapshot are stale.
pub trait MarketReader {
    /// Current snapshot and creator of the market for `content_id`.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::MarketNotFound`] if no market exists.
    fn market_info(&self, content_id: &ContentId) -> Result<MarketInfo, CurveError>;

    /// Shares of `content_id` held by `trader`; zero when none are held.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::MarketNotFound`] if no market exists.
    fn share_balance(&self, content_id: &ContentId, trader: &str) -> Result<Amount, CurveError>;
}
