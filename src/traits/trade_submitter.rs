//! Trade execution against the ledger.

use crate::domain::{Amount, ContentId, TradeReceipt};
use crate::error::CurveError;

/// Executes trades and reports what settled.
///
/// The receipt reflects the ledger's own arithmetic; a quote shown
/// beforehand is only an estimate.
pub trait TradeSubmitter {
    /// Spends `base_amount_in` coin on shares of `content_id`.
    ///
    /// # Errors
    ///
    /// - [`CurveError::MarketNotFound`] if no market exists.
    /// - [`CurveError::InvalidMarketState`] if the market no longer
    ///   trades on the curve.
    /// - Any quote error for the requested amount.
    fn buy(
        &mut self,
        content_id: &ContentId,
        trader: &str,
        base_amount_in: Amount,
    ) -> Result<TradeReceipt, CurveError>;

    /// Sells `shares_in` shares of `content_id` back to the curve.
    ///
    /// # Errors
    ///
    /// - [`CurveError::MarketNotFound`] if no market exists.
    /// - [`CurveError::InsufficientBalance`] if `trader` holds fewer than
    ///   `shares_in` shares.
    /// - Any quote error for the requested amount.
    fn sell(
        &mut self,
        content_id: &ContentId,
        trader: &str,
        shares_in: Amount,
    ) -> Result<TradeReceipt, CurveError>;
}
