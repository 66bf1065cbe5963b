//! Ledger view of a single market.

use super::MarketState;

/// Market snapshot together with the account that created it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarketInfo {
    /// Address of the content creator.
    pub creator: String,
    /// Current reserves and graduation flag.
    pub state: MarketState,
}
