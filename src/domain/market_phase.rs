//! Externally observed lifecycle of a market.

use core::fmt;

use super::MarketState;

/// Lifecycle of a video's market as recorded by the ledger.
///
/// The engine never drives these transitions; it only reports them.
///
/// ```text
/// Uninitialized ──initialize──▶ Active ──real reserve ≥ threshold──▶ Graduated
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MarketPhase {
    /// No market has been created for the content yet.
    Uninitialized,
    /// Trading on the bonding curve, not yet graduated.
    Active,
    /// Real reserves crossed the graduation threshold.
    Graduated,
}

impl MarketPhase {
    /// Derives the phase from an optional ledger snapshot.
    #[must_use]
    pub fn of(state: Option<&MarketState>) -> Self {
        match state {
            None => Self::Uninitialized,
            Some(s) if s.graduated() => Self::Graduated,
            Some(_) => Self::Active,
        }
    }

    /// Returns `true` if trades are executed on the bonding curve.
    #[must_use]
    pub const fn is_trading(&self) -> bool {
        matches!(self, Self::Active)
    }
}

impl fmt::Display for MarketPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Uninitialized => "uninitialized",
            Self::Active => "active",
            Self::Graduated => "graduated",
        };
        f.write_str(s)
    }
}
