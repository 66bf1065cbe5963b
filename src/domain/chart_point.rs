//! Points a price chart renders.

use super::{Amount, Price, TradeHistoryPoint};

/// One sample of the theoretical bonding curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurvePoint {
    /// Cumulative shares sold at this sample.
    pub supply_sold: Amount,
    /// Spot price at this sample.
    pub price: Price,
}

/// A chart sample: a real trade when history exists, otherwise a point
/// on the theoretical curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChartPoint {
    /// Executed trade from the history feed.
    Traded(TradeHistoryPoint),
    /// Sample of the constant-product curve.
    Theoretical(CurvePoint),
}

impl ChartPoint {
    /// The price plotted for this point.
    #[must_use]
    pub const fn price(&self) -> Price {
        match self {
            Self::Traded(p) => p.price,
            Self::Theoretical(p) => p.price,
        }
    }
}

impl From<TradeHistoryPoint> for ChartPoint {
    fn from(value: TradeHistoryPoint) -> Self {
        Self::Traded(value)
    }
}

impl From<CurvePoint> for ChartPoint {
    fn from(value: CurvePoint) -> Self {
        Self::Theoretical(value)
    }
}
