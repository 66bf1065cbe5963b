//! Pre-trade quotes produced by the pricing engine.

use core::fmt;

use rust_decimal::Decimal;

use super::{Amount, Price};

/// How strongly a trade moves the price, as the trading UI colours it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ImpactSeverity {
    /// `|impact| ≤ 2%`.
    Low,
    /// `2% < |impact| ≤ 5%`.
    Moderate,
    /// `|impact| > 5%`.
    High,
}

impl ImpactSeverity {
    /// Classifies a signed price impact percentage.
    #[must_use]
    pub fn classify(impact_pct: Decimal) -> Self {
        let magnitude = impact_pct.abs();
        if magnitude > Decimal::from(5) {
            Self::High
        } else if magnitude > Decimal::from(2) {
            Self::Moderate
        } else {
            Self::Low
        }
    }
}

/// Advisory estimate for spending `base_amount_in` on shares.
///
/// Quotes carry no identity: they are recomputed on every request and
/// may diverge from on-chain execution if other trades land first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BuyQuote {
    base_amount_in: Amount,
    shares_out: Amount,
    price_per_share: Price,
    price_impact_pct: Decimal,
    fee_amount: Amount,
    new_base_reserve: Amount,
    new_share_reserve: Amount,
}

impl BuyQuote {
    pub(crate) const fn new(
        base_amount_in: Amount,
        shares_out: Amount,
        price_per_share: Price,
        price_impact_pct: Decimal,
        fee_amount: Amount,
        new_base_reserve: Amount,
        new_share_reserve: Amount,
    ) -> Self {
        Self {
            base_amount_in,
            shares_out,
            price_per_share,
            price_impact_pct,
            fee_amount,
            new_base_reserve,
            new_share_reserve,
        }
    }

    /// Settlement coin spent.
    pub const fn base_amount_in(&self) -> Amount {
        self.base_amount_in
    }

    /// Shares received.
    pub const fn shares_out(&self) -> Amount {
        self.shares_out
    }

    /// Effective price `base_amount_in / shares_out`.
    #[must_use]
    pub const fn price_per_share(&self) -> Price {
        self.price_per_share
    }

    /// Deviation of the effective price from the pre-trade spot price, in percent.
    #[must_use]
    pub const fn price_impact_pct(&self) -> Decimal {
        self.price_impact_pct
    }

    /// Platform fee on the input, for display; not deducted from `shares_out`.
    pub const fn fee_amount(&self) -> Amount {
        self.fee_amount
    }

    /// Base reserve after the trade.
    pub const fn new_base_reserve(&self) -> Amount {
        self.new_base_reserve
    }

    /// Share reserve after the trade.
    pub const fn new_share_reserve(&self) -> Amount {
        self.new_share_reserve
    }

    /// Colour band of [`price_impact_pct`](Self::price_impact_pct).
    #[must_use]
    pub fn impact_severity(&self) -> ImpactSeverity {
        ImpactSeverity::classify(self.price_impact_pct)
    }
}

impl fmt::Display for BuyQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BuyQuote(in={}, shares={}, price={}, impact={}%, fee={})",
            self.base_amount_in,
            self.shares_out,
            self.price_per_share,
            self.price_impact_pct.round_dp(2),
            self.fee_amount
        )
    }
}

/// Advisory estimate for selling `shares_in` back to the curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SellQuote {
    shares_in: Amount,
    proceeds_out: Amount,
    price_per_share: Price,
    price_impact_pct: Decimal,
    fee_amount: Amount,
    new_base_reserve: Amount,
    new_share_reserve: Amount,
}

impl SellQuote {
    pub(crate) const fn new(
        shares_in: Amount,
        proceeds_out: Amount,
        price_per_share: Price,
        price_impact_pct: Decimal,
        fee_amount: Amount,
        new_base_reserve: Amount,
        new_share_reserve: Amount,
    ) -> Self {
        Self {
            shares_in,
            proceeds_out,
            price_per_share,
            price_impact_pct,
            fee_amount,
            new_base_reserve,
            new_share_reserve,
        }
    }

    /// Shares sold.
    pub const fn shares_in(&self) -> Amount {
        self.shares_in
    }

    /// Settlement coin received.
    pub const fn proceeds_out(&self) -> Amount {
        self.proceeds_out
    }

    /// Effective price `proceeds_out / shares_in`.
    #[must_use]
    pub const fn price_per_share(&self) -> Price {
        self.price_per_share
    }

    /// Deviation of the effective price from the pre-trade spot price, in
    /// percent (negative for sells).
    #[must_use]
    pub const fn price_impact_pct(&self) -> Decimal {
        self.price_impact_pct
    }

    /// Platform fee on the proceeds, for display; not deducted.
    pub const fn fee_amount(&self) -> Amount {
        self.fee_amount
    }

    /// Base reserve after the trade.
    pub const fn new_base_reserve(&self) -> Amount {
        self.new_base_reserve
    }

    /// Share reserve after the trade.
    pub const fn new_share_reserve(&self) -> Amount {
        self.new_share_reserve
    }

    /// Colour band of [`price_impact_pct`](Self::price_impact_pct).
    #[must_use]
    pub fn impact_severity(&self) -> ImpactSeverity {
        ImpactSeverity::classify(self.price_impact_pct)
    }
}

impl fmt::Display for SellQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SellQuote(shares={}, out={}, price={}, impact={}%, fee={})",
            self.shares_in,
            self.proceeds_out,
            self.price_per_share,
            self.price_impact_pct.round_dp(2),
            self.fee_amount
        )
    }
}
