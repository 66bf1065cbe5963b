//! Deployment constants of the bonding curve.

use rust_decimal::Decimal;

use crate::domain::{Amount, BasisPoints, Decimals};
use crate::error::CurveError;

/// Default total share issuance per market (1 billion).
const DEFAULT_TOTAL_ISSUANCE: u64 = 1_000_000_000;

/// Default virtual base reserve seeded at market creation.
const DEFAULT_VIRTUAL_BASE_OFFSET: u64 = 30;

/// Default real base reserve at which a market graduates.
const DEFAULT_GRADUATION_THRESHOLD: u64 = 69;

/// Default minimum supply range shown on a synthetic chart.
const DEFAULT_MIN_CHART_RANGE: u64 = 1_000;

/// Platform fee rate (1%).
pub const FEE_RATE: BasisPoints = BasisPoints::new(100);

/// Default number of synthetic chart intervals.
pub const DEFAULT_CHART_STEPS: u32 = 50;

/// Immutable parameters shared by every market of one deployment.
///
/// # Defaults
///
/// | Parameter | Value |
/// |-----------|-------|
/// | total issuance | 1 000 000 000 shares |
/// | virtual base offset | 30 |
/// | graduation threshold | 69 (real reserve) |
/// | fee | 100 bp |
/// | chart steps | 50 |
/// | minimum chart range | 1 000 shares |
/// | asset decimals | 8 |
///
/// # Validation
///
/// - total issuance and graduation threshold must be positive.
/// - fee must not exceed 100%.
/// - chart steps must be positive.
/// - the minimum chart range must stay below the total issuance.
///
/// # Example
///
/// ```rust
/// use blipp_curve::config::CurveConfig;
/// use blipp_curve::domain::Amount;
///
/// let config = CurveConfig::default()
///     .with_graduation_threshold(Amount::from_units(100))
///     .with_chart_steps(20);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurveConfig {
    total_issuance: Amount,
    virtual_base_offset: Amount,
    graduation_threshold: Amount,
    fee: BasisPoints,
    chart_steps: u32,
    min_chart_range: Amount,
    asset_decimals: Decimals,
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self {
            total_issuance: Amount::from_units(DEFAULT_TOTAL_ISSUANCE),
            virtual_base_offset: Amount::from_units(DEFAULT_VIRTUAL_BASE_OFFSET),
            graduation_threshold: Amount::from_units(DEFAULT_GRADUATION_THRESHOLD),
            fee: FEE_RATE,
            chart_steps: DEFAULT_CHART_STEPS,
            min_chart_range: Amount::from_units(DEFAULT_MIN_CHART_RANGE),
            asset_decimals: Decimals::OCTAS,
        }
    }
}

impl CurveConfig {
    /// Creates a configuration with explicit economics, defaulting the
    /// chart and precision settings.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`CurveConfig::validate`].
    pub fn new(
        total_issuance: Amount,
        virtual_base_offset: Amount,
        graduation_threshold: Amount,
        fee: BasisPoints,
    ) -> Result<Self, CurveError> {
        let config = Self {
            total_issuance,
            virtual_base_offset,
            graduation_threshold,
            fee,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidConfiguration`] describing the first
    /// violated invariant.
    pub fn validate(&self) -> Result<(), CurveError> {
        if self.total_issuance.is_zero() {
            return Err(CurveError::InvalidConfiguration(
                "total issuance must be positive",
            ));
        }
        if self.graduation_threshold.is_zero() {
            return Err(CurveError::InvalidConfiguration(
                "graduation threshold must be positive",
            ));
        }
        if !self.fee.is_valid_percent() {
            return Err(CurveError::InvalidConfiguration("fee exceeds 100%"));
        }
        if self.chart_steps == 0 {
            return Err(CurveError::InvalidConfiguration(
                "chart steps must be positive",
            ));
        }
        if self.min_chart_range >= self.total_issuance {
            return Err(CurveError::InvalidConfiguration(
                "minimum chart range must be below total issuance",
            ));
        }
        // k = offset × issuance must be representable.
        if self
            .virtual_base_offset
            .get()
            .checked_mul(self.total_issuance.get())
            .is_none()
        {
            return Err(CurveError::InvalidConfiguration(
                "initial invariant is not representable",
            ));
        }
        Ok(())
    }

    /// Total share supply of every market.
    pub const fn total_issuance(&self) -> Amount {
        self.total_issuance
    }

    /// Virtual base reserve seeded at creation.
    pub const fn virtual_base_offset(&self) -> Amount {
        self.virtual_base_offset
    }

    /// Real base reserve at which a market graduates.
    pub const fn graduation_threshold(&self) -> Amount {
        self.graduation_threshold
    }

    /// Platform fee rate.
    #[must_use]
    pub const fn fee(&self) -> BasisPoints {
        self.fee
    }

    /// Number of intervals sampled by the synthetic chart.
    #[must_use]
    pub const fn chart_steps(&self) -> u32 {
        self.chart_steps
    }

    /// Minimum supply range shown on a synthetic chart.
    pub const fn min_chart_range(&self) -> Amount {
        self.min_chart_range
    }

    /// Decimal places of raw on-chain units.
    #[must_use]
    pub const fn asset_decimals(&self) -> Decimals {
        self.asset_decimals
    }

    /// Initial price `virtual_base_offset / total_issuance`.
    #[must_use]
    pub fn initial_price(&self) -> Decimal {
        self.virtual_base_offset
            .get()
            .checked_div(self.total_issuance.get())
            .unwrap_or(Decimal::ZERO)
    }

    /// Sets the total issuance.
    #[must_use]
    pub fn with_total_issuance(mut self, total_issuance: Amount) -> Self {
        self.total_issuance = total_issuance;
        self
    }

    /// Sets the virtual base offset.
    #[must_use]
    pub fn with_virtual_base_offset(mut self, offset: Amount) -> Self {
        self.virtual_base_offset = offset;
        self
    }

    /// Sets the graduation threshold.
    #[must_use]
    pub fn with_graduation_threshold(mut self, threshold: Amount) -> Self {
        self.graduation_threshold = threshold;
        self
    }

    /// Sets the fee rate.
    #[must_use]
    pub fn with_fee(mut self, fee: BasisPoints) -> Self {
        self.fee = fee;
        self
    }

    /// Sets the synthetic chart resolution.
    #[must_use]
    pub fn with_chart_steps(mut self, steps: u32) -> Self {
        self.chart_steps = steps;
        self
    }

    /// Sets the minimum synthetic chart range.
    #[must_use]
    pub fn with_min_chart_range(mut self, range: Amount) -> Self {
        self.min_chart_range = range;
        self
    }

    /// Sets the raw-unit precision.
    #[must_use]
    pub fn with_asset_decimals(mut self, decimals: Decimals) -> Self {
        self.asset_decimals = decimals;
        self
    }
}
