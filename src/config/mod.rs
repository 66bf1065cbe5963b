//! Deployment configuration for the bonding curve.
//!
//! [`CurveConfig`] holds the constants every market of a deployment
//! shares: issuance, virtual offset, graduation threshold, fee rate and
//! charting parameters.

mod curve_config;

pub use curve_config::{CurveConfig, DEFAULT_CHART_STEPS, FEE_RATE};
