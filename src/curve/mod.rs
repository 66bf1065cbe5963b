//! Bonding-curve pricing: quotes, spot metrics and the theoretical chart.
//!
//! The free functions in [`pricing`] and [`synthetic`] take every
//! parameter explicitly.  [`BondingCurveEngine`] binds them to one
//! deployment's [`CurveConfig`](crate::config::CurveConfig).
//!
//! | Operation | Function |
//! |-----------|----------|
//! | Buy quote | [`quote_buy`] |
//! | Sell quote | [`quote_sell`] |
//! | Spot price | [`current_price`] |
//! | Market cap | [`market_cap`] |
//! | Graduation progress | [`graduation_progress`] |
//! | Theoretical chart | [`synthetic_curve`] |

mod engine;
pub mod pricing;
pub mod synthetic;

#[cfg(test)]
mod proptest_properties;

pub use engine::BondingCurveEngine;
pub use pricing::{current_price, graduation_progress, market_cap, quote_buy, quote_sell};
pub use synthetic::{synthetic_curve, SyntheticCurve};
