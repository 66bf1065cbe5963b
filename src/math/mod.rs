//! Decimal arithmetic utilities for curve calculations.
//!
//! This module provides [`CheckedArithmetic`] for overflow-safe operations
//! on domain types and [`div_round`] for directed division at a fixed
//! scale.

mod checked;
mod rounding;

pub use checked::{CheckedArithmetic, QUOTE_SCALE};
pub use rounding::div_round;
