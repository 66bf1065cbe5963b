//! Construction from deployment constants.
//!
//! [`FromConfig`] is the uniform way to build a component from a
//! [`CurveConfig`](crate::config::CurveConfig):
//!
//! ```text
//! BondingCurveEngine::from_config(&config)
//! InMemoryLedger::from_config(&config)
//! ```
//!
//! Implementations **must** validate the configuration.  A successfully
//! constructed value is guaranteed to price with consistent constants.

use crate::error::CurveError;

/// Builds a component from a configuration, validating it first.
///
/// # Implementors
///
/// - `impl FromConfig<CurveConfig> for BondingCurveEngine`
/// - `impl FromConfig<CurveConfig> for InMemoryLedger`
///
/// # Errors
///
/// Returns [`CurveError::InvalidConfiguration`] if the configuration is
/// inconsistent.
pub trait FromConfig<C> {
    /// Creates a new instance from `config`.
    ///
    /// # Errors
    ///
    /// - [`CurveError::InvalidConfiguration`] if any parameter is out of
    ///   range.
    fn from_config(config: &C) -> Result<Self, CurveError>
    where
        Self: Sized;
}
