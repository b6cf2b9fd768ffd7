//! Generic construction trait for building values from configuration.
//!
//! [`FromConfig`] gives every configurable component one entry point that
//! validates its configuration before anything is built:
//!
//! ```text
//! ConstantProductPool::from_config(&PoolConfig)
//! SandwichEstimator::from_config(&SandwichConfig)
//! ```
//!
//! # Validation Contract
//!
//! Implementations **must** call the config's `validate()` first.  A
//! successfully constructed value is guaranteed to start in a valid state:
//!
//! - The pool's two tokens differ and the base asset is one of them.
//! - Reserves are non-zero and the fee is below 100%.
//! - The safety margin is below 100% and the iteration ceiling is positive.
//!
//! There is no blanket implementation; every component-config pairing is
//! written out explicitly.

use crate::error::AmmError;

/// Construction from a configuration struct, with full validation.
///
/// # Implementors
///
/// - `impl FromConfig<PoolConfig> for ConstantProductPool`
/// - `impl FromConfig<SandwichConfig> for SandwichEstimator`
pub trait FromConfig<C> {
    /// Creates a new instance from `config`.
    ///
    /// The configuration is borrowed so it can be reused, e.g. to rebuild
    /// a pool from the same snapshot.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidConfig`] if any parameter is out of range.
    /// - [`AmmError::InvalidPath`] if the token layout is inconsistent.
    fn from_config(config: &C) -> Result<Self, AmmError>
    where
        Self: Sized;
}
