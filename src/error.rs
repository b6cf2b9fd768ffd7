//! Unified error types for the constant-product pool and its analytics.
//!
//! All fallible operations across the crate return [`AmmError`] as their
//! error type.  Every error is a precondition failure raised before any
//! state is written, so a failed swap never leaves a pool half-mutated.

use thiserror::Error;

use crate::domain::Amount;

/// Errors produced by pool arithmetic, analytics and the ledger seam.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum AmmError {
    /// One of the reserves is zero at the point a quote or swap is attempted,
    /// or the requested output would drain the reserve.
    #[error("insufficient liquidity")]
    InsufficientLiquidity,

    /// A supplied amount is zero where a positive amount is required, or a
    /// swap would deliver nothing.
    #[error("invalid amount: {0}")]
    InvalidAmount(&'static str),

    /// The path is malformed or not anchored on the required base asset.
    #[error("invalid path: {0}")]
    InvalidPath(&'static str),

    /// A guarded swap would deliver less than the minimum (or cost more
    /// than the maximum) the caller declared.
    #[error("slippage exceeded: computed {computed}, bound {bound}")]
    SlippageExceeded {
        /// Amount the pool would actually deliver or charge.
        computed: Amount,
        /// The caller's declared minimum output or maximum input.
        bound: Amount,
    },

    /// A fixed-point division hit a zero divisor.
    #[error("division by zero")]
    DivisionByZero,

    /// A configuration value is out of range.
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),

    /// A configuration document could not be parsed; carries the parser's
    /// message so the offending key is visible.
    #[error("malformed {kind} configuration: {message}")]
    MalformedConfig {
        /// Which document was being read (`"pool"`, `"sandwich"`).
        kind: &'static str,
        /// The parser's own description of the failure.
        message: String,
    },

    /// The external ledger reported a failure.
    #[error("ledger error: {0}")]
    Ledger(String),
}

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, AmmError>;
