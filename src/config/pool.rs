//! Configuration for a Constant Product pool snapshot.

use serde::{Deserialize, Serialize};

use crate::domain::{Amount, FeeTier, TokenId};
use crate::error::AmmError;

/// Configuration for a Constant Product pool (`x · y = k`).
///
/// Reserves are given in the caller's `token_a` / `token_b` order; the pool
/// maps them to canonical slots on construction.
///
/// # Derived Values
///
/// - Initial invariant: `k = reserve_a × reserve_b`
/// - Spot price of `a → b`: `reserve_b × 10^18 / reserve_a`
///
/// # Validation
///
/// - `token_a` and `token_b` must differ.
/// - `base_asset` must be one of them.
/// - Both reserves must be non-zero.
/// - The fee must be below 100%.
///
/// # TOML
///
/// ```toml
/// token_a = "0xc0"
/// token_b = "0x0a"
/// base_asset = "0xc0"
/// reserve_a = "100000000000000000000"
/// reserve_b = "200000000000000000000000"
/// fee_tier = 30
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PoolConfig {
    /// First token of the pair.
    pub token_a: TokenId,
    /// Second token of the pair.
    pub token_b: TokenId,
    /// The native asset the sandwich starts and ends in.
    pub base_asset: TokenId,
    /// Reserve of `token_a`.
    pub reserve_a: Amount,
    /// Reserve of `token_b`.
    pub reserve_b: Amount,
    /// Swap fee; defaults to 30 bp.
    #[serde(default)]
    pub fee_tier: FeeTier,
}

impl PoolConfig {
    /// Creates a new `PoolConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfig`] if any invariant is violated.
    pub fn new(
        token_a: TokenId,
        token_b: TokenId,
        base_asset: TokenId,
        reserve_a: Amount,
        reserve_b: Amount,
        fee_tier: FeeTier,
    ) -> Result<Self, AmmError> {
        let config = Self {
            token_a,
            token_b,
            base_asset,
            reserve_a,
            reserve_b,
            fee_tier,
        };
        config.validate()?;
        Ok(config)
    }

    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// - [`AmmError::MalformedConfig`] if the document does not parse.
    /// - [`AmmError::InvalidConfig`] if it fails [`validate`](Self::validate).
    pub fn from_toml_str(input: &str) -> Result<Self, AmmError> {
        let config: Self = toml::from_str(input).map_err(|err| {
            tracing::debug!(%err, "rejected pool configuration");
            AmmError::MalformedConfig {
                kind: "pool",
                message: err.message().to_string(),
            }
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfig`] naming the first violated rule.
    pub fn validate(&self) -> Result<(), AmmError> {
        if self.token_a == self.token_b {
            return Err(AmmError::InvalidConfig("pool tokens must differ"));
        }
        if self.base_asset != self.token_a && self.base_asset != self.token_b {
            return Err(AmmError::InvalidConfig("base asset must be one of the pool tokens"));
        }
        if self.reserve_a.is_zero() || self.reserve_b.is_zero() {
            return Err(AmmError::InvalidConfig("pool reserves must be non-zero"));
        }
        self.fee_tier.validate()
    }
}
