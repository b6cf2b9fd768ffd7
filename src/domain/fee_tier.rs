//! Swap fee retained by the pool, in basis points of the input.

use core::fmt;

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use super::basis_points::MAX_BPS;
use super::BasisPoints;
use crate::error::AmmError;

/// The fee a constant-product pool keeps from every input amount.
///
/// The pool formulas multiply the input by [`multiplier`](Self::multiplier)
/// and the input-side reserve by [`DENOMINATOR`](Self::DENOMINATOR).  For
/// the 30 bp tier this is `9_970 / 10_000`, which truncates exactly like the
/// on-chain `997 / 1_000` because numerator and denominator share the
/// factor 10.
///
/// # Examples
///
/// ```
/// use cpmm_sandwich::domain::FeeTier;
///
/// let tier = FeeTier::UNISWAP_V2;
/// assert_eq!(tier.basis_points().get(), 30);
/// assert_eq!(tier.multiplier(), 9_970);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeeTier(BasisPoints);

impl FeeTier {
    /// Denominator the reserve side is scaled by.
    pub const DENOMINATOR: u32 = MAX_BPS;

    /// 0.30% — the fixed fee of a Uniswap V2 pair.
    pub const UNISWAP_V2: Self = Self(BasisPoints::new(30));

    /// 0.05% fee.
    pub const TIER_0_05_PERCENT: Self = Self(BasisPoints::new(5));

    /// 1.00% fee.
    pub const TIER_1_00_PERCENT: Self = Self(BasisPoints::new(100));

    /// Creates a new `FeeTier` from arbitrary [`BasisPoints`].
    pub const fn new(basis_points: BasisPoints) -> Self {
        Self(basis_points)
    }

    /// Returns the underlying [`BasisPoints`].
    #[must_use]
    pub const fn basis_points(&self) -> BasisPoints {
        self.0
    }

    /// `10_000 − fee_bps`: the share of the input that reaches the curve.
    #[must_use]
    pub const fn multiplier(&self) -> u32 {
        MAX_BPS.saturating_sub(self.0.get())
    }

    /// [`multiplier`](Self::multiplier) as a big integer.
    #[must_use]
    pub fn multiplier_big(&self) -> BigUint {
        BigUint::from(self.multiplier())
    }

    /// [`DENOMINATOR`](Self::DENOMINATOR) as a big integer.
    #[must_use]
    pub fn denominator_big() -> BigUint {
        BigUint::from(Self::DENOMINATOR)
    }

    /// Checks the fee leaves a non-zero share of the input.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfig`] if the fee is 100% or more.
    pub const fn validate(&self) -> crate::error::Result<()> {
        if self.0.get() >= MAX_BPS {
            return Err(AmmError::InvalidConfig("fee must be below 100%"));
        }
        Ok(())
    }
}

impl Default for FeeTier {
    fn default() -> Self {
        Self::UNISWAP_V2
    }
}

impl fmt::Display for FeeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FeeTier({})", self.0)
    }
}
