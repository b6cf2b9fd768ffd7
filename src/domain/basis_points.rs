//! Basis-point representation for percentages.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::{Amount, Rounding};
use crate::error::AmmError;

/// Value that represents 100%.
pub(crate) const MAX_BPS: u32 = 10_000;

/// A percentage expressed in basis points (1 bp = 0.01%, 10 000 bp = 100%).
///
/// Used for slippage tolerances, safety haircuts and fee tiers.  Applying
/// a whole-percent value `p` as `from_percent(p)` gives exactly the same
/// truncated result as `amount * (100 - p) / 100`, because both numerator
/// and denominator are scaled by the same factor.
///
/// # Examples
///
/// ```
/// use cpmm_sandwich::domain::{Amount, BasisPoints};
///
/// let one_percent = BasisPoints::from_percent(1);
/// assert_eq!(one_percent.get(), 100);
/// let Ok(less) = one_percent.discount(&Amount::from(1_999u32)) else { panic!() };
/// assert_eq!(less, Amount::from(1_979u32));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct BasisPoints(u32);

impl BasisPoints {
    /// Zero basis points (0%).
    pub const ZERO: Self = Self(0);

    /// 100% expressed in basis points.
    pub const MAX_PERCENT: Self = Self(MAX_BPS);

    /// Creates a new `BasisPoints` from a raw `u32` value.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Creates a `BasisPoints` from a whole percentage (`1` → 100 bp).
    pub const fn from_percent(percent: u32) -> Self {
        Self(percent.saturating_mul(100))
    }

    /// Returns the underlying `u32` value.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Computes `amount × (10_000 − self) / 10_000`, rounded down.
    ///
    /// This is the "accept no less than" adjustment applied to outputs.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfig`] if the value exceeds 100%.
    pub fn discount(&self, amount: &Amount) -> crate::error::Result<Amount> {
        let complement = MAX_BPS
            .checked_sub(self.0)
            .ok_or(AmmError::InvalidConfig("basis points exceed 100%"))?;
        amount
            .mul_div(complement, MAX_BPS, Rounding::Down)
            .ok_or(AmmError::DivisionByZero)
    }

    /// Computes `amount × (10_000 + self) / 10_000`, rounded down.
    ///
    /// This is the "pay no more than" adjustment applied to inputs.
    pub fn premium(&self, amount: &Amount) -> Amount {
        amount
            .mul_div(MAX_BPS.saturating_add(self.0), MAX_BPS, Rounding::Down)
            .unwrap_or_else(Amount::zero)
    }
}

impl fmt::Display for BasisPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}bp", self.0)
    }
}
