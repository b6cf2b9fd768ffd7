//! Fixed-point price-impact ratio.

use core::fmt;
use core::ops::Add;

use num_bigint::BigUint;

use super::price::{fmt_fixed, scale};
use super::{Price, Rounding};
use crate::error::AmmError;

/// `priceBefore / priceAfter` scaled by `10^18`.
///
/// [`Slippage::one`] means the price did not move; values above it mean the
/// price moved against the side being measured.  Slippages compose by
/// multiplication and division in the same fixed-point domain and are never
/// converted to floating point.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Slippage(BigUint);

impl Slippage {
    /// No price movement (`10^18`).
    #[must_use]
    pub fn one() -> Self {
        Self(scale())
    }

    /// Wraps an already-scaled value.
    #[must_use]
    pub const fn from_raw(raw: BigUint) -> Self {
        Self(raw)
    }

    /// Returns the scaled integer.
    #[must_use]
    pub const fn raw(&self) -> &BigUint {
        &self.0
    }

    /// `before × 10^18 / after`, truncated.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::DivisionByZero`] if `after` truncated to zero.
    pub fn between(before: &Price, after: &Price) -> Result<Self, AmmError> {
        let scaled = before.raw() * scale();
        Rounding::Down
            .divide(&scaled, after.raw())
            .map(Self)
            .ok_or(AmmError::DivisionByZero)
    }

    /// `10^36 / self`: the ratio seen from the opposite direction.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::DivisionByZero`] for a zero slippage.
    pub fn inverted(&self) -> Result<Self, AmmError> {
        let unit = scale();
        Rounding::Down
            .divide(&(&unit * &unit), &self.0)
            .map(Self)
            .ok_or(AmmError::DivisionByZero)
    }

    /// Checked subtraction. Returns `None` on underflow.
    #[must_use]
    pub fn checked_sub(&self, other: &Self) -> Option<Self> {
        if other.0 > self.0 {
            return None;
        }
        Some(Self(&self.0 - &other.0))
    }

    /// The part of the ratio above [`Slippage::one`], or `None` if the
    /// price did not move adversely.
    #[must_use]
    pub fn excess(&self) -> Option<BigUint> {
        self.checked_sub(&Self::one())
            .map(|s| s.0)
            .filter(|v| *v > BigUint::default())
    }

    /// Returns `true` if the price moved against the measured side.
    #[must_use]
    pub fn is_adverse(&self) -> bool {
        self.0 > scale()
    }

    /// `|self − target| × 10^18 / target`: relative error as a fixed-point
    /// fraction (`10^13` is 0.001%).
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::DivisionByZero`] for a zero target.
    pub fn relative_distance(&self, target: &Self) -> Result<Self, AmmError> {
        let diff = if self.0 >= target.0 {
            &self.0 - &target.0
        } else {
            &target.0 - &self.0
        };
        Rounding::Down
            .divide(&(diff * scale()), &target.0)
            .map(Self)
            .ok_or(AmmError::DivisionByZero)
    }
}

impl Add for &Slippage {
    type Output = Slippage;

    fn add(self, rhs: Self) -> Slippage {
        Slippage(&self.0 + &rhs.0)
    }
}

impl fmt::Display for Slippage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_fixed(&self.0, f)
    }
}
