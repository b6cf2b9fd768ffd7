//! Explicit rounding direction for integer division.

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::Zero;

/// Rounding direction for every division performed on domain amounts.
///
/// The pool's forward formula floors and its inverse formula rounds up;
/// keeping the direction explicit at every call site makes that asymmetry
/// visible.
///
/// # Examples
///
/// ```
/// use cpmm_sandwich::domain::Rounding;
/// use num_bigint::BigUint;
///
/// let n = BigUint::from(7u32);
/// let d = BigUint::from(2u32);
/// assert_eq!(Rounding::Down.divide(&n, &d), Some(BigUint::from(3u32)));
/// assert_eq!(Rounding::Up.divide(&n, &d), Some(BigUint::from(4u32)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// Round towards positive infinity (ceiling).
    Up,
    /// Round towards zero (floor).
    Down,
}

impl Rounding {
    /// Returns `true` if this is [`Rounding::Up`].
    #[must_use]
    pub const fn is_up(&self) -> bool {
        matches!(self, Self::Up)
    }

    /// Returns `true` if this is [`Rounding::Down`].
    #[must_use]
    pub const fn is_down(&self) -> bool {
        matches!(self, Self::Down)
    }

    /// Divides `numerator` by `denominator` in this direction.
    ///
    /// Returns `None` for a zero denominator.
    #[must_use]
    pub fn divide(&self, numerator: &BigUint, denominator: &BigUint) -> Option<BigUint> {
        if denominator.is_zero() {
            return None;
        }
        match self {
            Self::Down => Some(numerator / denominator),
            Self::Up => Some(numerator.div_ceil(denominator)),
        }
    }
}
