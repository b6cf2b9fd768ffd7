//! Raw token amount backed by an arbitrary-precision unsigned integer.

use core::fmt;
use core::ops::{Add, Mul};
use core::str::FromStr;

use num_bigint::BigUint;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};

use super::Rounding;
use crate::error::AmmError;

/// A raw token amount in the smallest unit (wei or equivalent).
///
/// `Amount` never interprets decimals and never overflows: on-chain
/// reserves of `10^23` multiplied by fee factors and other reserves easily
/// exceed `u128`, so the value is a [`BigUint`].
///
/// Addition and multiplication are total.  Subtraction and division are
/// checked and return `None` on underflow or a zero divisor.
///
/// Serialized as a decimal string so that TOML and JSON keep full precision.
///
/// # Examples
///
/// ```
/// use cpmm_sandwich::domain::{Amount, Rounding};
///
/// let a = Amount::from(7u32);
/// let b = Amount::from(2u32);
/// assert_eq!(a.checked_div(&b, Rounding::Down), Some(Amount::from(3u32)));
/// assert_eq!(a.checked_div(&b, Rounding::Up), Some(Amount::from(4u32)));
/// assert_eq!(b.checked_sub(&a), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
#[must_use]
pub struct Amount(BigUint);

impl Amount {
    /// Creates a new `Amount` from a raw [`BigUint`].
    pub const fn new(value: BigUint) -> Self {
        Self(value)
    }

    /// Zero amount.
    pub fn zero() -> Self {
        Self(BigUint::zero())
    }

    /// The smallest positive amount (one wei).
    pub fn one() -> Self {
        Self(BigUint::one())
    }

    /// `whole × 10^decimals`, e.g. `Amount::from_units(100, 18)` for 100 ether.
    pub fn from_units(whole: u64, decimals: u32) -> Self {
        Self(BigUint::from(whole) * BigUint::from(10u32).pow(decimals))
    }

    /// Returns a reference to the underlying integer.
    #[must_use]
    pub const fn get(&self) -> &BigUint {
        &self.0
    }

    /// Consumes the amount and returns the underlying integer.
    #[must_use]
    pub fn into_inner(self) -> BigUint {
        self.0
    }

    /// Returns `true` if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checked subtraction. Returns `None` on underflow.
    #[must_use]
    pub fn checked_sub(&self, other: &Self) -> Option<Self> {
        if other.0 > self.0 {
            return None;
        }
        Some(Self(&self.0 - &other.0))
    }

    /// Checked division with explicit rounding direction.
    ///
    /// Returns `None` if `divisor` is zero.
    #[must_use]
    pub fn checked_div(&self, divisor: &Self, rounding: Rounding) -> Option<Self> {
        rounding.divide(&self.0, &divisor.0).map(Self)
    }

    /// `self × numerator / denominator` with the given rounding.
    ///
    /// Returns `None` if `denominator` is zero.
    #[must_use]
    pub fn mul_div(&self, numerator: u32, denominator: u32, rounding: Rounding) -> Option<Self> {
        let product = &self.0 * BigUint::from(numerator);
        rounding.divide(&product, &BigUint::from(denominator)).map(Self)
    }
}

impl From<u32> for Amount {
    fn from(value: u32) -> Self {
        Self(BigUint::from(value))
    }
}

impl From<u64> for Amount {
    fn from(value: u64) -> Self {
        Self(BigUint::from(value))
    }
}

impl From<u128> for Amount {
    fn from(value: u128) -> Self {
        Self(BigUint::from(value))
    }
}

impl From<BigUint> for Amount {
    fn from(value: BigUint) -> Self {
        Self(value)
    }
}

impl FromStr for Amount {
    type Err = AmmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.trim().replace('_', "");
        BigUint::from_str(&digits)
            .map(Self)
            .map_err(|_| AmmError::InvalidAmount("amount is not a decimal integer"))
    }
}

impl TryFrom<String> for Amount {
    type Error = AmmError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Amount> for String {
    fn from(value: Amount) -> Self {
        value.0.to_str_radix(10)
    }
}

impl Add for &Amount {
    type Output = Amount;

    fn add(self, rhs: Self) -> Amount {
        Amount(&self.0 + &rhs.0)
    }
}

impl Add for Amount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Mul for &Amount {
    type Output = Amount;

    fn mul(self, rhs: Self) -> Amount {
        Amount(&self.0 * &rhs.0)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
