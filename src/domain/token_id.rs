//! Numerically ordered token identifier.

use core::fmt;
use core::str::FromStr;

use num_bigint::BigUint;
use num_traits::Num;
use serde::{Deserialize, Serialize};

use crate::error::AmmError;

/// Identifies a token by an integer value.
///
/// Tokens arrive either as numbers or as strings (`0x`-prefixed addresses,
/// plain decimals).  All of them parse into one [`BigUint`], and ordering
/// is numeric, which is exactly how a pair factory sorts its two tokens.
///
/// # Examples
///
/// ```
/// use cpmm_sandwich::domain::TokenId;
///
/// let Ok(hex) = "0x0a".parse::<TokenId>() else { panic!() };
/// let Ok(dec) = "10".parse::<TokenId>() else { panic!() };
/// assert_eq!(hex, dec);
/// assert!(TokenId::from(9u64) < hex);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TokenId(BigUint);

impl TokenId {
    /// Creates a `TokenId` from a raw integer.
    #[must_use]
    pub const fn new(value: BigUint) -> Self {
        Self(value)
    }

    /// Returns the numeric value used for ordering.
    #[must_use]
    pub const fn value(&self) -> &BigUint {
        &self.0
    }
}

impl From<u64> for TokenId {
    fn from(value: u64) -> Self {
        Self(BigUint::from(value))
    }
}

impl From<u128> for TokenId {
    fn from(value: u128) -> Self {
        Self(BigUint::from(value))
    }
}

impl FromStr for TokenId {
    type Err = AmmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
            Some(hex) => BigUint::from_str_radix(hex, 16),
            None => BigUint::from_str_radix(s, 10),
        };
        parsed
            .map(Self)
            .map_err(|_| AmmError::InvalidPath("token identifier is not an integer"))
    }
}

impl TryFrom<String> for TokenId {
    type Error = AmmError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TokenId> for String {
    fn from(value: TokenId) -> Self {
        value.to_string()
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", self.0.to_str_radix(16))
    }
}
