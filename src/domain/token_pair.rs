//! Canonically ordered pair of distinct tokens.

use core::fmt;

use super::TokenId;
use crate::error::AmmError;

/// Places two tokens into stable `(low, high)` slots by numeric value.
///
/// The result does not depend on argument order.
///
/// # Examples
///
/// ```
/// use cpmm_sandwich::domain::{canonical_order, TokenId};
///
/// let a = TokenId::from(2u64);
/// let b = TokenId::from(1u64);
/// assert_eq!(canonical_order(&a, &b), canonical_order(&b, &a));
/// assert_eq!(canonical_order(&a, &b).0, b);
/// ```
#[must_use]
pub fn canonical_order(token_a: &TokenId, token_b: &TokenId) -> (TokenId, TokenId) {
    if token_a < token_b {
        (token_a.clone(), token_b.clone())
    } else {
        (token_b.clone(), token_a.clone())
    }
}

/// A pair of distinct tokens stored in canonical order.
///
/// `low() < high()` always holds, so `(A, B)` and `(B, A)` describe the
/// same pool.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TokenPair {
    low: TokenId,
    high: TokenId,
}

impl TokenPair {
    /// Creates a new canonically-ordered `TokenPair`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidPath`] if both tokens are the same.
    pub fn new(token_a: TokenId, token_b: TokenId) -> Result<Self, AmmError> {
        if token_a == token_b {
            return Err(AmmError::InvalidPath(
                "token pair requires two distinct tokens",
            ));
        }
        let (low, high) = canonical_order(&token_a, &token_b);
        Ok(Self { low, high })
    }

    /// Returns the numerically lower token.
    #[must_use]
    pub const fn low(&self) -> &TokenId {
        &self.low
    }

    /// Returns the numerically higher token.
    #[must_use]
    pub const fn high(&self) -> &TokenId {
        &self.high
    }

    /// Returns `true` if the given token is part of this pair.
    #[must_use]
    pub fn contains(&self, token: &TokenId) -> bool {
        self.low == *token || self.high == *token
    }

    /// Returns the counterpart of `token` in this pair.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidPath`] if `token` is not in the pair.
    pub fn other(&self, token: &TokenId) -> Result<&TokenId, AmmError> {
        if *token == self.low {
            Ok(&self.high)
        } else if *token == self.high {
            Ok(&self.low)
        } else {
            Err(AmmError::InvalidPath("token is not part of this pair"))
        }
    }
}

impl fmt::Display for TokenPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.low, self.high)
    }
}
