//! Direction of a single-hop trade.

use core::fmt;

use super::TokenId;
use crate::error::AmmError;

/// An ordered `[from, to]` trade direction through one pool.
///
/// Unlike [`TokenPair`](super::TokenPair), the order here is the caller's:
/// `from` is the token paid in, `to` the token received.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SwapPath {
    from: TokenId,
    to: TokenId,
}

impl SwapPath {
    /// Creates a path from `from` to `to`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidPath`] if both ends are the same token.
    pub fn new(from: TokenId, to: TokenId) -> Result<Self, AmmError> {
        if from == to {
            return Err(AmmError::InvalidPath("path resolves to the same token twice"));
        }
        Ok(Self { from, to })
    }

    /// Builds a path from a router-style token list.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidPath`] if the list holds fewer than two
    /// tokens, more than two tokens, or the same token twice.
    pub fn from_slice(tokens: &[TokenId]) -> Result<Self, AmmError> {
        match tokens {
            [from, to] => Self::new(from.clone(), to.clone()),
            [] | [_] => Err(AmmError::InvalidPath("path must contain at least two tokens")),
            _ => Err(AmmError::InvalidPath("multi-hop paths are not supported")),
        }
    }

    /// The token paid into the pool.
    #[must_use]
    pub const fn token_in(&self) -> &TokenId {
        &self.from
    }

    /// The token received from the pool.
    #[must_use]
    pub const fn token_out(&self) -> &TokenId {
        &self.to
    }

    /// The opposite direction, used to unwind a position.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            from: self.to.clone(),
            to: self.from.clone(),
        }
    }
}

impl fmt::Display for SwapPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} -> {}]", self.from, self.to)
    }
}
