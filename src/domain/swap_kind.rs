//! The four base-asset swap shapes a router exposes.

use core::fmt;

/// Which side of a base-asset swap is fixed and which side is bounded.
///
/// The base asset is the pool's designated native side (wrapped ether on
/// most chains).  Each variant corresponds to one router entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum SwapKind {
    /// Fixed base input, minimum token output.
    ExactBaseForTokens = 0,
    /// Exact token output, maximum base input.
    BaseForExactTokens = 1,
    /// Fixed token input, minimum base output.
    ExactTokensForBase = 2,
    /// Exact base output, maximum token input.
    TokensForExactBase = 3,
}

impl SwapKind {
    /// Returns `true` when the input amount is the fixed side.
    #[must_use]
    pub const fn is_exact_input(&self) -> bool {
        matches!(self, Self::ExactBaseForTokens | Self::ExactTokensForBase)
    }

    /// Returns `true` when the base asset is paid in (path starts at base).
    #[must_use]
    pub const fn base_is_input(&self) -> bool {
        matches!(self, Self::ExactBaseForTokens | Self::BaseForExactTokens)
    }
}

impl fmt::Display for SwapKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExactBaseForTokens => write!(f, "swapExactBaseForTokens"),
            Self::BaseForExactTokens => write!(f, "swapBaseForExactTokens"),
            Self::ExactTokensForBase => write!(f, "swapExactTokensForBase"),
            Self::TokensForExactBase => write!(f, "swapTokensForExactBase"),
        }
    }
}
