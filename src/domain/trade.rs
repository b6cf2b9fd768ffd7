//! Router call parameters handed to the ledger.

use super::{Amount, SwapKind, SwapPath};

/// Everything needed to submit (or gas-estimate) one router swap.
///
/// `amount_in` / `amount_out` carry the fixed side and the bound, in the
/// meaning [`SwapKind`] gives them: for `ExactBaseForTokens`,
/// `amount_out` is the minimum output.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TradeParams {
    /// Router entry point.
    pub kind: SwapKind,
    /// Exact or maximum input.
    pub amount_in: Amount,
    /// Exact or minimum output.
    pub amount_out: Amount,
    /// Trade direction.
    pub path: SwapPath,
    /// Unix timestamp after which the swap must revert.
    pub deadline: u64,
}
