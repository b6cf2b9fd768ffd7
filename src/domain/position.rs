//! A pending trade as declared by the trader.

use super::{Amount, SwapKind, SwapPath};

/// A victim's pending base-for-token trade and the bounds it authorised.
///
/// The bounded side (`amount_out_min` or `amount_in_max`) is what the
/// trader's own guard enforces on-chain; a front-runner may move the
/// price until exactly that bound is reached.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum UserPosition {
    /// Fixed input, accepts no less than `amount_out_min`.
    ExactInput {
        /// Base amount paid in.
        amount_in: Amount,
        /// Lowest token output the trader accepts.
        amount_out_min: Amount,
        /// Trade direction, starting at the base asset.
        path: SwapPath,
    },
    /// Fixed output, pays no more than `amount_in_max`.
    ExactOutput {
        /// Highest base amount the trader pays.
        amount_in_max: Amount,
        /// Token amount requested.
        amount_out: Amount,
        /// Trade direction, starting at the base asset.
        path: SwapPath,
    },
}

impl UserPosition {
    /// Returns the trade direction.
    #[must_use]
    pub const fn path(&self) -> &SwapPath {
        match self {
            Self::ExactInput { path, .. } | Self::ExactOutput { path, .. } => path,
        }
    }

    /// The input side as declared: `amount_in` or `amount_in_max`.
    pub const fn declared_in(&self) -> &Amount {
        match self {
            Self::ExactInput { amount_in, .. } => amount_in,
            Self::ExactOutput { amount_in_max, .. } => amount_in_max,
        }
    }

    /// The output side as declared: `amount_out_min` or `amount_out`.
    pub const fn declared_out(&self) -> &Amount {
        match self {
            Self::ExactInput { amount_out_min, .. } => amount_out_min,
            Self::ExactOutput { amount_out, .. } => amount_out,
        }
    }

    /// The router call the trader submits.
    #[must_use]
    pub const fn kind(&self) -> SwapKind {
        match self {
            Self::ExactInput { .. } => SwapKind::ExactBaseForTokens,
            Self::ExactOutput { .. } => SwapKind::BaseForExactTokens,
        }
    }
}
