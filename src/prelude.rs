//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use cpmm_sandwich::prelude::*;
//! ```

pub use crate::analysis::{
    FrontrunSolution, FrontrunSolver, FrontrunTarget, GasQuote, SandwichEstimator,
    SandwichOutcome, Termination,
};
pub use crate::config::{PoolConfig, SandwichConfig};
pub use crate::domain::{
    Amount, BasisPoints, FeeTier, Price, Rounding, Slippage, SwapAmounts, SwapKind, SwapPath,
    TokenId, TokenPair, TradeParams, UserPosition,
};
pub use crate::error::{AmmError, Result};
pub use crate::planner::{SandwichPlan, SandwichPlanner};
pub use crate::pools::ConstantProductPool;
pub use crate::traits::{FromConfig, Ledger};
