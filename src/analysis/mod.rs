//! Slippage analysis, front-run sizing and sandwich estimation.
//!
//! Everything in this module works on pool snapshots and leaves the
//! caller's [`ConstantProductPool`](crate::pools::ConstantProductPool)
//! untouched.

mod frontrun;
mod sandwich;
mod slippage;

pub use frontrun::{
    FrontrunSolution, FrontrunSolver, FrontrunTarget, Termination, DEFAULT_MAX_ITERATIONS,
};
pub use sandwich::{GasQuote, SandwichEstimator, SandwichOutcome};
