//! Sandwich profit and gas estimator.
//!
//! Replays front-run, victim and back-run on a scratch copy of the pool:
//!
//! 1. Solve the front-run and haircut both legs by the safety margin.
//! 2. Buy with the front-run (`swapExactBaseForTokens`, min-out guarded).
//! 3. Replay the victim's own router call with its own guard.
//! 4. Sell every front-run token back to the base asset.
//! 5. `profit = backrunOut − frontrunIn − gasFees`.
//!
//! A negative profit is advisory: the sandwich is not worth sending at the
//! quoted gas price.

use num_bigint::BigInt;

use super::frontrun::{FrontrunSolution, FrontrunSolver, FrontrunTarget};
use crate::config::SandwichConfig;
use crate::domain::{Amount, BasisPoints, Price, SwapAmounts, UserPosition};
use crate::error::AmmError;
use crate::pools::ConstantProductPool;
use crate::traits::FromConfig;

/// Gas units and price used to net the sandwich's fees.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GasQuote {
    /// Estimated gas units of the front-run.
    pub frontrun_gas: u64,
    /// Estimated gas units of the back-run; `None` reuses the front-run estimate.
    pub backrun_gas: Option<u64>,
    /// Price per gas unit, in base-asset units.
    pub gas_price: Amount,
}

impl GasQuote {
    /// Quote that assumes both legs cost `frontrun_gas`.
    pub const fn new(frontrun_gas: u64, gas_price: Amount) -> Self {
        Self {
            frontrun_gas,
            backrun_gas: None,
            gas_price,
        }
    }

    /// Sets an explicit back-run estimate.
    #[must_use]
    pub fn with_backrun_gas(mut self, backrun_gas: u64) -> Self {
        self.backrun_gas = Some(backrun_gas);
        self
    }

    /// `(frontrun + backrun) × gas_price`.
    pub fn total_fee(&self) -> Amount {
        let backrun = self.backrun_gas.unwrap_or(self.frontrun_gas);
        let units = u128::from(self.frontrun_gas) + u128::from(backrun);
        &Amount::from(units) * &self.gas_price
    }
}

/// Every leg of a simulated sandwich and its net result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SandwichOutcome {
    /// The solver's unadjusted answer.
    pub solution: FrontrunSolution,
    /// Front-run as executed (haircut input, realised output).
    pub frontrun: SwapAmounts,
    /// Victim trade as executed after the front-run.
    pub victim: SwapAmounts,
    /// Back-run selling the whole front-run position.
    pub backrun: SwapAmounts,
    /// Gas fees charged against the profit.
    pub gas_fees: Amount,
    /// `backrun.out − frontrun.in − gas_fees`, may be negative.
    pub profit: BigInt,
    /// Spot price of the victim's path before the front-run.
    pub price_before: Price,
    /// Spot price of the victim's path right after the victim trade.
    pub price_after_victim: Price,
}

impl SandwichOutcome {
    /// `true` when the sandwich nets a strictly positive amount.
    #[must_use]
    pub fn is_profitable(&self) -> bool {
        self.profit > BigInt::default()
    }

    /// Profit before gas.
    #[must_use]
    pub fn gross_profit(&self) -> BigInt {
        signed(self.backrun.amount_out()) - signed(self.frontrun.amount_in())
    }
}

fn signed(amount: &Amount) -> BigInt {
    BigInt::from(amount.get().clone())
}

/// Solves and simulates sandwiches against a pool snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SandwichEstimator {
    solver: FrontrunSolver,
    target: FrontrunTarget,
    safety_margin: BasisPoints,
}

impl Default for SandwichEstimator {
    fn default() -> Self {
        Self::new(
            FrontrunSolver::default(),
            FrontrunTarget::Full,
            BasisPoints::from_percent(1),
        )
    }
}

impl SandwichEstimator {
    /// Creates an estimator from its parts.
    #[must_use]
    pub const fn new(
        solver: FrontrunSolver,
        target: FrontrunTarget,
        safety_margin: BasisPoints,
    ) -> Self {
        Self {
            solver,
            target,
            safety_margin,
        }
    }

    /// The haircut applied to the front-run legs.
    #[must_use]
    pub const fn safety_margin(&self) -> BasisPoints {
        self.safety_margin
    }

    /// The target derivation in use.
    #[must_use]
    pub const fn target(&self) -> FrontrunTarget {
        self.target
    }

    /// Sizes the front-run against `position`.
    ///
    /// # Errors
    ///
    /// Any error of [`FrontrunSolver::solve_for`].
    pub fn solve_frontrun(
        &self,
        pool: &ConstantProductPool,
        position: &UserPosition,
    ) -> Result<FrontrunSolution, AmmError> {
        self.solver.solve_for(pool, position, self.target)
    }

    /// The haircut front-run legs as they would be submitted.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfig`] if the margin exceeds 100%.
    pub fn submitted_frontrun(&self, solution: &FrontrunSolution) -> Result<SwapAmounts, AmmError> {
        solution.with_safety_margin(self.safety_margin)
    }

    /// Solves the front-run and simulates the whole sandwich.
    ///
    /// # Errors
    ///
    /// Any error of [`solve_frontrun`](Self::solve_frontrun) or
    /// [`simulate`](Self::simulate).
    pub fn estimate(
        &self,
        pool: &ConstantProductPool,
        position: &UserPosition,
        gas: &GasQuote,
    ) -> Result<SandwichOutcome, AmmError> {
        let solution = self.solve_frontrun(pool, position)?;
        self.simulate(pool, position, solution, gas)
    }

    /// Simulates front-run, victim and back-run for an already solved
    /// front-run.  `pool` itself is never modified.
    ///
    /// # Errors
    ///
    /// - [`AmmError::SlippageExceeded`] if the victim's guard would revert
    ///   after the front-run.
    /// - [`AmmError::InvalidAmount`] if the haircut front-run rounds to zero.
    /// - Any swap error of the pool.
    pub fn simulate(
        &self,
        pool: &ConstantProductPool,
        position: &UserPosition,
        solution: FrontrunSolution,
        gas: &GasQuote,
    ) -> Result<SandwichOutcome, AmmError> {
        let path = position.path();
        let exit = path.reversed();
        let mut scratch = pool.scratch();
        let price_before = scratch.spot_price(path)?;

        let submitted = self.submitted_frontrun(&solution)?;
        let frontrun = scratch.swap_exact_base_for_tokens(
            submitted.amount_in(),
            submitted.amount_out(),
            path,
        )?;

        let victim = match position {
            UserPosition::ExactInput {
                amount_in,
                amount_out_min,
                ..
            } => scratch.swap_exact_base_for_tokens(amount_in, amount_out_min, path)?,
            UserPosition::ExactOutput {
                amount_in_max,
                amount_out,
                ..
            } => scratch.swap_base_for_exact_tokens(amount_out, amount_in_max, path)?,
        };
        let price_after_victim = scratch.spot_price(path)?;

        let backrun =
            scratch.swap_exact_tokens_for_base(frontrun.amount_out(), &Amount::one(), &exit)?;

        let gas_fees = gas.total_fee();
        let profit =
            signed(backrun.amount_out()) - signed(frontrun.amount_in()) - signed(&gas_fees);

        tracing::debug!(
            target: "sandwich",
            %frontrun,
            %victim,
            %backrun,
            %gas_fees,
            %profit,
            "simulated sandwich"
        );

        Ok(SandwichOutcome {
            solution,
            frontrun,
            victim,
            backrun,
            gas_fees,
            profit,
            price_before,
            price_after_victim,
        })
    }
}

impl FromConfig<SandwichConfig> for SandwichEstimator {
    /// Builds an estimator from a validated [`SandwichConfig`].
    ///
    /// # Errors
    ///
    /// Propagates any error from [`SandwichConfig::validate`].
    fn from_config(config: &SandwichConfig) -> Result<Self, AmmError> {
        config.validate()?;
        Ok(Self::new(
            FrontrunSolver::new(config.max_iterations),
            config.target,
            config.safety_margin,
        ))
    }
}
