//! Frontrun amount solver.
//!
//! Finds the base-asset amount whose own price impact, as measured by
//! [`expected_slippage_exact_input`](ConstantProductPool::expected_slippage_exact_input),
//! equals a target slippage `S` derived from the victim's tolerance.
//!
//! # Algorithm
//!
//! 1. Upper bracket (closed form): `high = reserveFrom × (S − 1) / 2`.
//!    Its own impact is `highBound`.
//! 2. Lower bracket: `low = high × (10^36 / highBound) / 10^18`.
//! 3. Bisection from `low`: move `low` or `high` to the current point
//!    depending on which side of `S` it landed, take the midpoint, repeat.
//!
//! The loop stops when the achieved slippage equals `S`, when the midpoint
//! stops changing under integer truncation, or after `max_iterations`
//! steps.  The last two are normal terminations returning the best
//! approximation, not errors.
//!
//! # Target derivations
//!
//! The front-runner may consume the victim's unexpected slippage window,
//! minus the victim's own impact:
//!
//! ```text
//! S = unexpected(declaredIn, declaredOut) − expected(victim trade) + 10^18
//! ```

use serde::{Deserialize, Serialize};

use crate::domain::{scale, Amount, BasisPoints, Slippage, SwapAmounts, SwapPath, UserPosition};
use crate::error::AmmError;
use crate::pools::ConstantProductPool;

/// Default ceiling on bisection steps.
pub const DEFAULT_MAX_ITERATIONS: u32 = 256;

/// Which slippage the front-run is sized to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrontrunTarget {
    /// The victim's unexpected slippage net of its own price impact.
    #[default]
    Full,
    /// The raw unexpected slippage: moves the pool exactly to the victim's
    /// worst declared price.
    Unexpected,
}

impl FrontrunTarget {
    /// Derives the target slippage for `position` against `pool`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidAmount`] if the victim's own impact exceeds its
    ///   unexpected window.
    /// - Any slippage calculator error.
    pub fn slippage_for(
        &self,
        pool: &ConstantProductPool,
        position: &UserPosition,
    ) -> Result<Slippage, AmmError> {
        let path = position.path();
        let unexpected =
            pool.unexpected_slippage(position.declared_in(), position.declared_out(), path)?;
        if *self == Self::Unexpected {
            return Ok(unexpected);
        }

        let own_impact = match position {
            UserPosition::ExactInput {
                amount_in,
                amount_out_min,
                ..
            } => pool.expected_slippage_exact_input(amount_in, amount_out_min, path)?,
            UserPosition::ExactOutput { amount_out, .. } => {
                pool.expected_slippage_exact_output(amount_out, path)?
            }
        };
        (&unexpected + &Slippage::one())
            .checked_sub(&own_impact)
            .ok_or(AmmError::InvalidAmount(
                "victim price impact exceeds its slippage window",
            ))
    }
}

/// How the bisection ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Termination {
    /// The achieved slippage equals the target.
    Exact,
    /// The midpoint stopped changing.
    Stalled,
    /// The iteration ceiling was reached.
    IterationLimit,
}

/// Result of [`FrontrunSolver::solve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontrunSolution {
    /// Base asset paid into the front-run.
    pub amount_in: Amount,
    /// Tokens the front-run receives at current reserves.
    pub amount_out: Amount,
    /// Slippage this front-run produces on its own.
    pub achieved: Slippage,
    /// Slippage the solver aimed for.
    pub target: Slippage,
    /// Bisection steps taken after bracketing.
    pub iterations: u32,
    /// Why the loop stopped.
    pub termination: Termination,
}

impl FrontrunSolution {
    /// Both legs of the unadjusted front-run.
    #[must_use]
    pub fn amounts(&self) -> SwapAmounts {
        SwapAmounts::new(self.amount_in.clone(), self.amount_out.clone())
    }

    /// Haircuts both legs by `margin` before on-chain submission
    /// (100 bp gives `× 99 / 100`).
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfig`] if `margin` exceeds 100%.
    pub fn with_safety_margin(&self, margin: BasisPoints) -> Result<SwapAmounts, AmmError> {
        Ok(SwapAmounts::new(
            margin.discount(&self.amount_in)?,
            margin.discount(&self.amount_out)?,
        ))
    }

    /// `|achieved − target| / target` in fixed point.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::DivisionByZero`] for a zero target.
    pub fn relative_error(&self) -> Result<Slippage, AmmError> {
        self.achieved.relative_distance(&self.target)
    }
}

/// Bracket-then-bisect solver for the front-run amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontrunSolver {
    max_iterations: u32,
}

impl Default for FrontrunSolver {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ITERATIONS)
    }
}

impl FrontrunSolver {
    /// Creates a solver with an explicit iteration ceiling.
    #[must_use]
    pub const fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }

    /// The iteration ceiling.
    #[must_use]
    pub const fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    /// Sizes a front-run against `position` using the chosen derivation.
    ///
    /// # Errors
    ///
    /// Any error of [`FrontrunTarget::slippage_for`] or [`solve`](Self::solve).
    pub fn solve_for(
        &self,
        pool: &ConstantProductPool,
        position: &UserPosition,
        target: FrontrunTarget,
    ) -> Result<FrontrunSolution, AmmError> {
        let slippage = target.slippage_for(pool, position)?;
        self.solve(pool, &slippage, position.path())
    }

    /// Finds the exact-input buy along `path` whose own price impact is
    /// `target`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidAmount`] if `target` is not above
    ///   [`Slippage::one`] or the bracket rounds to nothing.
    /// - [`AmmError::InvalidPath`] if `path` does not start at the base asset.
    /// - Any quoting error of the pool.
    pub fn solve(
        &self,
        pool: &ConstantProductPool,
        target: &Slippage,
        path: &SwapPath,
    ) -> Result<FrontrunSolution, AmmError> {
        const NO_ROOM: AmmError =
            AmmError::InvalidAmount("target slippage leaves no room for a front-run");

        pool.check_entry_is_base(path)?;
        let excess = target.excess().ok_or(NO_ROOM)?;
        let unit = scale();
        let (reserve_from, _) = pool.sorted_reserves(path)?;

        let mut high = Amount::new(reserve_from.get() * excess / &unit / 2u32);
        if high.is_zero() {
            return Err(NO_ROOM);
        }
        let high_out = pool.amount_out(&high, path)?;
        let high_bound = pool.expected_slippage_exact_input(&high, &high_out, path)?;

        let inverted = high_bound.inverted()?;
        let mut low = Amount::new(high.get() * inverted.raw() / &unit);
        let mut amount_out = pool.amount_out(&low, path)?;
        let mut achieved = pool.expected_slippage_exact_input(&low, &amount_out, path)?;

        tracing::debug!(
            target: "frontrun",
            target_slippage = %target,
            %high,
            %high_bound,
            %low,
            low_bound = %achieved,
            "bracketed front-run amount"
        );

        let mut current = low.clone();
        let mut previous = Amount::zero();
        let mut iterations = 0u32;
        let termination = loop {
            if achieved == *target {
                break Termination::Exact;
            }
            if previous == current {
                break Termination::Stalled;
            }
            if iterations >= self.max_iterations {
                tracing::warn!(
                    target: "frontrun",
                    iterations,
                    %achieved,
                    target_slippage = %target,
                    "bisection hit the iteration ceiling"
                );
                break Termination::IterationLimit;
            }

            previous = current.clone();
            if achieved < *target {
                low = current;
            } else {
                high = current;
            }
            current = Amount::new((low.get() + high.get()) / 2u32);
            amount_out = pool.amount_out(&current, path)?;
            achieved = pool.expected_slippage_exact_input(&current, &amount_out, path)?;
            iterations += 1;

            tracing::trace!(
                target: "frontrun",
                iterations,
                amount_in = %current,
                %achieved,
                "bisection step"
            );
        };

        tracing::debug!(
            target: "frontrun",
            amount_in = %current,
            %amount_out,
            %achieved,
            iterations,
            ?termination,
            "front-run solved"
        );

        Ok(FrontrunSolution {
            amount_in: current,
            amount_out,
            achieved,
            target: target.clone(),
            iterations,
            termination,
        })
    }
}
