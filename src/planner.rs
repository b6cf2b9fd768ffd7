//! Async orchestration of a sandwich against a live [`Ledger`].
//!
//! [`SandwichPlanner::plan`] awaits, one after another: the pair's
//! reserves, the ledger clock, a gas estimate for the front-run and the
//! gas price.  The estimator then runs on a pool rebuilt from the fetched
//! reserves.  Nothing is submitted until
//! [`submit_frontrun`](SandwichPlanner::submit_frontrun) is called.

use crate::analysis::{GasQuote, SandwichEstimator, SandwichOutcome};
use crate::config::SandwichConfig;
use crate::domain::{
    Amount, FeeTier, SwapAmounts, SwapKind, TokenId, TokenPair, TradeParams, UserPosition,
};
use crate::error::AmmError;
use crate::pools::ConstantProductPool;
use crate::traits::{FromConfig, Ledger};

/// A fully simulated sandwich, ready for submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SandwichPlan {
    /// Pool rebuilt from the reserves the ledger reported.
    pub pool: ConstantProductPool,
    /// Router call for the front-run (haircut legs).
    pub frontrun: TradeParams,
    /// Router call for the back-run, selling the whole front-run output.
    pub backrun: TradeParams,
    /// Simulation of all three legs with gas netted.
    pub outcome: SandwichOutcome,
}

impl SandwichPlan {
    /// `true` when the simulated profit after gas is positive.
    #[must_use]
    pub fn is_profitable(&self) -> bool {
        self.outcome.is_profitable()
    }
}

/// Plans and submits sandwiches through a [`Ledger`].
#[derive(Debug)]
pub struct SandwichPlanner<L> {
    ledger: L,
    estimator: SandwichEstimator,
    deadline_offset_secs: u64,
    fee_tier: FeeTier,
}

impl<L: Ledger> SandwichPlanner<L> {
    /// Creates a planner with the given tunables.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfig`] if `config` fails validation.
    pub fn new(ledger: L, config: &SandwichConfig) -> Result<Self, AmmError> {
        Ok(Self {
            ledger,
            estimator: SandwichEstimator::from_config(config)?,
            deadline_offset_secs: config.deadline_offset_secs,
            fee_tier: FeeTier::UNISWAP_V2,
        })
    }

    /// Uses `fee_tier` for pools rebuilt from ledger reserves.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfig`] if the fee is 100% or more.
    pub fn with_fee_tier(mut self, fee_tier: FeeTier) -> Result<Self, AmmError> {
        fee_tier.validate()?;
        self.fee_tier = fee_tier;
        Ok(self)
    }

    /// The wrapped ledger.
    pub const fn ledger(&self) -> &L {
        &self.ledger
    }

    /// Fetches chain state and simulates a sandwich around `position`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::Ledger`] (or whatever the ledger reports) if a ledger
    ///   call fails.
    /// - [`AmmError::InvalidPath`] if `base_asset` is not in `pair`.
    /// - Any solver or simulation error.
    pub async fn plan(
        &self,
        pair: &TokenPair,
        base_asset: &TokenId,
        position: &UserPosition,
    ) -> Result<SandwichPlan, AmmError> {
        let (reserve_low, reserve_high) = self.ledger.get_reserves(pair).await?;
        let pool = ConstantProductPool::from_canonical_reserves(
            pair.clone(),
            base_asset.clone(),
            reserve_low,
            reserve_high,
        )?
        .with_fee_tier(self.fee_tier)?;

        let now = self.ledger.current_timestamp().await?;
        let deadline = now.saturating_add(self.deadline_offset_secs);

        let solution = self.estimator.solve_frontrun(&pool, position)?;
        let submitted = self.estimator.submitted_frontrun(&solution)?;
        let (frontrun_in, frontrun_min_out) = submitted.into_parts();
        let frontrun = TradeParams {
            kind: SwapKind::ExactBaseForTokens,
            amount_in: frontrun_in,
            amount_out: frontrun_min_out,
            path: position.path().clone(),
            deadline,
        };

        let frontrun_gas = self.ledger.estimate_gas(&frontrun).await?;
        let gas_price = self.ledger.gas_price().await?;
        let gas = GasQuote::new(frontrun_gas, gas_price);

        let outcome = self.estimator.simulate(&pool, position, solution, &gas)?;
        let backrun = TradeParams {
            kind: SwapKind::ExactTokensForBase,
            amount_in: outcome.frontrun.amount_out().clone(),
            amount_out: Amount::one(),
            path: position.path().reversed(),
            deadline,
        };

        tracing::debug!(
            target: "planner",
            pair = %pair,
            deadline,
            frontrun_gas,
            profit = %outcome.profit,
            "planned sandwich"
        );

        Ok(SandwichPlan {
            pool,
            frontrun,
            backrun,
            outcome,
        })
    }

    /// Hands the plan's front-run to the ledger.
    ///
    /// # Errors
    ///
    /// Whatever [`Ledger::submit_swap`] reports.
    pub async fn submit_frontrun(&self, plan: &SandwichPlan) -> Result<SwapAmounts, AmmError> {
        self.ledger.submit_swap(plan.pool.pair(), &plan.frontrun).await
    }
}
