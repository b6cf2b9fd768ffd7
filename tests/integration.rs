//! Integration tests exercising the public API end to end:
//! pool arithmetic, the sandwich scenario for both victim shapes,
//! solver convergence, configuration loading and the async planner
//! against an in-memory ledger.

#![allow(clippy::panic)]

use std::cell::RefCell;

use cpmm_sandwich::analysis::{
    FrontrunSolver, FrontrunTarget, GasQuote, SandwichEstimator, Termination,
};
use cpmm_sandwich::config::{PoolConfig, SandwichConfig};
use cpmm_sandwich::domain::{
    Amount, BasisPoints, FeeTier, Price, Slippage, SwapAmounts, SwapKind, SwapPath, TokenId, TokenPair,
    TradeParams, UserPosition,
};
use cpmm_sandwich::error::AmmError;
use cpmm_sandwich::math;
use cpmm_sandwich::planner::SandwichPlanner;
use cpmm_sandwich::pools::ConstantProductPool;
use cpmm_sandwich::traits::{FromConfig, Ledger};
use num_bigint::{BigInt, BigUint};

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn weth() -> TokenId {
    let Ok(t) = "0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2".parse() else {
        panic!("valid token");
    };
    t
}

fn token() -> TokenId {
    let Ok(t) = "0x6b175474e89094c44da98b954eedeac495271d0f".parse() else {
        panic!("valid token");
    };
    t
}

fn eth(v: u64) -> Amount {
    Amount::from_units(v, 18)
}

fn gwei(v: u64) -> Amount {
    Amount::from_units(v, 9)
}

fn pool() -> ConstantProductPool {
    let Ok(p) = ConstantProductPool::new((weth(), eth(100)), (token(), eth(200_000)), weth())
    else {
        panic!("valid pool");
    };
    p
}

fn buy() -> SwapPath {
    let Ok(p) = SwapPath::from_slice(&[weth(), token()]) else {
        panic!("valid path");
    };
    p
}

fn exact_input_victim(tolerance_percent: u32) -> UserPosition {
    let Ok(pos) = UserPosition::exact_input(
        &pool(),
        eth(1),
        BasisPoints::from_percent(tolerance_percent),
        buy(),
    ) else {
        panic!("valid position");
    };
    pos
}

fn exact_output_victim(tolerance_percent: u32) -> UserPosition {
    let Ok(pos) = UserPosition::exact_output(
        &pool(),
        eth(2_000),
        BasisPoints::from_percent(tolerance_percent),
        buy(),
    ) else {
        panic!("valid position");
    };
    pos
}

/// `10^13`, i.e. 0.001% in 18-decimal fixed point.
fn thousandth_percent() -> BigUint {
    BigUint::from(10_000_000_000_000u64)
}

// ---------------------------------------------------------------------------
// Pool arithmetic
// ---------------------------------------------------------------------------

#[test]
fn example_one_amount_out() {
    let (amount_in, reserve_in, reserve_out) = (eth(1), eth(100), eth(200_000));
    let Ok(out) = pool().amount_out(&amount_in, &buy()) else {
        panic!("expected Ok");
    };
    let numerator = amount_in.get() * 997u32 * reserve_out.get();
    let denominator = reserve_in.get() * 1_000u32 + amount_in.get() * 997u32;
    assert_eq!(out.get(), &(numerator / denominator));
    assert_eq!(
        math::get_amount_out(&amount_in, &reserve_in, &reserve_out, Default::default()),
        Ok(out)
    );
}

#[test]
fn pool_from_config_matches_direct_construction() {
    let Ok(cfg) = PoolConfig::new(
        token(),
        weth(),
        weth(),
        eth(200_000),
        eth(100),
        Default::default(),
    ) else {
        panic!("valid config");
    };
    let Ok(from_cfg) = ConstantProductPool::from_config(&cfg) else {
        panic!("valid pool");
    };
    assert_eq!(from_cfg, pool());
}

#[test]
fn zero_liquidity_pool_rejects_everything() {
    let Ok(mut empty) =
        ConstantProductPool::new((weth(), Amount::zero()), (token(), eth(1)), weth())
    else {
        panic!("construction allows empty reserves");
    };
    assert_eq!(empty.quote(&eth(1), &buy()), Err(AmmError::InsufficientLiquidity));
    assert_eq!(
        empty.swap_base_for_exact_tokens(&Amount::one(), &eth(1), &buy()),
        Err(AmmError::InsufficientLiquidity)
    );
    assert_eq!(
        SandwichEstimator::default().estimate(&empty, &exact_input_victim(1), &GasQuote::default()),
        Err(AmmError::InsufficientLiquidity)
    );
}

#[test]
fn multi_hop_paths_rejected() {
    let r = SwapPath::from_slice(&[weth(), token(), TokenId::from(7u64)]);
    assert!(matches!(r, Err(AmmError::InvalidPath(_))));
    assert!(matches!(
        SwapPath::from_slice(&[weth()]),
        Err(AmmError::InvalidPath(_))
    ));
}

// ---------------------------------------------------------------------------
// Sandwich scenario
// ---------------------------------------------------------------------------

#[test]
fn sandwich_exact_input_end_to_end() {
    let victim = exact_input_victim(1);
    let Ok(no_frontrun) = pool().amount_out(&eth(1), &buy()) else {
        panic!("expected Ok");
    };

    let Ok(outcome) = SandwichEstimator::default().estimate(&pool(), &victim, &GasQuote::default())
    else {
        panic!("expected Ok");
    };

    // Profitable before gas.
    assert!(outcome.profit > BigInt::default());
    assert_eq!(outcome.profit, outcome.gross_profit());

    // The victim's guard held and its fill stayed within its 1% tolerance.
    assert!(outcome.victim.amount_out() >= victim.declared_out());
    let Ok(floor) = BasisPoints::from_percent(1).discount(&no_frontrun) else {
        panic!("valid tolerance");
    };
    assert!(outcome.victim.amount_out() >= &floor);
    assert!(outcome.victim.amount_out() < &no_frontrun);

    // The solver came within 0.001% of its target.
    let Ok(err) = outcome.solution.relative_error() else {
        panic!("expected Ok");
    };
    assert!(err.raw() <= &thousandth_percent());

    // Front-run and victim both pushed the price up.
    assert!(outcome.price_after_victim < outcome.price_before);
}

#[test]
fn sandwich_exact_output_end_to_end() {
    let victim = exact_output_victim(1);
    let Ok(outcome) = SandwichEstimator::default().estimate(&pool(), &victim, &GasQuote::default())
    else {
        panic!("expected Ok");
    };
    assert!(outcome.is_profitable());
    assert_eq!(outcome.victim.amount_out(), &eth(2_000));
    assert!(outcome.victim.amount_in() <= victim.declared_in());
}

#[test]
fn wider_tolerance_yields_more_profit() {
    let est = SandwichEstimator::default();
    let (Ok(narrow), Ok(wide)) = (
        est.estimate(&pool(), &exact_input_victim(1), &GasQuote::default()),
        est.estimate(&pool(), &exact_input_victim(10), &GasQuote::default()),
    ) else {
        panic!("expected Ok");
    };
    assert!(wide.profit > narrow.profit);
}

#[test]
fn unexpected_target_lands_on_victim_worst_price() {
    let victim = exact_input_victim(1);
    let Ok(solution) =
        FrontrunSolver::default().solve_for(&pool(), &victim, FrontrunTarget::Unexpected)
    else {
        panic!("expected Ok");
    };

    let mut scratch = pool().scratch();
    let Ok(_) = scratch.swap_exact_base_for_tokens(&solution.amount_in, &solution.amount_out, &buy())
    else {
        panic!("expected Ok");
    };
    let (Ok(after), Ok(worst)) = (
        scratch.spot_price(&buy()),
        Price::from_ratio(victim.declared_out(), victim.declared_in()),
    ) else {
        panic!("expected Ok");
    };
    let Ok(gap) = Slippage::between(&after, &worst) else {
        panic!("expected Ok");
    };
    let Ok(distance) = gap.relative_distance(&Slippage::one()) else {
        panic!("expected Ok");
    };
    assert!(distance.raw() <= &thousandth_percent());
}

#[test]
fn bisection_converges_for_targets_between_one_and_two() {
    let solver = FrontrunSolver::default();
    for permille in [1_001u64, 1_010, 1_050, 1_250, 1_500, 1_750, 1_999] {
        let target = Slippage::from_raw(BigUint::from(permille) * BigUint::from(10u64).pow(15));
        let Ok(solution) = solver.solve(&pool(), &target, &buy()) else {
            panic!("expected Ok for {permille}");
        };
        let Ok(err) = solution.relative_error() else {
            panic!("expected Ok");
        };
        assert!(
            solution.termination == Termination::Stalled || err.raw() <= &thousandth_percent(),
            "target {permille}‰ ended {:?} at {}",
            solution.termination,
            solution.achieved
        );
        assert_ne!(solution.termination, Termination::IterationLimit);
    }
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

#[test]
fn toml_driven_estimate() {
    let pool_toml = r#"
        token_a = "0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2"
        token_b = "0x6b175474e89094c44da98b954eedeac495271d0f"
        base_asset = "0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2"
        reserve_a = "100_000000000000000000"
        reserve_b = "200000_000000000000000000"
        fee_tier = 30
    "#;
    let sandwich_toml = r#"
        safety_margin = 100
        max_iterations = 128
        target = "full"
    "#;

    let Ok(pool_cfg) = PoolConfig::from_toml_str(pool_toml) else {
        panic!("valid pool config");
    };
    let Ok(sandwich_cfg) = SandwichConfig::from_toml_str(sandwich_toml) else {
        panic!("valid sandwich config");
    };
    let (Ok(p), Ok(est)) = (
        ConstantProductPool::from_config(&pool_cfg),
        SandwichEstimator::from_config(&sandwich_cfg),
    ) else {
        panic!("valid components");
    };
    assert_eq!(p, pool());

    let (Ok(from_toml), Ok(default)) = (
        est.estimate(&p, &exact_input_victim(1), &GasQuote::default()),
        SandwichEstimator::default().estimate(&pool(), &exact_input_victim(1), &GasQuote::default()),
    ) else {
        panic!("expected Ok");
    };
    assert_eq!(from_toml.profit, default.profit);
}

// ---------------------------------------------------------------------------
// Planner against an in-memory ledger
// ---------------------------------------------------------------------------

struct MemoryLedger {
    reserves: Option<(Amount, Amount)>,
    now: u64,
    gas_units: u64,
    gas_price: Amount,
    submitted: RefCell<Vec<TradeParams>>,
}

impl MemoryLedger {
    fn for_pool(pool: &ConstantProductPool) -> Self {
        Self {
            reserves: Some((pool.reserve_low().clone(), pool.reserve_high().clone())),
            now: 1_700_000_000,
            gas_units: 150_000,
            gas_price: gwei(1),
            submitted: RefCell::new(Vec::new()),
        }
    }
}

impl Ledger for MemoryLedger {
    async fn get_reserves(&self, _pair: &TokenPair) -> Result<(Amount, Amount), AmmError> {
        self.reserves
            .clone()
            .ok_or_else(|| AmmError::Ledger("pair not deployed".to_string()))
    }

    async fn estimate_gas(&self, _trade: &TradeParams) -> Result<u64, AmmError> {
        Ok(self.gas_units)
    }

    async fn gas_price(&self) -> Result<Amount, AmmError> {
        Ok(self.gas_price.clone())
    }

    async fn current_timestamp(&self) -> Result<u64, AmmError> {
        Ok(self.now)
    }

    async fn submit_swap(
        &self,
        pair: &TokenPair,
        trade: &TradeParams,
    ) -> Result<SwapAmounts, AmmError> {
        let (low, high) = self.get_reserves(pair).await?;
        let mut pool = ConstantProductPool::from_canonical_reserves(
            pair.clone(),
            trade.path.token_in().clone(),
            low,
            high,
        )?;
        let amounts =
            pool.swap_exact_base_for_tokens(&trade.amount_in, &trade.amount_out, &trade.path)?;
        self.submitted.borrow_mut().push(trade.clone());
        Ok(amounts)
    }
}

fn pair() -> TokenPair {
    let Ok(p) = TokenPair::new(weth(), token()) else {
        panic!("valid pair");
    };
    p
}

#[tokio::test]
async fn planner_builds_and_submits_frontrun() {
    let ledger = MemoryLedger::for_pool(&pool());
    let Ok(planner) = SandwichPlanner::new(ledger, &SandwichConfig::default()) else {
        panic!("valid planner");
    };
    let victim = exact_input_victim(1);

    let Ok(plan) = planner.plan(&pair(), &weth(), &victim).await else {
        panic!("expected plan");
    };

    assert_eq!(plan.pool, pool());
    assert_eq!(plan.frontrun.kind, SwapKind::ExactBaseForTokens);
    assert_eq!(plan.frontrun.deadline, 1_700_000_100);
    assert_eq!(plan.backrun.kind, SwapKind::ExactTokensForBase);
    assert_eq!(plan.backrun.path, buy().reversed());
    assert_eq!(&plan.backrun.amount_in, plan.outcome.frontrun.amount_out());

    // 150 000 gas doubled at 1 gwei.
    assert_eq!(plan.outcome.gas_fees, Amount::from(300_000_000_000_000u64));
    assert_eq!(
        plan.outcome.profit,
        plan.outcome.gross_profit() - BigInt::from(300_000_000_000_000u64)
    );
    assert!(plan.is_profitable());

    let Ok(filled) = planner.submit_frontrun(&plan).await else {
        panic!("expected fill");
    };
    assert_eq!(filled.amount_in(), &plan.frontrun.amount_in);
    assert!(filled.amount_out() >= &plan.frontrun.amount_out);
    assert_eq!(planner.ledger().submitted.borrow().as_slice(), &[plan.frontrun.clone()]);
}

#[tokio::test]
async fn planner_reports_unprofitable_gas() {
    let mut ledger = MemoryLedger::for_pool(&pool());
    ledger.gas_price = gwei(100);
    let Ok(planner) = SandwichPlanner::new(ledger, &SandwichConfig::default()) else {
        panic!("valid planner");
    };
    let Ok(plan) = planner.plan(&pair(), &weth(), &exact_input_victim(1)).await else {
        panic!("expected plan");
    };
    assert!(!plan.is_profitable());
    assert!(planner.ledger().submitted.borrow().is_empty());
}

#[tokio::test]
async fn planner_surfaces_ledger_failures() {
    let mut ledger = MemoryLedger::for_pool(&pool());
    ledger.reserves = None;
    let Ok(planner) = SandwichPlanner::new(ledger, &SandwichConfig::default()) else {
        panic!("valid planner");
    };
    let r = planner.plan(&pair(), &weth(), &exact_input_victim(1)).await;
    assert_eq!(r.err(), Some(AmmError::Ledger("pair not deployed".to_string())));
}

#[tokio::test]
async fn planner_rejects_foreign_base_asset() {
    let Ok(planner) =
        SandwichPlanner::new(MemoryLedger::for_pool(&pool()), &SandwichConfig::default())
    else {
        panic!("valid planner");
    };
    let r = planner
        .plan(&pair(), &TokenId::from(1u64), &exact_input_victim(1))
        .await;
    assert!(matches!(r, Err(AmmError::InvalidPath(_))));
}

#[tokio::test]
async fn planner_rejects_full_fee_tier() {
    let Ok(planner) =
        SandwichPlanner::new(MemoryLedger::for_pool(&pool()), &SandwichConfig::default())
    else {
        panic!("valid planner");
    };
    let r = planner.with_fee_tier(FeeTier::new(BasisPoints::MAX_PERCENT));
    assert!(matches!(r, Err(AmmError::InvalidConfig(_))));

    let Ok(planner) =
        SandwichPlanner::new(MemoryLedger::for_pool(&pool()), &SandwichConfig::default())
    else {
        panic!("valid planner");
    };
    let Ok(planner) = planner.with_fee_tier(FeeTier::TIER_1_00_PERCENT) else {
        panic!("1% fee accepted");
    };
    let Ok(dear) = pool().with_fee_tier(FeeTier::TIER_1_00_PERCENT) else {
        panic!("valid fee tier");
    };
    let Ok(victim) =
        UserPosition::exact_input(&dear, eth(1), BasisPoints::from_percent(1), buy())
    else {
        panic!("valid position");
    };
    let Ok(plan) = planner.plan(&pair(), &weth(), &victim).await else {
        panic!("expected plan");
    };
    assert_eq!(plan.pool, dear);
}
