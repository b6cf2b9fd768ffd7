//! Property-based tests using `proptest` for pool and solver invariants.
//!
//! 1. **Invariant preservation** — `k` never decreases after a swap.
//! 2. **Round-trip bound** — inverse then forward never delivers less than
//!    requested; forward then inverse never costs more than paid plus the
//!    one-unit rounding bump.
//! 3. **Sort symmetry** — canonical ordering ignores argument order.
//! 4. **Quote idempotence** — repeated quotes are identical and pure.
//! 5. **Bisection convergence** — the solver lands within 0.001% of the
//!    target or reports a stall.

use num_bigint::BigUint;
use proptest::prelude::*;

use crate::analysis::{FrontrunSolver, Termination};
use crate::config::PoolConfig;
use crate::domain::{canonical_order, Amount, FeeTier, Slippage, SwapPath, TokenId};
use crate::pools::ConstantProductPool;
use crate::traits::FromConfig;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn base() -> TokenId {
    TokenId::from(1u64)
}

fn token() -> TokenId {
    TokenId::from(2u64)
}

fn buy() -> SwapPath {
    let Ok(path) = SwapPath::new(base(), token()) else {
        panic!("valid path");
    };
    path
}

fn make_pool(reserve_base: u128, reserve_token: u128) -> ConstantProductPool {
    let Ok(cfg) = PoolConfig::new(
        base(),
        token(),
        base(),
        Amount::from(reserve_base),
        Amount::from(reserve_token),
        FeeTier::UNISWAP_V2,
    ) else {
        panic!("valid pool config");
    };
    let Ok(pool) = ConstantProductPool::from_config(&cfg) else {
        panic!("valid pool");
    };
    pool
}

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Reserves between 10^15 and 10^30 base units.
fn reserve_strategy() -> impl Strategy<Value = u128> {
    1_000_000_000_000_000u128..=1_000_000_000_000_000_000_000_000_000_000u128
}

/// Trade sizes up to 10^24 base units.
fn amount_strategy() -> impl Strategy<Value = u128> {
    1u128..=1_000_000_000_000_000_000_000_000u128
}

/// Target slippage strictly between 1.0 and 2.0, scaled by 10^18.
fn target_strategy() -> impl Strategy<Value = u128> {
    1_010_000_000_000_000_000u128..=1_990_000_000_000_000_000u128
}

// ---------------------------------------------------------------------------
// Property 1: Invariant Preservation
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_k_non_decreasing(
        rb in reserve_strategy(),
        rt in reserve_strategy(),
        amount in amount_strategy(),
        sell in any::<bool>(),
    ) {
        let mut pool = make_pool(rb, rt);
        let path = if sell { buy().reversed() } else { buy() };
        let k_before = pool.k();

        let Ok(_) = pool.simulate_exact_input(&Amount::from(amount), &path) else {
            return Ok(());
        };

        prop_assert!(
            pool.k() >= k_before,
            "k should never shrink: k_after={} < k_before={}",
            pool.k(), k_before
        );
    }
}

// ---------------------------------------------------------------------------
// Property 2: Round-trip Bound
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_inverse_then_forward_delivers_request(
        rb in reserve_strategy(),
        rt in reserve_strategy(),
        fraction in 1u32..=999u32,
    ) {
        let pool = make_pool(rb, rt);
        let Some(wanted) = Amount::from(rt).mul_div(fraction, 1_000, crate::domain::Rounding::Down)
        else {
            return Ok(());
        };
        if wanted.is_zero() { return Ok(()); }

        let Ok(paid) = pool.amount_in(&wanted, &buy()) else {
            return Ok(());
        };
        let Ok(delivered) = pool.amount_out(&paid, &buy()) else {
            return Ok(());
        };
        prop_assert!(
            delivered >= wanted,
            "paying {} delivers {} < requested {}",
            paid, delivered, wanted
        );
    }

    #[test]
    fn prop_forward_then_inverse_never_costs_more(
        rb in reserve_strategy(),
        rt in reserve_strategy(),
        amount in amount_strategy(),
    ) {
        let pool = make_pool(rb, rt);
        let paid = Amount::from(amount);
        let Ok(received) = pool.amount_out(&paid, &buy()) else {
            return Ok(());
        };
        if received.is_zero() { return Ok(()); }
        let Ok(needed) = pool.amount_in(&received, &buy()) else {
            return Ok(());
        };
        prop_assert!(
            needed <= &paid + &Amount::one(),
            "re-buying {} costs {} > paid {} + 1",
            received, needed, paid
        );
    }
}

// ---------------------------------------------------------------------------
// Property 3 & 4: Sort Symmetry, Quote Idempotence
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_canonical_order_symmetric(a in any::<u128>(), b in any::<u128>()) {
        let (x, y) = (TokenId::from(a), TokenId::from(b));
        let forward = canonical_order(&x, &y);
        prop_assert_eq!(&forward, &canonical_order(&y, &x));
        prop_assert!(forward.0 <= forward.1);
    }

    #[test]
    fn prop_quote_idempotent(
        rb in reserve_strategy(),
        rt in reserve_strategy(),
        amount in amount_strategy(),
    ) {
        let pool = make_pool(rb, rt);
        let snapshot = pool.clone();
        let first = pool.quote(&Amount::from(amount), &buy());
        for _ in 0..3 {
            prop_assert_eq!(&pool.quote(&Amount::from(amount), &buy()), &first);
        }
        prop_assert_eq!(&pool, &snapshot);
    }
}

// ---------------------------------------------------------------------------
// Property 5: Bisection Convergence
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_bisection_converges_or_stalls(
        rb in reserve_strategy(),
        rt in reserve_strategy(),
        target in target_strategy(),
    ) {
        let pool = make_pool(rb, rt);
        let target = Slippage::from_raw(BigUint::from(target));
        let Ok(solution) = FrontrunSolver::default().solve(&pool, &target, &buy()) else {
            return Ok(());
        };
        prop_assert_ne!(solution.termination, Termination::IterationLimit);

        let Ok(error) = solution.relative_error() else {
            return Ok(());
        };
        let tolerance = BigUint::from(10_000_000_000_000u64);
        prop_assert!(
            solution.termination == Termination::Stalled || error.raw() <= &tolerance,
            "achieved {} is {} away from target {}",
            solution.achieved, error, target
        );
    }
}
