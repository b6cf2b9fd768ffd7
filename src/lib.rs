//! # cpmm-sandwich
//!
//! Constant-product (Uniswap V2 style) pool arithmetic and sandwich
//! analysis in arbitrary precision.
//!
//! The crate models a two-asset pool with a designated base asset, measures
//! slippage in 18-decimal fixed point, sizes a front-run against a pending
//! victim trade by bracketing and bisection, and estimates the net profit
//! of the resulting front-run / victim / back-run sequence.  All amounts are
//! [`BigUint`](num_bigint::BigUint)-backed and no floating point is used.
//!
//! ## Estimate a sandwich
//!
//! ```rust
//! use cpmm_sandwich::prelude::*;
//!
//! let weth = TokenId::from(0xC0_u64);
//! let token = TokenId::from(0x0A_u64);
//!
//! // 1. Snapshot the pool: 100 WETH / 200 000 TOKEN, 0.3% fee.
//! let Ok(pool) = ConstantProductPool::new(
//!     (weth.clone(), Amount::from_units(100, 18)),
//!     (token.clone(), Amount::from_units(200_000, 18)),
//!     weth.clone(),
//! ) else { panic!("valid pool") };
//!
//! // 2. The victim buys with 1 WETH and tolerates 1% slippage.
//! let Ok(path) = SwapPath::new(weth, token) else { panic!("valid path") };
//! let Ok(victim) = UserPosition::exact_input(
//!     &pool,
//!     Amount::from_units(1, 18),
//!     BasisPoints::from_percent(1),
//!     path,
//! ) else { panic!("valid position") };
//!
//! // 3. Solve, simulate and net the gas.
//! let gas = GasQuote::new(150_000, Amount::from_units(1, 9));
//! let Ok(outcome) = SandwichEstimator::default().estimate(&pool, &victim, &gas) else {
//!     panic!("simulation succeeded")
//! };
//! assert!(outcome.is_profitable());
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │   Planner     │  awaits a Ledger for reserves, clock and gas
//! └──────┬───────┘
//!        │ SandwichEstimator
//!        ▼
//! ┌──────────────┐
//! │   Analysis    │  slippage calculators, frontrun solver, estimator
//! └──────┬───────┘
//!        │ scratch copies
//!        ▼
//! ┌──────────────┐
//! │    Pools      │  ConstantProductPool
//! └──────┬───────┘
//!        │ get_amount_out / get_amount_in / quote
//!        ▼
//! ┌──────────────┐
//! │ Math, Domain  │  Amount, Price, Slippage, TokenId, SwapPath, …
//! └──────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Newtype value types: [`Amount`](domain::Amount), [`Slippage`](domain::Slippage), [`UserPosition`](domain::UserPosition), etc. |
//! | [`math`]   | Pure constant-product formulas |
//! | [`pools`]  | [`ConstantProductPool`](pools::ConstantProductPool) |
//! | [`analysis`] | Slippage, front-run sizing and sandwich estimation |
//! | [`traits`] | [`FromConfig`](traits::FromConfig) and the async [`Ledger`](traits::Ledger) seam |
//! | [`planner`] | [`SandwichPlanner`](planner::SandwichPlanner) driving a ledger |
//! | [`config`] | [`PoolConfig`](config::PoolConfig) and [`SandwichConfig`](config::SandwichConfig) |
//! | [`error`]  | [`AmmError`](error::AmmError) unified error enum |
//! | [`prelude`] | Convenience re-exports |
//!
//! # Logging
//!
//! The crate emits [`tracing`] events (targets `frontrun`, `sandwich`,
//! `planner`) and never installs a subscriber.

pub mod analysis;
pub mod config;
pub mod domain;
pub mod error;
pub mod math;
pub mod planner;
pub mod pools;
pub mod prelude;
pub mod traits;
