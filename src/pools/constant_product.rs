//! Constant Product pool model (Uniswap V2 style).
//!
//! The pool holds two reserves in canonical token order and a designated
//! base asset.  Quotes are pure functions of the reserves; the simulated
//! swaps mutate the reserves exactly as the on-chain pair would after a
//! router call, fee included.
//!
//! # Swap Algorithm (`from` → `to`, exact input)
//!
//! 1. `amount_out = get_amount_out(amount_in, reserve_from, reserve_to)`
//! 2. `reserve_from += amount_in` (the fee stays in the pool)
//! 3. `reserve_to -= amount_out`
//!
//! # Invariant
//!
//! After every swap `k_after ≥ k_before`, where `k = reserve_low × reserve_high`,
//! because the fee increases the input reserve without a matching output.
//!
//! # Atomicity
//!
//! Every check and every intermediate value is computed before the first
//! reserve is written, so a failing swap leaves the pool untouched.

use num_bigint::BigUint;

use crate::config::PoolConfig;
use crate::domain::{Amount, FeeTier, Price, SwapAmounts, SwapPath, TokenId, TokenPair};
use crate::error::AmmError;
use crate::math;
use crate::traits::FromConfig;

/// A two-asset constant-product pool (`x · y = k`) with a base asset.
///
/// The pool is a plain value: clone it (or call [`scratch`](Self::scratch))
/// before running exploratory simulations so the caller's reserves are
/// never touched.
///
/// # Example
///
/// ```rust
/// use cpmm_sandwich::domain::{Amount, SwapPath, TokenId};
/// use cpmm_sandwich::pools::ConstantProductPool;
///
/// let weth = TokenId::from(2u64);
/// let token = TokenId::from(1u64);
/// let Ok(mut pool) = ConstantProductPool::new(
///     (weth.clone(), Amount::from_units(100, 18)),
///     (token.clone(), Amount::from_units(200_000, 18)),
///     weth.clone(),
/// ) else { panic!() };
///
/// let Ok(path) = SwapPath::new(weth, token) else { panic!() };
/// let k_before = pool.k();
/// let Ok(amounts) = pool.simulate_exact_input(&Amount::from_units(1, 18), &path) else { panic!() };
/// assert!(!amounts.amount_out().is_zero());
/// assert!(pool.k() >= k_before);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstantProductPool {
    pair: TokenPair,
    base_asset: TokenId,
    reserve_low: Amount,
    reserve_high: Amount,
    fee_tier: FeeTier,
}

impl ConstantProductPool {
    /// Creates a pool from two `(token, reserve)` sides in any order.
    ///
    /// The fee defaults to [`FeeTier::UNISWAP_V2`].
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidPath`] if both sides name the same token
    /// or `base_asset` is not one of them.
    pub fn new(
        side_a: (TokenId, Amount),
        side_b: (TokenId, Amount),
        base_asset: TokenId,
    ) -> Result<Self, AmmError> {
        let (token_a, reserve_a) = side_a;
        let (token_b, reserve_b) = side_b;
        let pair = TokenPair::new(token_a.clone(), token_b)?;
        let (reserve_low, reserve_high) = if *pair.low() == token_a {
            (reserve_a, reserve_b)
        } else {
            (reserve_b, reserve_a)
        };
        Self::from_canonical_reserves(pair, base_asset, reserve_low, reserve_high)
    }

    /// Creates a pool from reserves already in canonical `(low, high)` order,
    /// as a pair contract's `getReserves` reports them.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidPath`] if `base_asset` is not in `pair`.
    pub fn from_canonical_reserves(
        pair: TokenPair,
        base_asset: TokenId,
        reserve_low: Amount,
        reserve_high: Amount,
    ) -> Result<Self, AmmError> {
        if !pair.contains(&base_asset) {
            return Err(AmmError::InvalidPath("base asset is not part of the pool"));
        }
        Ok(Self {
            pair,
            base_asset,
            reserve_low,
            reserve_high,
            fee_tier: FeeTier::UNISWAP_V2,
        })
    }

    /// Replaces the fee tier.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfig`] if the fee is 100% or more.
    pub fn with_fee_tier(mut self, fee_tier: FeeTier) -> Result<Self, AmmError> {
        fee_tier.validate()?;
        self.fee_tier = fee_tier;
        Ok(self)
    }

    /// A freshly constructed pool seeded with the current reserves.
    #[must_use]
    pub fn scratch(&self) -> Self {
        Self {
            pair: self.pair.clone(),
            base_asset: self.base_asset.clone(),
            reserve_low: self.reserve_low.clone(),
            reserve_high: self.reserve_high.clone(),
            fee_tier: self.fee_tier,
        }
    }

    // -- accessors ------------------------------------------------------------

    /// The canonically ordered token pair.
    #[must_use]
    pub const fn pair(&self) -> &TokenPair {
        &self.pair
    }

    /// The designated base (native) asset.
    #[must_use]
    pub const fn base_asset(&self) -> &TokenId {
        &self.base_asset
    }

    /// The non-base token.
    #[must_use]
    pub fn quote_asset(&self) -> &TokenId {
        if self.base_asset == *self.pair.low() {
            self.pair.high()
        } else {
            self.pair.low()
        }
    }

    /// Reserve of the numerically lower token.
    pub const fn reserve_low(&self) -> &Amount {
        &self.reserve_low
    }

    /// Reserve of the numerically higher token.
    pub const fn reserve_high(&self) -> &Amount {
        &self.reserve_high
    }

    /// Reserve held for `token`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidPath`] if `token` is not in the pool.
    pub fn reserve_of(&self, token: &TokenId) -> Result<&Amount, AmmError> {
        if token == self.pair.low() {
            Ok(&self.reserve_low)
        } else if token == self.pair.high() {
            Ok(&self.reserve_high)
        } else {
            Err(AmmError::InvalidPath("token is not part of the pool"))
        }
    }

    /// The fee tier applied to swaps.
    #[must_use]
    pub const fn fee_tier(&self) -> FeeTier {
        self.fee_tier
    }

    /// The reserve product `reserve_low × reserve_high`.
    #[must_use]
    pub fn k(&self) -> BigUint {
        self.reserve_low.get() * self.reserve_high.get()
    }

    // -- quoting --------------------------------------------------------------

    /// Maps the caller's `[from, to]` direction onto the stored slots and
    /// returns `(reserve_from, reserve_to)`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidPath`] if either end of `path` is not in
    /// the pool.
    pub fn sorted_reserves(&self, path: &SwapPath) -> Result<(&Amount, &Amount), AmmError> {
        let from = self.reserve_of(path.token_in())?;
        let to = self.reserve_of(path.token_out())?;
        Ok((from, to))
    }

    fn check_liquidity(&self) -> Result<(), AmmError> {
        if self.reserve_low.is_zero() || self.reserve_high.is_zero() {
            return Err(AmmError::InsufficientLiquidity);
        }
        Ok(())
    }

    /// `amount_from × reserve_to / reserve_from`, floored, without fee.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InsufficientLiquidity`] if either reserve is zero.
    /// - [`AmmError::InvalidPath`] if `path` is foreign to the pool.
    pub fn quote(&self, amount_from: &Amount, path: &SwapPath) -> Result<Amount, AmmError> {
        self.check_liquidity()?;
        let (reserve_from, reserve_to) = self.sorted_reserves(path)?;
        math::quote(amount_from, reserve_from, reserve_to)
    }

    /// Spot price of `path`: `reserve_to × 10^18 / reserve_from`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InsufficientLiquidity`] if either reserve is zero.
    /// - [`AmmError::InvalidPath`] if `path` is foreign to the pool.
    pub fn spot_price(&self, path: &SwapPath) -> Result<Price, AmmError> {
        self.check_liquidity()?;
        let (reserve_from, reserve_to) = self.sorted_reserves(path)?;
        Price::from_ratio(reserve_to, reserve_from)
    }

    /// Fee-inclusive output for an exact `amount_in` along `path`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidAmount`] if `amount_in` is zero.
    /// - [`AmmError::InsufficientLiquidity`] if either reserve is zero.
    /// - [`AmmError::InvalidPath`] if `path` is foreign to the pool.
    pub fn amount_out(&self, amount_in: &Amount, path: &SwapPath) -> Result<Amount, AmmError> {
        let (reserve_from, reserve_to) = self.sorted_reserves(path)?;
        math::get_amount_out(amount_in, reserve_from, reserve_to, self.fee_tier)
    }

    /// Input needed to take exactly `amount_out` along `path`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidAmount`] if `amount_out` is zero.
    /// - [`AmmError::InsufficientLiquidity`] if either reserve is zero or
    ///   `amount_out` would drain the output reserve.
    /// - [`AmmError::InvalidPath`] if `path` is foreign to the pool.
    pub fn amount_in(&self, amount_out: &Amount, path: &SwapPath) -> Result<Amount, AmmError> {
        let (reserve_from, reserve_to) = self.sorted_reserves(path)?;
        math::get_amount_in(amount_out, reserve_from, reserve_to, self.fee_tier)
    }

    /// Router-style `getAmountsOut`: both legs for an exact input.
    ///
    /// # Errors
    ///
    /// Same as [`amount_out`](Self::amount_out).
    pub fn get_amounts_out(
        &self,
        amount_in: &Amount,
        path: &SwapPath,
    ) -> Result<SwapAmounts, AmmError> {
        let out = self.amount_out(amount_in, path)?;
        Ok(SwapAmounts::new(amount_in.clone(), out))
    }

    /// Router-style `getAmountsIn`: both legs for an exact output.
    ///
    /// # Errors
    ///
    /// Same as [`amount_in`](Self::amount_in).
    pub fn get_amounts_in(
        &self,
        amount_out: &Amount,
        path: &SwapPath,
    ) -> Result<SwapAmounts, AmmError> {
        let needed = self.amount_in(amount_out, path)?;
        Ok(SwapAmounts::new(needed, amount_out.clone()))
    }

    // -- state transitions ----------------------------------------------------

    /// Writes the result of a swap into the reserves.
    ///
    /// A swap that would deliver nothing is refused before any reserve moves.
    fn apply(&mut self, amounts: &SwapAmounts, path: &SwapPath) -> Result<(), AmmError> {
        if amounts.amount_out().is_zero() {
            return Err(AmmError::InvalidAmount("insufficient output amount"));
        }
        let (reserve_from, reserve_to) = self.sorted_reserves(path)?;
        let new_from = reserve_from + amounts.amount_in();
        let new_to = reserve_to
            .checked_sub(amounts.amount_out())
            .ok_or(AmmError::InsufficientLiquidity)?;

        if path.token_in() == self.pair.low() {
            self.reserve_low = new_from;
            self.reserve_high = new_to;
        } else {
            self.reserve_high = new_from;
            self.reserve_low = new_to;
        }
        Ok(())
    }

    /// Swaps an exact `amount_in` along `path` and updates the reserves.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidAmount`] if the output rounds down to zero.
    /// - Any error of [`amount_out`](Self::amount_out).
    ///
    /// The pool is unchanged on error.
    pub fn simulate_exact_input(
        &mut self,
        amount_in: &Amount,
        path: &SwapPath,
    ) -> Result<SwapAmounts, AmmError> {
        let amounts = self.get_amounts_out(amount_in, path)?;
        self.apply(&amounts, path)?;
        Ok(amounts)
    }

    /// Swaps for an exact `amount_out` along `path` and updates the reserves.
    ///
    /// # Errors
    ///
    /// Same as [`amount_in`](Self::amount_in); the pool is unchanged on error.
    pub fn simulate_exact_output(
        &mut self,
        amount_out: &Amount,
        path: &SwapPath,
    ) -> Result<SwapAmounts, AmmError> {
        let amounts = self.get_amounts_in(amount_out, path)?;
        self.apply(&amounts, path)?;
        Ok(amounts)
    }

    pub(crate) fn check_entry_is_base(&self, path: &SwapPath) -> Result<(), AmmError> {
        if *path.token_in() != self.base_asset {
            return Err(AmmError::InvalidPath("path must start at the base asset"));
        }
        Ok(())
    }

    fn check_exit_is_base(&self, path: &SwapPath) -> Result<(), AmmError> {
        if *path.token_out() != self.base_asset {
            return Err(AmmError::InvalidPath("path must end at the base asset"));
        }
        Ok(())
    }

    fn check_min_out(amounts: &SwapAmounts, amount_out_min: &Amount) -> Result<(), AmmError> {
        if amounts.amount_out() < amount_out_min {
            return Err(AmmError::SlippageExceeded {
                computed: amounts.amount_out().clone(),
                bound: amount_out_min.clone(),
            });
        }
        Ok(())
    }

    fn check_max_in(amounts: &SwapAmounts, amount_in_max: &Amount) -> Result<(), AmmError> {
        if amounts.amount_in() > amount_in_max {
            return Err(AmmError::SlippageExceeded {
                computed: amounts.amount_in().clone(),
                bound: amount_in_max.clone(),
            });
        }
        Ok(())
    }

    /// Pays exactly `amount_in` of the base asset, requires at least
    /// `amount_out_min` tokens back.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidPath`] if `path` does not start at the base asset.
    /// - [`AmmError::SlippageExceeded`] if the output is below `amount_out_min`.
    /// - Any error of [`amount_out`](Self::amount_out).
    pub fn swap_exact_base_for_tokens(
        &mut self,
        amount_in: &Amount,
        amount_out_min: &Amount,
        path: &SwapPath,
    ) -> Result<SwapAmounts, AmmError> {
        self.check_entry_is_base(path)?;
        let amounts = self.get_amounts_out(amount_in, path)?;
        Self::check_min_out(&amounts, amount_out_min)?;
        self.apply(&amounts, path)?;
        Ok(amounts)
    }

    /// Receives exactly `amount_out` tokens, pays at most `amount_in_max`
    /// of the base asset.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidPath`] if `path` does not start at the base asset.
    /// - [`AmmError::SlippageExceeded`] if the input exceeds `amount_in_max`.
    /// - Any error of [`amount_in`](Self::amount_in).
    pub fn swap_base_for_exact_tokens(
        &mut self,
        amount_out: &Amount,
        amount_in_max: &Amount,
        path: &SwapPath,
    ) -> Result<SwapAmounts, AmmError> {
        self.check_entry_is_base(path)?;
        let amounts = self.get_amounts_in(amount_out, path)?;
        Self::check_max_in(&amounts, amount_in_max)?;
        self.apply(&amounts, path)?;
        Ok(amounts)
    }

    /// Pays exactly `amount_in` tokens, requires at least `amount_out_min`
    /// of the base asset back.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidPath`] if `path` does not end at the base asset.
    /// - [`AmmError::SlippageExceeded`] if the output is below `amount_out_min`.
    /// - Any error of [`amount_out`](Self::amount_out).
    pub fn swap_exact_tokens_for_base(
        &mut self,
        amount_in: &Amount,
        amount_out_min: &Amount,
        path: &SwapPath,
    ) -> Result<SwapAmounts, AmmError> {
        self.check_exit_is_base(path)?;
        let amounts = self.get_amounts_out(amount_in, path)?;
        Self::check_min_out(&amounts, amount_out_min)?;
        self.apply(&amounts, path)?;
        Ok(amounts)
    }

    /// Receives exactly `amount_out` of the base asset, pays at most
    /// `amount_in_max` tokens.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidPath`] if `path` does not end at the base asset.
    /// - [`AmmError::SlippageExceeded`] if the input exceeds `amount_in_max`.
    /// - Any error of [`amount_in`](Self::amount_in).
    pub fn swap_tokens_for_exact_base(
        &mut self,
        amount_out: &Amount,
        amount_in_max: &Amount,
        path: &SwapPath,
    ) -> Result<SwapAmounts, AmmError> {
        self.check_exit_is_base(path)?;
        let amounts = self.get_amounts_in(amount_out, path)?;
        Self::check_max_in(&amounts, amount_in_max)?;
        self.apply(&amounts, path)?;
        Ok(amounts)
    }
}

impl FromConfig<PoolConfig> for ConstantProductPool {
    /// Creates a pool from a validated [`PoolConfig`].
    ///
    /// # Errors
    ///
    /// Propagates any error from [`PoolConfig::validate`].
    fn from_config(config: &PoolConfig) -> Result<Self, AmmError> {
        config.validate()?;
        let pool = Self::new(
            (config.token_a.clone(), config.reserve_a.clone()),
            (config.token_b.clone(), config.reserve_b.clone()),
            config.base_asset.clone(),
        )?;
        pool.with_fee_tier(config.fee_tier)
    }
}
