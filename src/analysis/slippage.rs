//! Slippage calculators over a pool snapshot.
//!
//! Every ratio here is `priceBefore × 10^18 / priceAfter`, where a price is
//! `reserveTo × 10^18 / reserveFrom` for the path under study.  Values above
//! [`Slippage::one`] mean the price moved against the trader.
//!
//! | Calculator | "before" | "after" |
//! |------------|----------|---------|
//! | expected   | spot price | spot price after simulating the trade |
//! | unexpected | spot price | price implied by the declared bounds |
//! | execution  | spot price | the trade's own average fill price |
//!
//! None of them mutates the pool: the expected calculators run on
//! [`ConstantProductPool::scratch`].

use crate::domain::{Amount, BasisPoints, Price, Slippage, SwapPath, UserPosition};
use crate::error::AmmError;
use crate::pools::ConstantProductPool;

impl ConstantProductPool {
    /// Price impact of buying with an exact `amount_in` of the base asset.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidPath`] if `path` does not start at the base asset.
    /// - [`AmmError::SlippageExceeded`] if the simulated output is below
    ///   `amount_out_min`.
    /// - [`AmmError::DivisionByZero`] if the post-trade price truncates to zero.
    /// - Any quoting error of the pool.
    pub fn expected_slippage_exact_input(
        &self,
        amount_in: &Amount,
        amount_out_min: &Amount,
        path: &SwapPath,
    ) -> Result<Slippage, AmmError> {
        let mut scratch = self.scratch();
        let before = scratch.spot_price(path)?;
        scratch.swap_exact_base_for_tokens(amount_in, amount_out_min, path)?;
        let after = scratch.spot_price(path)?;
        Slippage::between(&before, &after)
    }

    /// Price impact of buying exactly `amount_out` tokens with the base asset.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidPath`] if `path` does not start at the base asset.
    /// - [`AmmError::DivisionByZero`] if the post-trade price truncates to zero.
    /// - Any quoting error of the pool.
    pub fn expected_slippage_exact_output(
        &self,
        amount_out: &Amount,
        path: &SwapPath,
    ) -> Result<Slippage, AmmError> {
        self.check_entry_is_base(path)?;
        let mut scratch = self.scratch();
        let before = scratch.spot_price(path)?;
        scratch.simulate_exact_output(amount_out, path)?;
        let after = scratch.spot_price(path)?;
        Slippage::between(&before, &after)
    }

    /// Gap between the current spot price and the worst price a trader
    /// authorised with `amount_in` / `amount_out`.
    ///
    /// Pass `(amount_in, amount_out_min)` for an exact-input trade and
    /// `(amount_in_max, amount_out)` for an exact-output trade.
    ///
    /// # Errors
    ///
    /// - [`AmmError::DivisionByZero`] if either amount is zero.
    /// - [`AmmError::InsufficientLiquidity`] if either reserve is zero.
    /// - [`AmmError::InvalidPath`] if `path` is foreign to the pool.
    pub fn unexpected_slippage(
        &self,
        amount_in: &Amount,
        amount_out: &Amount,
        path: &SwapPath,
    ) -> Result<Slippage, AmmError> {
        let spot = self.spot_price(path)?;
        let declared = Price::from_ratio(amount_out, amount_in)?;
        Slippage::between(&spot, &declared)
    }

    /// Gap between the spot price and the average price an exact-input
    /// trade of `amount_in` would fill at.
    ///
    /// # Errors
    ///
    /// - [`AmmError::DivisionByZero`] if the fill rounds to zero output.
    /// - Any quoting error of the pool.
    pub fn execution_slippage(
        &self,
        amount_in: &Amount,
        path: &SwapPath,
    ) -> Result<Slippage, AmmError> {
        let spot = self.spot_price(path)?;
        let fill = self.get_amounts_out(amount_in, path)?;
        let average = Price::from_ratio(fill.amount_out(), fill.amount_in())?;
        Slippage::between(&spot, &average)
    }
}

impl UserPosition {
    /// Declares an exact-input trade that accepts `tolerance` less than the
    /// pool currently quotes.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidConfig`] if `tolerance` exceeds 100%.
    /// - Any quoting error of the pool.
    pub fn exact_input(
        pool: &ConstantProductPool,
        amount_in: Amount,
        tolerance: BasisPoints,
        path: SwapPath,
    ) -> Result<Self, AmmError> {
        let quoted = pool.amount_out(&amount_in, &path)?;
        let amount_out_min = tolerance.discount(&quoted)?;
        Ok(Self::ExactInput {
            amount_in,
            amount_out_min,
            path,
        })
    }

    /// Declares an exact-output trade that pays up to `tolerance` more than
    /// the pool currently quotes.
    ///
    /// # Errors
    ///
    /// Any quoting error of the pool.
    pub fn exact_output(
        pool: &ConstantProductPool,
        amount_out: Amount,
        tolerance: BasisPoints,
        path: SwapPath,
    ) -> Result<Self, AmmError> {
        let quoted = pool.amount_in(&amount_out, &path)?;
        let amount_in_max = tolerance.premium(&quoted);
        Ok(Self::ExactOutput {
            amount_in_max,
            amount_out,
            path,
        })
    }
}
