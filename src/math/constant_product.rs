//! Constant-product swap formulas with integer truncation.
//!
//! These are the exact formulas a Uniswap V2 router applies, generalised
//! over the fee tier:
//!
//! ```text
//! amountInWithFee = amountIn × (10 000 − fee_bps)
//! amountOut       = amountInWithFee × reserveOut / (reserveIn × 10 000 + amountInWithFee)   (floor)
//! amountIn        = reserveIn × amountOut × 10 000 / ((reserveOut − amountOut) × (10 000 − fee_bps)) + 1
//! ```
//!
//! `amountOut` floors and `amountIn` adds one after flooring.  A trader
//! asking for an exact output therefore never underpays: feeding
//! `amountIn(x)` back through `amountOut` yields at least `x`.

use num_traits::Zero;

use crate::domain::{Amount, FeeTier, Rounding};
use crate::error::AmmError;

fn check_liquidity(reserve_in: &Amount, reserve_out: &Amount) -> Result<(), AmmError> {
    if reserve_in.is_zero() || reserve_out.is_zero() {
        return Err(AmmError::InsufficientLiquidity);
    }
    Ok(())
}

/// Linear quote: `amount_a × reserve_b / reserve_a`, floored.  No fee.
///
/// # Errors
///
/// Returns [`AmmError::InsufficientLiquidity`] if either reserve is zero.
pub fn quote(amount_a: &Amount, reserve_a: &Amount, reserve_b: &Amount) -> Result<Amount, AmmError> {
    check_liquidity(reserve_a, reserve_b)?;
    (amount_a * reserve_b)
        .checked_div(reserve_a, Rounding::Down)
        .ok_or(AmmError::DivisionByZero)
}

/// Output received for an exact `amount_in`.
///
/// # Errors
///
/// - [`AmmError::InvalidAmount`] if `amount_in` is zero.
/// - [`AmmError::InsufficientLiquidity`] if either reserve is zero.
///
/// # Examples
///
/// ```
/// use cpmm_sandwich::domain::{Amount, FeeTier};
/// use cpmm_sandwich::math::get_amount_out;
///
/// // 1_000 in against 1_000_000 / 2_000_000 reserves:
/// // 9_970_000 * 2_000_000 / (10_000_000_000 + 9_970_000) = 1_992
/// let Ok(out) = get_amount_out(
///     &Amount::from(1_000u32),
///     &Amount::from(1_000_000u32),
///     &Amount::from(2_000_000u32),
///     FeeTier::UNISWAP_V2,
/// ) else { panic!() };
/// assert_eq!(out, Amount::from(1_992u32));
/// ```
pub fn get_amount_out(
    amount_in: &Amount,
    reserve_in: &Amount,
    reserve_out: &Amount,
    fee: FeeTier,
) -> Result<Amount, AmmError> {
    if amount_in.is_zero() {
        return Err(AmmError::InvalidAmount("amount in must be positive"));
    }
    check_liquidity(reserve_in, reserve_out)?;

    let amount_in_with_fee = amount_in.get() * fee.multiplier_big();
    let numerator = &amount_in_with_fee * reserve_out.get();
    let denominator = reserve_in.get() * FeeTier::denominator_big() + amount_in_with_fee;

    Rounding::Down
        .divide(&numerator, &denominator)
        .map(Amount::new)
        .ok_or(AmmError::DivisionByZero)
}

/// Input required to receive an exact `amount_out`.
///
/// # Errors
///
/// - [`AmmError::InvalidAmount`] if `amount_out` is zero.
/// - [`AmmError::InsufficientLiquidity`] if either reserve is zero or
///   `amount_out` would take the whole output reserve.
pub fn get_amount_in(
    amount_out: &Amount,
    reserve_in: &Amount,
    reserve_out: &Amount,
    fee: FeeTier,
) -> Result<Amount, AmmError> {
    if amount_out.is_zero() {
        return Err(AmmError::InvalidAmount("amount out must be positive"));
    }
    check_liquidity(reserve_in, reserve_out)?;
    if amount_out >= reserve_out {
        return Err(AmmError::InsufficientLiquidity);
    }

    let remaining = reserve_out
        .checked_sub(amount_out)
        .ok_or(AmmError::InsufficientLiquidity)?;
    let numerator = reserve_in.get() * amount_out.get() * FeeTier::denominator_big();
    let denominator = remaining.get() * fee.multiplier_big();
    if denominator.is_zero() {
        return Err(AmmError::DivisionByZero);
    }

    Ok(Amount::new(numerator / denominator + 1u32))
}
