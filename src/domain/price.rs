//! Fixed-point spot prices.

use core::fmt;

use num_bigint::BigUint;
use num_traits::Zero;

use super::{Amount, Rounding};
use crate::error::AmmError;

/// Number of decimal places in the fixed-point domain.
pub const SCALE_DECIMALS: u32 = 18;

/// `10^18`, the fixed-point unit shared by [`Price`] and
/// [`Slippage`](super::Slippage).
#[must_use]
pub fn scale() -> BigUint {
    BigUint::from(10u32).pow(SCALE_DECIMALS)
}

/// Writes a scaled integer as `integer.fraction` with all 18 decimals.
pub(crate) fn fmt_fixed(value: &BigUint, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let unit = scale();
    let whole = value / &unit;
    let frac = value % &unit;
    write!(
        f,
        "{whole}.{frac:0>width$}",
        frac = frac.to_str_radix(10),
        width = SCALE_DECIMALS as usize
    )
}

/// Units of the output token per unit of the input token, scaled by `10^18`
/// and truncated.
///
/// For a path `[from, to]` the spot price is `reserveTo × 10^18 / reserveFrom`,
/// the same truncated value an on-chain observer derives from `getReserves`.
///
/// # Examples
///
/// ```
/// use cpmm_sandwich::domain::{Amount, Price};
///
/// let Ok(p) = Price::from_ratio(&Amount::from(2_000u32), &Amount::from(1u32)) else { panic!() };
/// assert_eq!(p.to_string(), "2000.000000000000000000");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(BigUint);

impl Price {
    /// Wraps an already-scaled value.
    #[must_use]
    pub const fn from_raw(raw: BigUint) -> Self {
        Self(raw)
    }

    /// `numerator × 10^18 / denominator`, truncated.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::DivisionByZero`] if `denominator` is zero.
    pub fn from_ratio(numerator: &Amount, denominator: &Amount) -> Result<Self, AmmError> {
        let scaled = numerator.get() * scale();
        Rounding::Down
            .divide(&scaled, denominator.get())
            .map(Self)
            .ok_or(AmmError::DivisionByZero)
    }

    /// Returns the scaled integer.
    #[must_use]
    pub const fn raw(&self) -> &BigUint {
        &self.0
    }

    /// Returns `true` if the price truncated to zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_fixed(&self.0, f)
    }
}
