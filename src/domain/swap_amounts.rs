//! Both legs of a simulated swap.

use core::fmt;

use super::Amount;

/// The `[amountIn, amountOut]` pair a router returns for a single hop.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SwapAmounts {
    amount_in: Amount,
    amount_out: Amount,
}

impl SwapAmounts {
    /// Creates a new pair of amounts.
    pub const fn new(amount_in: Amount, amount_out: Amount) -> Self {
        Self {
            amount_in,
            amount_out,
        }
    }

    /// Amount paid into the pool.
    pub const fn amount_in(&self) -> &Amount {
        &self.amount_in
    }

    /// Amount taken out of the pool.
    pub const fn amount_out(&self) -> &Amount {
        &self.amount_out
    }

    /// Splits into `(amount_in, amount_out)`.
    #[must_use]
    pub fn into_parts(self) -> (Amount, Amount) {
        (self.amount_in, self.amount_out)
    }
}

impl fmt::Display for SwapAmounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "in={} out={}", self.amount_in, self.amount_out)
    }
}
