//! The chain-facing collaborator consumed by the planner.

use crate::domain::{Amount, SwapAmounts, TokenPair, TradeParams};
use crate::error::AmmError;

/// Read and write access to the chain the pool lives on.
///
/// Implementations wrap an RPC client, a fork, or an in-memory fixture.
/// Calls are awaited one at a time; failures should be reported as
/// [`AmmError::Ledger`] and are never retried by this crate.
#[allow(async_fn_in_trait)]
pub trait Ledger {
    /// Current reserves of `pair` in canonical `(low, high)` order.
    async fn get_reserves(&self, pair: &TokenPair) -> Result<(Amount, Amount), AmmError>;

    /// Gas units `trade` is expected to consume.
    async fn estimate_gas(&self, trade: &TradeParams) -> Result<u64, AmmError>;

    /// Price per gas unit, in base-asset units.
    async fn gas_price(&self) -> Result<Amount, AmmError>;

    /// Current chain time as a Unix timestamp.
    async fn current_timestamp(&self) -> Result<u64, AmmError>;

    /// Sends `trade` against `pair` and reports the executed amounts.
    async fn submit_swap(
        &self,
        pair: &TokenPair,
        trade: &TradeParams,
    ) -> Result<SwapAmounts, AmmError>;
}
