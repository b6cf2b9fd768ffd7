//! Fundamental domain value types used throughout the crate.
//!
//! Amounts, prices and slippages are arbitrary-precision integers; prices
//! and slippages live in a `10^18` fixed-point domain.  Nothing here uses
//! floating point.

mod amount;
mod basis_points;
mod fee_tier;
mod position;
mod price;
mod rounding;
mod slippage;
mod swap_amounts;
mod swap_kind;
mod swap_path;
mod token_id;
mod token_pair;
mod trade;

pub use amount::Amount;
pub use basis_points::BasisPoints;
pub use fee_tier::FeeTier;
pub use position::UserPosition;
pub use price::{scale, Price, SCALE_DECIMALS};
pub use rounding::Rounding;
pub use slippage::Slippage;
pub use swap_amounts::SwapAmounts;
pub use swap_kind::SwapKind;
pub use swap_path::SwapPath;
pub use token_id::TokenId;
pub use token_pair::{canonical_order, TokenPair};
pub use trade::TradeParams;
