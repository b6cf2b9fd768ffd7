//! Pure arithmetic shared by the pool model and the analytics.
//!
//! Every function here is a deterministic function of its arguments,
//! operates on arbitrary-precision integers, and truncates exactly where
//! the on-chain contract truncates.

mod constant_product;

pub use constant_product::{get_amount_in, get_amount_out, quote};
