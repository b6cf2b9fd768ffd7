//! Declarative configuration structs.
//!
//! [`PoolConfig`] describes a constant-product pool snapshot and
//! [`SandwichConfig`] the tunables of the sandwich estimator.  Both load
//! from TOML and are validated before any pool or solver is built from them.

mod pool;
mod sandwich;

pub use pool::PoolConfig;
pub use sandwich::SandwichConfig;
