//! Trait seams of the crate.
//!
//! [`FromConfig`] builds components from validated configuration and
//! [`Ledger`] abstracts the chain the planner reads from and submits to.

mod from_config;
mod ledger;

pub use from_config::FromConfig;
pub use ledger::Ledger;
