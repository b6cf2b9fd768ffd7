//! Tunables for sandwich estimation and planning.

use serde::{Deserialize, Serialize};

use crate::analysis::{FrontrunTarget, DEFAULT_MAX_ITERATIONS};
use crate::domain::BasisPoints;
use crate::error::AmmError;

/// Configuration for the estimator and planner.
///
/// Missing TOML keys take their defaults:
///
/// | Key | Default |
/// |-----|---------|
/// | `safety_margin` | `100` (1%) |
/// | `deadline_offset_secs` | `100` |
/// | `max_iterations` | `256` |
/// | `target` | `"full"` |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SandwichConfig {
    /// Haircut applied to both front-run legs before submission.
    pub safety_margin: BasisPoints,
    /// Seconds added to the ledger clock for the swap deadline.
    pub deadline_offset_secs: u64,
    /// Ceiling on bisection steps.
    pub max_iterations: u32,
    /// Which slippage the front-run is sized to.
    pub target: FrontrunTarget,
}

impl Default for SandwichConfig {
    fn default() -> Self {
        Self {
            safety_margin: BasisPoints::from_percent(1),
            deadline_offset_secs: 100,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            target: FrontrunTarget::Full,
        }
    }
}

impl SandwichConfig {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// - [`AmmError::MalformedConfig`] if the document does not parse.
    /// - [`AmmError::InvalidConfig`] if it fails [`validate`](Self::validate).
    pub fn from_toml_str(input: &str) -> Result<Self, AmmError> {
        let config: Self = toml::from_str(input).map_err(|err| {
            tracing::debug!(%err, "rejected sandwich configuration");
            AmmError::MalformedConfig {
                kind: "sandwich",
                message: err.message().to_string(),
            }
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfig`] naming the first violated rule.
    pub fn validate(&self) -> Result<(), AmmError> {
        if self.safety_margin >= BasisPoints::MAX_PERCENT {
            return Err(AmmError::InvalidConfig("safety margin must be below 100%"));
        }
        if self.max_iterations == 0 {
            return Err(AmmError::InvalidConfig("max_iterations must be positive"));
        }
        if self.deadline_offset_secs == 0 {
            return Err(AmmError::InvalidConfig("deadline offset must be positive"));
        }
        Ok(())
    }
}
