//! General application configuration.

use rig_core::enums::UseCase;
use serde::{Deserialize, Serialize};

/// Budget a fresh build starts with.
const fn default_budget() -> f64 {
    1500.0
}

const fn default_use_case() -> UseCase {
    UseCase::Gaming
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Use case assumed when a command does not name one.
    #[serde(default = "default_use_case")]
    pub default_use_case: UseCase,

    /// Budget assumed when a command does not name one.
    #[serde(default = "default_budget")]
    pub default_budget: f64,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_use_case: default_use_case(),
            default_budget: default_budget(),
        }
    }
}
