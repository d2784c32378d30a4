//! Share-link configuration.

use serde::{Deserialize, Serialize};

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ShareConfig {
    /// Origin that share links point at.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl ShareConfig {
    /// Whether the base URL differs from the built-in default.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.base_url != default_base_url()
    }
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}
