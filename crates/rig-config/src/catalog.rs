//! Catalog source configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// Path to a `.json` or `.toml` catalog. Empty means the built-in catalog.
    #[serde(default)]
    pub path: String,
}

impl CatalogConfig {
    /// Whether a catalog file is configured.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.path.trim().is_empty()
    }

    #[must_use]
    pub fn path(&self) -> Option<PathBuf> {
        self.is_configured().then(|| PathBuf::from(self.path.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_path_means_builtin() {
        let config = CatalogConfig::default();
        assert!(!config.is_configured());
        assert!(config.path().is_none());
    }

    #[test]
    fn whitespace_path_is_not_configured() {
        let config = CatalogConfig { path: "  ".into() };
        assert!(!config.is_configured());
    }
}
