//! # rig-config
//!
//! Layered configuration loading for rigforge using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`RIGFORGE_*` prefix, `__` as separator)
//! 2. Project-level `.rigforge/config.toml`
//! 3. User-level `~/.config/rigforge/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `RIGFORGE_CATALOG__PATH` -> `catalog.path`,
//! `RIGFORGE_GENERAL__DEFAULT_BUDGET` -> `general.default_budget`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use rig_config::RigConfig;
//!
//! let config = RigConfig::load_with_dotenv().expect("config");
//!
//! if let Some(path) = config.catalog.path() {
//!     println!("catalog: {}", path.display());
//! }
//! ```

mod catalog;
mod error;
mod general;
mod share;

pub use catalog::CatalogConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use share::ShareConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RigConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub share: ShareConfig,
}

impl RigConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`RigConfig::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] when a source fails to parse and
    /// [`ConfigError::InvalidValue`] when [`RigConfig::validate`] rejects the result.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`RigConfig::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".rigforge/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("RIGFORGE_").split("__"))
    }

    /// Reject values no command could work with.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        rig_core::errors::validate_budget(self.general.default_budget).map_err(|error| {
            ConfigError::InvalidValue {
                field: "general.default_budget".into(),
                reason: error.to_string(),
            }
        })?;

        if self.share.base_url.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "share.base_url".into(),
                reason: "must not be empty".into(),
            });
        }

        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("rigforge").join("config.toml"))
    }

    /// Load `.env` from the current directory. Silently does nothing if absent.
    fn load_dotenv() {
        let _ = dotenvy::dotenv();
    }
}
