use std::cell::OnceCell;
use std::path::{Path, PathBuf};

use anyhow::Context;
use rig_catalog::Catalog;
use rig_config::RigConfig;
use rig_schema::SchemaRegistry;

/// Shared application resources for one command invocation.
pub struct AppContext {
    pub config: RigConfig,
    pub schemas: SchemaRegistry,
    catalog_override: Option<PathBuf>,
    catalog: OnceCell<Catalog>,
}

impl AppContext {
    /// The catalog is loaded on first use, so commands that only read build
    /// files never touch it.
    #[must_use]
    pub fn new(config: RigConfig, catalog_override: Option<PathBuf>) -> Self {
        Self {
            config,
            schemas: SchemaRegistry::new(),
            catalog_override,
            catalog: OnceCell::new(),
        }
    }

    /// The `--catalog` file, else the configured catalog, else the built-in one.
    pub fn catalog(&self) -> anyhow::Result<&Catalog> {
        if let Some(catalog) = self.catalog.get() {
            return Ok(catalog);
        }

        let path = self
            .catalog_override
            .clone()
            .or_else(|| self.config.catalog.path());
        let catalog = load_catalog(path.as_deref())?;
        Ok(self.catalog.get_or_init(|| catalog))
    }
}

fn load_catalog(path: Option<&Path>) -> anyhow::Result<Catalog> {
    match path {
        Some(path) => Catalog::from_path(path)
            .with_context(|| format!("failed to load catalog '{}'", path.display())),
        None => Catalog::builtin().context("built-in catalog is malformed"),
    }
}
