//! Catalog loading and lookup errors.

use std::path::PathBuf;

use rig_core::enums::Slot;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid catalog TOML: {0}")]
    Toml(#[from] toml::de::Error),

    /// Catalog file extension is neither `.json` nor `.toml`.
    #[error("Unsupported catalog format for {path} (expected .json or .toml)")]
    UnsupportedFormat { path: PathBuf },

    /// A selection named an id that the slot's catalog does not contain.
    #[error("Unknown {slot} component: {id}")]
    UnknownComponent { slot: Slot, id: String },

    #[error("Duplicate {slot} id in catalog: {id}")]
    DuplicateId { slot: Slot, id: String },

    #[error("Example build {index} does not exist (catalog has {count})")]
    ExampleOutOfRange { index: usize, count: usize },
}
