use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use rig_core::entities::Build;

use crate::{ExportError, ensure_exportable};

/// Downloadable export document: the build plus its derived totals.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BuildExport {
    #[serde(flatten)]
    pub build: Build,
    pub total_cost: f64,
    pub total_power_draw: u32,
    pub exported_at: DateTime<Utc>,
}

/// Build the export document for `build`, stamped with `now`.
///
/// # Errors
///
/// Fails the same way as [`ensure_exportable`].
pub fn export(build: &Build, now: DateTime<Utc>) -> Result<BuildExport, ExportError> {
    ensure_exportable(build)?;
    Ok(BuildExport {
        build: build.clone(),
        total_cost: rig_compat::total_cost(build),
        total_power_draw: rig_compat::total_power_draw(build),
        exported_at: now,
    })
}

/// `pc-build-<unix millis>.json`
#[must_use]
pub fn export_file_name(now: DateTime<Utc>) -> String {
    format!("pc-build-{}.json", now.timestamp_millis())
}

/// Write `document` as pretty JSON into `dir` and return the file path.
///
/// # Errors
///
/// Returns [`ExportError::Json`] if serialization fails or
/// [`ExportError::Io`] if the file cannot be written.
pub fn write_export(dir: &Path, document: &BuildExport) -> Result<PathBuf, ExportError> {
    let path = dir.join(export_file_name(document.exported_at));
    let json = serde_json::to_string_pretty(document)?;
    std::fs::write(&path, json).map_err(|source| ExportError::Io {
        path: path.clone(),
        source,
    })?;

    tracing::info!(path = %path.display(), "exported build");
    Ok(path)
}
