use std::path::Path;

use anyhow::Context;
use rig_core::entities::Build;
use rig_schema::SchemaRegistry;

/// Read a build JSON file, check it against the `build` schema, then decode it.
pub fn read_build(path: &Path, schemas: &SchemaRegistry) -> anyhow::Result<Build> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read build file '{}'", path.display()))?;
    let value: serde_json::Value = serde_json::from_str(&raw)
        .with_context(|| format!("'{}' is not valid JSON", path.display()))?;

    schemas
        .validate("build", &value)
        .with_context(|| format!("'{}' is not a valid build", path.display()))?;

    let build: Build = serde_json::from_value(value)
        .with_context(|| format!("failed to decode build '{}'", path.display()))?;

    tracing::debug!(
        path = %path.display(),
        filled = build.filled_slots().len(),
        "loaded build file"
    );
    Ok(build)
}
