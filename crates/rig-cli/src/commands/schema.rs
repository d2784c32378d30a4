use anyhow::Context;
use rig_schema::{SchemaError, SchemaRegistry};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output::output;

/// Handle `rig schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let registry = SchemaRegistry::new();

    let Some(name) = args.name.as_deref() else {
        return output(&registry.list(), flags.format);
    };

    let schema = lookup(&registry, name)?;
    output(schema, flags.format)
}

fn lookup<'a>(registry: &'a SchemaRegistry, name: &str) -> anyhow::Result<&'a serde_json::Value> {
    registry
        .get(name)
        .ok_or_else(|| SchemaError::NotFound(name.to_string()))
        .with_context(|| format!("available schemas: {}", registry.list().join(", ")))
}
