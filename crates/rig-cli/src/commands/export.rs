use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::{DateTime, Utc};
use rig_core::entities::Build;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ExportArgs;
use crate::commands::shared::build_file::read_build;
use crate::context::AppContext;
use crate::output::output;

/// Response from `rig export`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ExportResponse {
    path: PathBuf,
    total_cost: f64,
    total_power_draw: u32,
    exported_at: DateTime<Utc>,
}

/// Handle `rig export`.
pub fn handle(args: &ExportArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let build = read_build(&args.file, &ctx.schemas)?;
    let dir = args.out.as_deref().unwrap_or_else(|| Path::new("."));
    let response = export_to(&build, dir, Utc::now())?;
    output(&response, flags.format)
}

fn export_to(build: &Build, dir: &Path, now: DateTime<Utc>) -> anyhow::Result<ExportResponse> {
    let document = rig_export::export(build, now).context("build cannot be exported")?;
    let path = rig_export::write_export(dir, &document)?;

    Ok(ExportResponse {
        path,
        total_cost: document.total_cost,
        total_power_draw: document.total_power_draw,
        exported_at: document.exported_at,
    })
}
