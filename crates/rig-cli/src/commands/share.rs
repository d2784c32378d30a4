use anyhow::Context;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::BuildFileArgs;
use crate::commands::shared::build_file::read_build;
use crate::context::AppContext;
use crate::output::output;

/// Response from `rig share`.
#[derive(Debug, Serialize)]
struct ShareResponse {
    url: String,
}

/// Handle `rig share`.
pub fn handle(args: &BuildFileArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let build = read_build(&args.file, &ctx.schemas)?;
    let url = rig_export::share_link(&ctx.config.share.base_url, &build)
        .context("build cannot be shared")?;

    tracing::debug!(base_url = %ctx.config.share.base_url, len = url.len(), "built share link");
    output(&ShareResponse { url }, flags.format)
}
