use crate::cli::GlobalFlags;
use crate::cli::root_commands::BuildFileArgs;
use crate::commands::shared::build_file::read_build;
use crate::context::AppContext;
use crate::output::output;

/// Handle `rig summary`.
pub fn handle(args: &BuildFileArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let build = read_build(&args.file, &ctx.schemas)?;
    output(&rig_compat::summarize(&build), flags.format)
}
