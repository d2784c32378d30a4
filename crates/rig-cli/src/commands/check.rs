use crate::cli::GlobalFlags;
use crate::cli::root_commands::BuildFileArgs;
use crate::commands::shared::build_file::read_build;
use crate::context::AppContext;
use crate::output::output;

/// Handle `rig check`.
pub fn handle(args: &BuildFileArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let build = read_build(&args.file, &ctx.schemas)?;
    let issues = rig_compat::evaluate(&build);

    tracing::debug!(
        errors = issues.iter().filter(|issue| issue.is_error()).count(),
        total = issues.len(),
        "evaluated build"
    );
    output(&issues, flags.format)
}
