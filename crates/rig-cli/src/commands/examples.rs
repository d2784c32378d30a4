#[path = "examples/list.rs"]
mod list;
#[path = "examples/show.rs"]
mod show;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ExamplesCommands;
use crate::context::AppContext;

/// Handle `rig examples`.
pub fn handle(
    action: &ExamplesCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ExamplesCommands::List => list::run(ctx, flags),
        ExamplesCommands::Show { number } => show::run(*number, ctx, flags),
    }
}
