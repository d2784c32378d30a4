#[path = "catalog/get.rs"]
mod get;
#[path = "catalog/list.rs"]
mod list;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::CatalogCommands;
use crate::context::AppContext;

/// Handle `rig catalog`.
pub fn handle(
    action: &CatalogCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        CatalogCommands::List { category } => list::run(category, ctx, flags),
        CatalogCommands::Get { id } => get::run(id, ctx, flags),
    }
}
