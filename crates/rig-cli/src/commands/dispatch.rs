use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Check(args) => commands::check::handle(&args, ctx, flags),
        Commands::Summary(args) => commands::summary::handle(&args, ctx, flags),
        Commands::Assemble(args) => commands::assemble::handle(&args, ctx, flags),
        Commands::Export(args) => commands::export::handle(&args, ctx, flags),
        Commands::Share(args) => commands::share::handle(&args, ctx, flags),
        Commands::Catalog { action } => commands::catalog::handle(&action, ctx, flags),
        Commands::Examples { action } => commands::examples::handle(&action, ctx, flags),
        Commands::Tier(_) | Commands::Decode(_) | Commands::Schema(_) => {
            unreachable!("tier/decode/schema are pre-dispatched in main")
        }
    }
}
