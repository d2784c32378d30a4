use rig_core::enums::Slot;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

pub fn run(category: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let slot: Slot = parse_enum(category, "category")?;
    output(&ctx.catalog()?.list(slot), flags.format)
}
