use rig_core::errors::validate_budget;
use rig_core::responses::TierResponse;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::TierArgs;
use crate::output::output;

/// Handle `rig tier`.
pub fn handle(args: &TierArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let budget = validate_budget(args.budget)?;
    output(&TierResponse::for_budget(budget), flags.format)
}
