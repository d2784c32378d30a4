use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::DecodeArgs;
use crate::output::output;

/// Handle `rig decode`.
pub fn handle(args: &DecodeArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let build = rig_export::decode_share_link(&args.link).context("failed to decode share link")?;
    output(&build, flags.format)
}
