use anyhow::anyhow;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let item = ctx
        .catalog()?
        .find(id)
        .ok_or_else(|| anyhow!("no catalog component with id '{id}'"))?;
    output(&item, flags.format)
}
