use rig_catalog::Catalog;
use rig_core::enums::{PerformanceTier, UseCase};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// One gallery row for `rig examples list`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ExampleRow {
    number: usize,
    use_case: UseCase,
    budget: f64,
    tier: PerformanceTier,
    total_cost: f64,
    errors: usize,
    warnings: usize,
    exportable: bool,
}

pub fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&rows(ctx.catalog()?)?, flags.format)
}

fn rows(catalog: &Catalog) -> anyhow::Result<Vec<ExampleRow>> {
    Ok(catalog
        .example_builds()?
        .iter()
        .enumerate()
        .map(|(index, build)| {
            let summary = rig_compat::summarize(build);
            ExampleRow {
                number: index + 1,
                use_case: summary.use_case,
                budget: summary.budget,
                tier: summary.tier,
                total_cost: summary.total_cost,
                errors: summary.error_count,
                warnings: summary.warning_count,
                exportable: summary.exportable,
            }
        })
        .collect())
}
