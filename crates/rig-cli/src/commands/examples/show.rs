use anyhow::Context;
use rig_catalog::Catalog;
use rig_core::entities::Build;
use rig_core::responses::BuildSummary;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Response from `rig examples show`.
#[derive(Debug, Serialize)]
struct ExampleDetail {
    number: usize,
    build: Build,
    summary: BuildSummary,
}

pub fn run(number: usize, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&detail(ctx.catalog()?, number)?, flags.format)
}

fn detail(catalog: &Catalog, number: usize) -> anyhow::Result<ExampleDetail> {
    let index = number
        .checked_sub(1)
        .context("example numbers start at 1")?;
    let build = catalog
        .example_build(index)
        .with_context(|| format!("no example number {number}"))?;
    let summary = rig_compat::summarize(&build);
    Ok(ExampleDetail {
        number,
        build,
        summary,
    })
}

#[cfg(test)]
mod tests {
    use rig_catalog::CatalogError;
    use rig_core::enums::UseCase;

    use super::*;

    #[test]
    fn second_example_is_content_creation() {
        let detail = detail(&Catalog::builtin().unwrap(), 2).expect("example exists");
        assert_eq!(detail.build.use_case, UseCase::ContentCreation);
        assert_eq!(detail.summary.budget, 2500.0);
    }

    #[test]
    fn zero_is_not_a_valid_number() {
        let err = detail(&Catalog::builtin().unwrap(), 0).expect_err("numbers start at 1");
        assert!(err.to_string().contains("start at 1"));
    }

    #[test]
    fn past_the_end_reports_catalog_error() {
        let err = detail(&Catalog::builtin().unwrap(), 5).expect_err("only four examples");
        assert_eq!(err.to_string(), "no example number 5");
        assert!(matches!(
            err.downcast_ref::<CatalogError>(),
            Some(CatalogError::ExampleOutOfRange { index: 4, count: 4 })
        ));
    }
}
