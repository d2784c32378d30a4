use rig_catalog::BuildSelection;
use rig_config::GeneralConfig;
use rig_core::enums::UseCase;
use rig_core::errors::validate_budget;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::AssembleArgs;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

/// Handle `rig assemble`.
pub fn handle(args: &AssembleArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let selection = selection_from_args(args, &ctx.config.general)?;
    let build = ctx.catalog()?.resolve(&selection)?;
    output(&build, flags.format)
}

/// Unset use case and budget fall back to the `[general]` defaults.
fn selection_from_args(
    args: &AssembleArgs,
    defaults: &GeneralConfig,
) -> anyhow::Result<BuildSelection> {
    let use_case = args
        .use_case
        .as_deref()
        .map(|raw| parse_enum::<UseCase>(raw, "use case"))
        .transpose()?
        .unwrap_or(defaults.default_use_case);
    let budget = validate_budget(args.budget.unwrap_or(defaults.default_budget))?;

    Ok(BuildSelection {
        use_case,
        budget,
        cpu: args.cpu.clone(),
        gpu: args.gpu.clone(),
        motherboard: args.motherboard.clone(),
        ram: args.ram.clone(),
        storage: args.storage.clone(),
        psu: args.psu.clone(),
        case: args.case.clone(),
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rig_catalog::Catalog;
    use rig_core::enums::Slot;

    use super::*;

    fn args() -> AssembleArgs {
        AssembleArgs {
            use_case: None,
            budget: None,
            cpu: None,
            motherboard: None,
            ram: None,
            gpu: None,
            storage: None,
            psu: None,
            case: None,
        }
    }

    #[test]
    fn defaults_come_from_config() {
        let selection =
            selection_from_args(&args(), &GeneralConfig::default()).expect("should build");
        assert_eq!(selection, BuildSelection::new(UseCase::Gaming, 1500.0));
    }

    #[test]
    fn explicit_values_win() {
        let mut args = args();
        args.use_case = Some("office".into());
        args.budget = Some(800.0);
        args.psu = Some("psu-cv650".into());

        let selection =
            selection_from_args(&args, &GeneralConfig::default()).expect("should build");
        assert_eq!(selection.use_case, UseCase::Office);
        assert_eq!(selection.psu.as_deref(), Some("psu-cv650"));

        let build = Catalog::builtin().unwrap().resolve(&selection).unwrap();
        assert_eq!(build.filled_slots(), vec![Slot::Psu]);
    }

    #[test]
    fn negative_budget_is_rejected() {
        let mut args = args();
        args.budget = Some(-10.0);
        let err = selection_from_args(&args, &GeneralConfig::default()).expect_err("negative");
        assert!(err.to_string().contains("must not be negative"));
    }

    #[test]
    fn unknown_use_case_is_rejected() {
        let mut args = args();
        args.use_case = Some("mining".into());
        let err = selection_from_args(&args, &GeneralConfig::default()).expect_err("bad use case");
        assert!(err.to_string().contains("invalid use case 'mining'"));
    }
}
