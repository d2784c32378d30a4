use rig_core::entities::Build;
use rig_core::enums::{PerformanceTier, Slot};
use rig_core::responses::{BuildSummary, SlotSummary};

use crate::{evaluate, recommended_wattage, total_cost, total_power_draw};

/// Derive the full summary panel for `build`.
#[must_use]
pub fn summarize(build: &Build) -> BuildSummary {
    let issues = evaluate(build);
    let error_count = issues.iter().filter(|issue| issue.is_error()).count();
    let warning_count = issues.len() - error_count;

    let total_cost = total_cost(build);
    let complete = build.is_complete();

    let slots = Slot::ALL
        .into_iter()
        .map(|slot| {
            let component = build.component(slot);
            SlotSummary {
                slot,
                label: slot.label().to_string(),
                component: component.map(|c| c.name.clone()),
                price: component.map(|c| c.price),
            }
        })
        .collect();

    let budget_overrun = (total_cost > build.budget).then(|| total_cost - build.budget);

    BuildSummary {
        use_case: build.use_case,
        budget: build.budget,
        tier: PerformanceTier::for_budget(build.budget),
        total_cost,
        total_power_draw: total_power_draw(build),
        recommended_wattage: recommended_wattage(build),
        all_compatible: complete && issues.is_empty(),
        exportable: complete && error_count == 0,
        issues,
        error_count,
        warning_count,
        slots,
        complete,
        budget_overrun,
    }
}
