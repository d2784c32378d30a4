//! Response types derived from a build and returned as JSON by `rig` commands.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::CompatibilityIssue;
use crate::enums::{PerformanceTier, Slot, UseCase};

/// One row of a build summary's component list.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SlotSummary {
    pub slot: Slot,
    pub label: String,
    /// Selected component's display name, `None` for an empty slot.
    pub component: Option<String>,
    pub price: Option<f64>,
}

/// Everything the summary panel shows for a build.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BuildSummary {
    pub use_case: UseCase,
    pub budget: f64,
    pub tier: PerformanceTier,
    pub total_cost: f64,
    /// Combined CPU and GPU TDP in watts.
    pub total_power_draw: u32,
    /// Suggested PSU wattage; `None` when neither CPU nor GPU is selected.
    pub recommended_wattage: Option<u32>,
    pub issues: Vec<CompatibilityIssue>,
    pub error_count: usize,
    pub warning_count: usize,
    pub slots: Vec<SlotSummary>,
    /// Every slot holds a component.
    pub complete: bool,
    /// Complete with no issues at all.
    pub all_compatible: bool,
    /// Complete with no `error` issues; warnings are allowed.
    pub exportable: bool,
    /// How far total cost exceeds the budget, only when it does.
    pub budget_overrun: Option<f64>,
}

/// Response from `rig tier`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct TierResponse {
    pub budget: f64,
    pub tier: PerformanceTier,
    pub label: String,
    pub description: String,
}

impl TierResponse {
    #[must_use]
    pub fn for_budget(budget: f64) -> Self {
        let tier = PerformanceTier::for_budget(budget);
        Self {
            budget,
            tier,
            label: tier.label().to_string(),
            description: tier.description().to_string(),
        }
    }
}
