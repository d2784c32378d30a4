//! # rig-compat
//!
//! Stateless evaluation of a [`Build`] snapshot.
//!
//! Three pure operations make up the engine:
//! - [`evaluate`]: ordered compatibility issues
//! - [`total_cost`]: sum of selected component prices
//! - [`total_power_draw`]: CPU plus GPU TDP
//!
//! [`summarize`] bundles them with the budget comparison the summary panel
//! needs. Nothing in this crate allocates beyond its outputs, performs I/O, or
//! logs; callers may re-run it on every selection change.

mod rules;
mod summary;

use rig_core::entities::{Build, CompatibilityIssue};

pub use rules::{PSU_HEADROOM_DENOMINATOR, PSU_HEADROOM_NUMERATOR, recommended_wattage};
pub use summary::summarize;

/// Run every compatibility rule against `build`.
///
/// Rules fire in a fixed order (socket, RAM type, RAM speed, GPU clearance,
/// PSU headroom) and each is skipped unless all of its slots are filled. An
/// empty build yields an empty list.
#[must_use]
pub fn evaluate(build: &Build) -> Vec<CompatibilityIssue> {
    rules::RULES
        .iter()
        .filter_map(|rule| rule(build))
        .collect()
}

/// Sum of `price` over every filled slot. Empty slots contribute nothing.
#[must_use]
pub fn total_cost(build: &Build) -> f64 {
    build
        .components()
        .fold(0.0, |total, info| total + info.price)
}

/// CPU TDP plus GPU TDP in watts. No other component's draw is modelled.
#[must_use]
pub fn total_power_draw(build: &Build) -> u32 {
    let cpu = build.cpu.as_ref().map_or(0, |c| c.tdp);
    let gpu = build.gpu.as_ref().map_or(0, |g| g.tdp);
    cpu.saturating_add(gpu)
}
