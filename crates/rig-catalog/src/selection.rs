use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use rig_core::enums::UseCase;

/// A build described by component ids instead of full component records.
///
/// This is how the example gallery is stored and how `rig assemble` takes
/// its arguments; [`Catalog::resolve`](crate::Catalog::resolve) turns it into a
/// [`Build`](rig_core::entities::Build).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BuildSelection {
    pub use_case: UseCase,
    pub budget: f64,
    #[serde(default)]
    pub cpu: Option<String>,
    #[serde(default)]
    pub gpu: Option<String>,
    #[serde(default)]
    pub motherboard: Option<String>,
    #[serde(default)]
    pub ram: Option<String>,
    #[serde(default)]
    pub storage: Option<String>,
    #[serde(default)]
    pub psu: Option<String>,
    #[serde(default)]
    pub case: Option<String>,
}

impl BuildSelection {
    #[must_use]
    pub const fn new(use_case: UseCase, budget: f64) -> Self {
        Self {
            use_case,
            budget,
            cpu: None,
            gpu: None,
            motherboard: None,
            ram: None,
            storage: None,
            psu: None,
            case: None,
        }
    }
}
