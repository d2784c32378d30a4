use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::ComponentInfo;

/// A power supply unit.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Psu {
    #[serde(flatten)]
    pub info: ComponentInfo,
    /// Rated continuous output in watts.
    pub wattage: u32,
    /// Efficiency certification label (e.g., `80+ Gold`).
    pub efficiency: String,
    pub modular: bool,
}
