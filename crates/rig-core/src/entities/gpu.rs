use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::ComponentInfo;

/// A discrete graphics card.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Gpu {
    #[serde(flatten)]
    pub info: ComponentInfo,
    /// Video memory in GB.
    pub vram: u32,
    /// Thermal design power in watts.
    pub tdp: u32,
    /// Card length in millimeters.
    pub length: u32,
    /// Relative performance score; the configurator allows fractions.
    pub performance: f64,
}
