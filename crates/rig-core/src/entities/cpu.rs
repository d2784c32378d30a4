use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::ComponentInfo;

/// A processor.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Cpu {
    #[serde(flatten)]
    pub info: ComponentInfo,
    /// Socket identifier (e.g., `AM5`, `LGA1700`).
    pub socket: String,
    pub cores: u32,
    pub threads: u32,
    /// Thermal design power in watts.
    pub tdp: u32,
    pub integrated_graphics: bool,
}
