use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::ComponentInfo;

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Motherboard {
    #[serde(flatten)]
    pub info: ComponentInfo,
    pub socket: String,
    pub chipset: String,
    /// Memory generation the board accepts (e.g., `DDR5`).
    pub ram_type: String,
    /// Highest supported memory speed in MHz.
    pub max_ram_speed: u32,
    pub form_factor: String,
}
