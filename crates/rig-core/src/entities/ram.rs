use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::ComponentInfo;

/// A memory kit.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Ram {
    #[serde(flatten)]
    pub info: ComponentInfo,
    /// Memory generation, same vocabulary as [`Motherboard::ram_type`](super::Motherboard::ram_type).
    #[serde(rename = "type")]
    pub ram_type: String,
    /// Rated speed in MHz.
    pub speed: u32,
    /// Capacity in GB.
    pub capacity: f64,
}
