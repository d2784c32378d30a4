use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::ComponentInfo;

/// A chassis.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Case {
    #[serde(flatten)]
    pub info: ComponentInfo,
    pub form_factor: String,
    /// Longest graphics card the case fits, in millimeters.
    #[serde(rename = "maxGPULength")]
    pub max_gpu_length: u32,
}
