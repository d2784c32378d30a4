use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::ComponentInfo;
use crate::enums::StorageKind;

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Storage {
    #[serde(flatten)]
    pub info: ComponentInfo,
    #[serde(rename = "type")]
    pub kind: StorageKind,
    /// Capacity in GB. Fractional values survive a round trip.
    pub capacity: f64,
    /// Sequential read in MB/s.
    pub read: u32,
    /// Sequential write in MB/s.
    pub write: u32,
}
