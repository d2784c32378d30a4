use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Severity;

/// A derived, non-fatal finding about how selected parts fit together.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CompatibilityIssue {
    #[serde(rename = "type")]
    pub severity: Severity,
    /// The component pair or component the issue concerns (e.g., `CPU/Motherboard`).
    pub component: String,
    pub message: String,
}

impl CompatibilityIssue {
    #[must_use]
    pub fn error(component: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            component: component.into(),
            message: message.into(),
        }
    }

    #[must_use]
    pub fn warning(component: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            component: component.into(),
            message: message.into(),
        }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}
