//! Export and share-link error types.

use std::path::PathBuf;

use rig_core::entities::CompatibilityIssue;
use rig_core::enums::Slot;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    /// One or more slots are still empty.
    #[error("Build is incomplete (missing: {})", join_slots(.missing))]
    Incomplete { missing: Vec<Slot> },

    /// The engine reported at least one `error` issue.
    #[error("Build has {} compatibility error(s): {}", .errors.len(), join_messages(.errors))]
    Incompatible { errors: Vec<CompatibilityIssue> },

    #[error("Build JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to write export file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A share link carried no `build` parameter, or an empty one.
    #[error("Share link has no build payload")]
    MissingPayload,

    #[error("Share payload is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Share payload is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

fn join_slots(slots: &[Slot]) -> String {
    slots
        .iter()
        .map(|slot| slot.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn join_messages(issues: &[CompatibilityIssue]) -> String {
    issues
        .iter()
        .map(|issue| issue.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
