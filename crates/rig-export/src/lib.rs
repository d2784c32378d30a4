//! # rig-export
//!
//! Turning a finished build into something that leaves the process:
//! - [`export`]: a JSON document with the build and its derived totals
//! - [`share_link`] / [`decode_share_link`]: a URL carrying the build
//!
//! Both refuse builds that are incomplete or have compatibility errors.
//! Warnings do not block either.

mod error;
mod export;
mod share;

pub use error::ExportError;
pub use export::{BuildExport, export, export_file_name, write_export};
pub use share::{SHARE_PARAM, decode_share_link, share_link};

use rig_core::entities::Build;

/// Check that `build` may leave the configurator.
///
/// # Errors
///
/// [`ExportError::Incomplete`] when any slot is empty, otherwise
/// [`ExportError::Incompatible`] when the engine reports `error` issues.
pub fn ensure_exportable(build: &Build) -> Result<(), ExportError> {
    let missing = build.missing_slots();
    if !missing.is_empty() {
        return Err(ExportError::Incomplete { missing });
    }

    let errors: Vec<_> = rig_compat::evaluate(build)
        .into_iter()
        .filter(rig_core::entities::CompatibilityIssue::is_error)
        .collect();
    if !errors.is_empty() {
        return Err(ExportError::Incompatible { errors });
    }

    Ok(())
}
