//! Cross-cutting error types for rigforge.
//!
//! Compatibility findings are data, not errors, and never appear here.
//! Crate-specific failures (catalog loading, export gating, config) live in
//! their own crates.

use thiserror::Error;

/// Errors that can be raised by any rigforge crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Data failed validation (range, format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Check that a budget ceiling is a finite, non-negative amount.
///
/// The engine itself never validates input; this is for callers that accept
/// budgets from users before constructing a [`Build`](crate::entities::Build).
///
/// # Errors
///
/// Returns [`CoreError::Validation`] for negative, NaN, or infinite budgets.
pub fn validate_budget(budget: f64) -> Result<f64, CoreError> {
    if !budget.is_finite() {
        return Err(CoreError::Validation(format!(
            "budget must be a finite number, got {budget}"
        )));
    }
    if budget < 0.0 {
        return Err(CoreError::Validation(format!(
            "budget must not be negative, got {budget}"
        )));
    }
    Ok(budget)
}
