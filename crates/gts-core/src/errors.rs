//! Cross-cutting error types for GTS.
//!
//! Domain-specific errors (`DatabaseError`, `SchemaError`, `ApiError`) are
//! defined in their respective crates.

use thiserror::Error;

/// Errors that can be raised by any GTS crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Data failed validation (format, constraints, unknown enum value).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
