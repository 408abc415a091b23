//! Schema validation error types.

use gts_core::responses::FieldIssue;
use thiserror::Error;

/// Errors from the schema registry.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Requested schema name was not found in the registry.
    #[error("Schema not found: {0}")]
    NotFound(String),

    /// Payload did not pass validation.
    #[error("Validation failed: {issues:?}")]
    ValidationFailed {
        /// One entry per failing field.
        issues: Vec<FieldIssue>,
    },

    /// Schema generation or compilation error.
    #[error("Schema generation error: {0}")]
    Generation(String),
}

impl SchemaError {
    /// Field issues if this is a validation failure.
    #[must_use]
    pub fn issues(&self) -> Option<&[FieldIssue]> {
        match self {
            Self::ValidationFailed { issues } => Some(issues),
            _ => None,
        }
    }
}
