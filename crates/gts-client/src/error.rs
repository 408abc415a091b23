//! Client error types.

use gts_core::errors::CoreError;
use gts_core::responses::FieldIssue;
use thiserror::Error;

/// Errors that can occur when talking to the registry API.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a failure envelope.
    #[error("API error ({status}): {message}")]
    Api {
        status: u16,
        /// The envelope's `error` text, or the raw body if it was not an envelope.
        message: String,
        /// Field issues of a validation failure; empty otherwise.
        details: Vec<FieldIssue>,
    },

    /// A success envelope without the expected payload.
    #[error("parse error: {0}")]
    Parse(String),

    /// A view could not be translated into a request payload.
    #[error(transparent)]
    View(#[from] CoreError),
}

impl ClientError {
    /// HTTP status of an API failure.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
