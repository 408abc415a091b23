//! Wire response types shared by `gts-server` and `gts-client`.

use serde::{Deserialize, Serialize};

/// Uniform response envelope for every API endpoint.
///
/// Success: `{"success": true, "data": ...}` (delete endpoints carry a
/// `message` instead of `data`). Failure: `{"success": false, "error": ...}`
/// plus `details` for validation failures.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldIssue>>,
    /// Error chain, only present when the server runs in development mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
}

impl<T> ApiEnvelope<T> {
    #[must_use]
    pub const fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            error: None,
            details: None,
            stack: None,
        }
    }

    #[must_use]
    pub fn done(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            message: Some(message.into()),
            error: None,
            details: None,
            stack: None,
        }
    }

    #[must_use]
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: None,
            error: Some(error.into()),
            details: None,
            stack: None,
        }
    }

    #[must_use]
    pub fn with_details(mut self, details: Vec<FieldIssue>) -> Self {
        self.details = Some(details);
        self
    }

    #[must_use]
    pub fn with_stack(mut self, stack: Option<String>) -> Self {
        self.stack = stack;
        self
    }
}

/// One field-level validation failure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldIssue {
    /// Dotted path into the payload (`"supervisor_ids.0"`), empty for the root.
    pub path: String,
    pub message: String,
}

impl FieldIssue {
    #[must_use]
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Response from `GET /dashboard/stats`, keyed `totalTheses` and so on.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_theses: u64,
    pub total_universities: u64,
    pub total_people: u64,
    pub total_institutes: u64,
}

/// Response from `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthStatus {
    pub status: String,
    pub message: String,
}
