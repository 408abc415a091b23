//! Route handlers, one module per resource.

pub(crate) mod dashboard;
pub(crate) mod institute;
pub(crate) mod person;
pub(crate) mod subject_topic;
pub(crate) mod thesis;
pub(crate) mod university;

use axum::Json;
use axum::http::StatusCode;
use gts_core::responses::{ApiEnvelope, HealthStatus};

use crate::error::ApiError;

/// Parse a `/:id` path segment. Only positive integers name a record.
pub(crate) fn path_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse::<i64>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| ApiError::bad_request(format!("Invalid id '{raw}'")))
}

pub(crate) async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok".to_string(),
        message: "GTS Backend API is running".to_string(),
    })
}

pub(crate) async fn route_not_found() -> (StatusCode, Json<ApiEnvelope<()>>) {
    (
        StatusCode::NOT_FOUND,
        Json(ApiEnvelope::failure("Route not found")),
    )
}
