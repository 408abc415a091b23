use axum::Json;
use axum::extract::State;
use gts_core::responses::{ApiEnvelope, DashboardStats};

use crate::AppState;
use crate::error::ApiError;

pub(crate) async fn stats(
    State(state): State<AppState>,
) -> Result<Json<ApiEnvelope<DashboardStats>>, ApiError> {
    Ok(Json(ApiEnvelope::ok(state.service.dashboard_stats().await?)))
}
