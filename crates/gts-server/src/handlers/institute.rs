use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use gts_core::entities::Institute;
use gts_core::enums::EntityKind;
use gts_core::inputs::{InstituteUpdate, NewInstitute};
use gts_core::responses::ApiEnvelope;
use serde_json::Value;

use super::path_id;
use crate::AppState;
use crate::error::ApiError;

pub(crate) fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list).post(create))
        .route("/university/:university_id", get(list_for_university))
        .route("/:id", get(show).put(update).delete(remove))
}

async fn list(
    State(state): State<AppState>,
) -> Result<Json<ApiEnvelope<Vec<Institute>>>, ApiError> {
    Ok(Json(ApiEnvelope::ok(state.service.list_institutes().await?)))
}

/// Institutes of one university. An unknown university yields an empty list.
async fn list_for_university(
    State(state): State<AppState>,
    Path(university_id): Path<String>,
) -> Result<Json<ApiEnvelope<Vec<Institute>>>, ApiError> {
    let institutes = state
        .service
        .list_institutes_for_university(path_id(&university_id)?)
        .await?;
    Ok(Json(ApiEnvelope::ok(institutes)))
}

async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiEnvelope<Institute>>, ApiError> {
    let institute = state
        .service
        .get_institute(path_id(&id)?)
        .await?
        .ok_or(ApiError::NotFound(EntityKind::Institute))?;
    Ok(Json(ApiEnvelope::ok(institute)))
}

async fn create(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiEnvelope<Institute>>), ApiError> {
    let Json(body) = body?;
    let input: NewInstitute = state.schemas.parse(body)?;
    let institute = state.service.create_institute(&input).await?;
    tracing::info!(institute_id = institute.institute_id, "institute created");
    Ok((StatusCode::CREATED, Json(ApiEnvelope::ok(institute))))
}

async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ApiEnvelope<Institute>>, ApiError> {
    let id = path_id(&id)?;
    let Json(body) = body?;
    let update: InstituteUpdate = state.schemas.parse(body)?;
    let institute = state
        .service
        .update_institute(id, &update)
        .await?
        .ok_or(ApiError::NotFound(EntityKind::Institute))?;
    Ok(Json(ApiEnvelope::ok(institute)))
}

async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiEnvelope<()>>, ApiError> {
    if !state.service.delete_institute(path_id(&id)?).await? {
        return Err(ApiError::NotFound(EntityKind::Institute));
    }
    Ok(Json(ApiEnvelope::done("Institute deleted successfully")))
}
