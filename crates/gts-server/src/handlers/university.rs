use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use gts_core::entities::University;
use gts_core::enums::EntityKind;
use gts_core::inputs::{NewUniversity, UniversityUpdate};
use gts_core::responses::ApiEnvelope;
use serde_json::Value;

use super::path_id;
use crate::AppState;
use crate::error::ApiError;

pub(crate) fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list).post(create))
        .route("/:id", get(show).put(update).delete(remove))
}

async fn list(
    State(state): State<AppState>,
) -> Result<Json<ApiEnvelope<Vec<University>>>, ApiError> {
    Ok(Json(ApiEnvelope::ok(state.service.list_universities().await?)))
}

async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiEnvelope<University>>, ApiError> {
    let university = state
        .service
        .get_university(path_id(&id)?)
        .await?
        .ok_or(ApiError::NotFound(EntityKind::University))?;
    Ok(Json(ApiEnvelope::ok(university)))
}

async fn create(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiEnvelope<University>>), ApiError> {
    let Json(body) = body?;
    let input: NewUniversity = state.schemas.parse(body)?;
    let university = state.service.create_university(&input).await?;
    tracing::info!(university_id = university.university_id, "university created");
    Ok((StatusCode::CREATED, Json(ApiEnvelope::ok(university))))
}

async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ApiEnvelope<University>>, ApiError> {
    let id = path_id(&id)?;
    let Json(body) = body?;
    let update: UniversityUpdate = state.schemas.parse(body)?;
    let university = state
        .service
        .update_university(id, &update)
        .await?
        .ok_or(ApiError::NotFound(EntityKind::University))?;
    Ok(Json(ApiEnvelope::ok(university)))
}

async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiEnvelope<()>>, ApiError> {
    if !state.service.delete_university(path_id(&id)?).await? {
        return Err(ApiError::NotFound(EntityKind::University));
    }
    Ok(Json(ApiEnvelope::done("University deleted successfully")))
}
