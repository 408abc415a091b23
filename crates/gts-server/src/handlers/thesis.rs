//! Thesis routes. Creates and updates carry their associations; the
//! single-thesis read returns them attached.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use gts_core::entities::{Thesis, ThesisDetail};
use gts_core::enums::EntityKind;
use gts_core::filters::ThesisSearchParams;
use gts_core::inputs::{NewThesis, ThesisUpdate};
use gts_core::responses::ApiEnvelope;
use gts_schema::parse_search_params;
use serde_json::Value;

use super::path_id;
use crate::AppState;
use crate::error::ApiError;

pub(crate) fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list).post(create))
        .route("/search", get(search))
        .route("/:id", get(show).put(update).delete(remove))
}

async fn list(State(state): State<AppState>) -> Result<Json<ApiEnvelope<Vec<Thesis>>>, ApiError> {
    Ok(Json(ApiEnvelope::ok(state.service.list_theses().await?)))
}

async fn search(
    State(state): State<AppState>,
    params: Result<Query<ThesisSearchParams>, QueryRejection>,
) -> Result<Json<ApiEnvelope<Vec<Thesis>>>, ApiError> {
    let Query(params) = params?;
    let filter = parse_search_params(&params)?;
    let theses = state.service.search_theses(&filter).await?;
    tracing::debug!(matches = theses.len(), "thesis search served");
    Ok(Json(ApiEnvelope::ok(theses)))
}

async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiEnvelope<ThesisDetail>>, ApiError> {
    let detail = state
        .service
        .get_thesis_detail(path_id(&id)?)
        .await?
        .ok_or(ApiError::NotFound(EntityKind::Thesis))?;
    Ok(Json(ApiEnvelope::ok(detail)))
}

async fn create(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiEnvelope<Thesis>>), ApiError> {
    let Json(body) = body?;
    let input: NewThesis = state.schemas.parse(body)?;
    let thesis = state.service.create_thesis(&input).await?;
    Ok((StatusCode::CREATED, Json(ApiEnvelope::ok(thesis))))
}

async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ApiEnvelope<Thesis>>, ApiError> {
    let id = path_id(&id)?;
    let Json(body) = body?;
    let update: ThesisUpdate = state.schemas.parse(body)?;
    let thesis = state
        .service
        .update_thesis(id, &update)
        .await?
        .ok_or(ApiError::NotFound(EntityKind::Thesis))?;
    Ok(Json(ApiEnvelope::ok(thesis)))
}

async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiEnvelope<()>>, ApiError> {
    let id = path_id(&id)?;
    if !state.service.delete_thesis(id).await? {
        return Err(ApiError::NotFound(EntityKind::Thesis));
    }
    tracing::info!(thesis_id = id, "thesis deleted");
    Ok(Json(ApiEnvelope::done("Thesis deleted successfully")))
}
