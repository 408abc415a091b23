use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use gts_core::entities::SubjectTopic;
use gts_core::enums::EntityKind;
use gts_core::inputs::{NewSubjectTopic, SubjectTopicUpdate};
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
) -> Result<Json<ApiEnvelope<Vec<SubjectTopic>>>, ApiError> {
    Ok(Json(ApiEnvelope::ok(state.service.list_subject_topics().await?)))
}

async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiEnvelope<SubjectTopic>>, ApiError> {
    let subject_topic = state
        .service
        .get_subject_topic(path_id(&id)?)
        .await?
        .ok_or(ApiError::NotFound(EntityKind::SubjectTopic))?;
    Ok(Json(ApiEnvelope::ok(subject_topic)))
}

async fn create(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiEnvelope<SubjectTopic>>), ApiError> {
    let Json(body) = body?;
    let input: NewSubjectTopic = state.schemas.parse(body)?;
    let subject_topic = state.service.create_subject_topic(&input).await?;
    tracing::info!(topic_id = subject_topic.topic_id, "subject topic created");
    Ok((StatusCode::CREATED, Json(ApiEnvelope::ok(subject_topic))))
}

async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ApiEnvelope<SubjectTopic>>, ApiError> {
    let id = path_id(&id)?;
    let Json(body) = body?;
    let update: SubjectTopicUpdate = state.schemas.parse(body)?;
    let subject_topic = state
        .service
        .update_subject_topic(id, &update)
        .await?
        .ok_or(ApiError::NotFound(EntityKind::SubjectTopic))?;
    Ok(Json(ApiEnvelope::ok(subject_topic)))
}

async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiEnvelope<()>>, ApiError> {
    if !state.service.delete_subject_topic(path_id(&id)?).await? {
        return Err(ApiError::NotFound(EntityKind::SubjectTopic));
    }
    Ok(Json(ApiEnvelope::done("Subject topic deleted successfully")))
}
