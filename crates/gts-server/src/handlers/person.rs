use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use gts_core::entities::Person;
use gts_core::enums::EntityKind;
use gts_core::inputs::{NewPerson, PersonUpdate};
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
) -> Result<Json<ApiEnvelope<Vec<Person>>>, ApiError> {
    Ok(Json(ApiEnvelope::ok(state.service.list_people().await?)))
}

async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiEnvelope<Person>>, ApiError> {
    let person = state
        .service
        .get_person(path_id(&id)?)
        .await?
        .ok_or(ApiError::NotFound(EntityKind::Person))?;
    Ok(Json(ApiEnvelope::ok(person)))
}

async fn create(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiEnvelope<Person>>), ApiError> {
    let Json(body) = body?;
    let input: NewPerson = state.schemas.parse(body)?;
    let person = state.service.create_person(&input).await?;
    tracing::info!(person_id = person.person_id, "person created");
    Ok((StatusCode::CREATED, Json(ApiEnvelope::ok(person))))
}

async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ApiEnvelope<Person>>, ApiError> {
    let id = path_id(&id)?;
    let Json(body) = body?;
    let update: PersonUpdate = state.schemas.parse(body)?;
    let person = state
        .service
        .update_person(id, &update)
        .await?
        .ok_or(ApiError::NotFound(EntityKind::Person))?;
    Ok(Json(ApiEnvelope::ok(person)))
}

async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiEnvelope<()>>, ApiError> {
    if !state.service.delete_person(path_id(&id)?).await? {
        return Err(ApiError::NotFound(EntityKind::Person));
    }
    Ok(Json(ApiEnvelope::done("Person deleted successfully")))
}
