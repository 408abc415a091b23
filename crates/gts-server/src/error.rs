//! HTTP error classification.
//!
//! Every handler returns `Result<_, ApiError>`. The conversion into a
//! response picks the status code and the user-facing message; database
//! detail never reaches the client except through the development-only
//! `stack` field (see [`crate::middleware::attach_stack`]).

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use gts_core::enums::EntityKind;
use gts_core::responses::{ApiEnvelope, FieldIssue};
use gts_db::error::DatabaseError;
use gts_schema::SchemaError;
use thiserror::Error;

pub(crate) const INTERNAL_MESSAGE: &str = "Internal Server Error";

const MISSING_REFERENCE_MESSAGE: &str =
    "Cannot create or update this record because the referenced item does not exist.";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Validation failed")]
    Validation(Vec<FieldIssue>),

    #[error("{} not found", .0.label())]
    NotFound(EntityKind),

    /// Unparseable request: malformed JSON, bad path id, oversized body.
    #[error("{message}")]
    BadRequest { status: StatusCode, message: String },

    #[error(transparent)]
    Database(#[from] DatabaseError),

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub(crate) fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }
}

impl From<SchemaError> for ApiError {
    fn from(err: SchemaError) -> Self {
        match err {
            SchemaError::ValidationFailed { issues } => Self::Validation(issues),
            other => Self::Internal(other.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

/// Message for a delete blocked by dependent rows.
#[must_use]
pub fn still_referenced_message(
    entity: EntityKind,
    referenced_by: Option<EntityKind>,
) -> &'static str {
    use EntityKind::{
        Institute, Person, SubjectTopic, SupervisorAssignment, Thesis, ThesisSubjectTopic,
        University,
    };

    match (entity, referenced_by) {
        (University, Some(Institute)) => {
            "Cannot delete this university because it has associated institutes. Please delete or reassign the institutes first."
        }
        (University, _) => {
            "Cannot delete this university because it is referenced by other records. Please remove the references first."
        }
        (Institute, Some(Thesis)) => {
            "Cannot delete this institute because it has associated theses. Please delete or reassign the theses first."
        }
        (Institute, _) => {
            "Cannot delete this institute because it is referenced by other records. Please remove the references first."
        }
        (Person, Some(Thesis | SupervisorAssignment)) => {
            "Cannot delete this person because they are associated with theses (as author or supervisor). Please remove these associations first."
        }
        (Person, _) => {
            "Cannot delete this person because they are referenced by other records. Please remove the references first."
        }
        (SubjectTopic, Some(Thesis | ThesisSubjectTopic)) => {
            "Cannot delete this subject topic because it is associated with theses. Please remove these associations first."
        }
        (SubjectTopic, _) => {
            "Cannot delete this subject topic because it is referenced by other records. Please remove the references first."
        }
        (Thesis, _) => {
            "Cannot delete this thesis because it is referenced by other records. Please remove the references first."
        }
        (_, Some(Institute)) => {
            "Cannot delete this item because it has associated institutes. Please delete or reassign the institutes first."
        }
        (_, Some(Thesis)) => {
            "Cannot delete this item because it has associated theses. Please delete or reassign the theses first."
        }
        (_, Some(Person)) => {
            "Cannot delete this item because it has associated people. Please remove the references first."
        }
        _ => {
            "Cannot delete this item because it is referenced by other records. Please remove the references first."
        }
    }
}

/// Error chain of a 500, stored on the response for the stack middleware.
#[derive(Debug, Clone)]
pub(crate) struct ErrorStack(pub String);

fn envelope(status: StatusCode, body: ApiEnvelope<()>) -> Response {
    (status, Json(body)).into_response()
}

fn internal(detail: String) -> Response {
    tracing::error!(error = %detail, "request failed");
    let mut response = envelope(
        StatusCode::INTERNAL_SERVER_ERROR,
        ApiEnvelope::failure(INTERNAL_MESSAGE),
    );
    response.extensions_mut().insert(ErrorStack(detail));
    response
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(issues) => envelope(
                StatusCode::BAD_REQUEST,
                ApiEnvelope::failure("Validation failed").with_details(issues),
            ),
            Self::NotFound(entity) => envelope(
                StatusCode::NOT_FOUND,
                ApiEnvelope::failure(format!("{} not found", entity.label())),
            ),
            Self::BadRequest { status, message } => envelope(status, ApiEnvelope::failure(message)),
            Self::Database(DatabaseError::StillReferenced {
                entity,
                referenced_by,
            }) => envelope(
                StatusCode::BAD_REQUEST,
                ApiEnvelope::failure(still_referenced_message(entity, referenced_by)),
            ),
            Self::Database(DatabaseError::MissingReference { .. }) => envelope(
                StatusCode::BAD_REQUEST,
                ApiEnvelope::failure(MISSING_REFERENCE_MESSAGE),
            ),
            Self::Database(DatabaseError::Duplicate { entity }) => envelope(
                StatusCode::CONFLICT,
                ApiEnvelope::failure(format!("{} already exists", entity.label())),
            ),
            Self::Database(err) => internal(format!("{err:?}")),
            Self::Internal(detail) => internal(detail),
        }
    }
}
