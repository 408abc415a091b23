//! # gts-server
//!
//! axum HTTP API for the thesis registry.
//!
//! Every route lives under `/api` and answers with the shared
//! [`ApiEnvelope`](gts_core::responses::ApiEnvelope). Request bodies are
//! validated by `gts-schema` before they reach the `gts-db` service.

pub mod cli;
pub mod error;
mod handlers;
mod middleware;

use std::sync::Arc;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware::{from_fn, from_fn_with_state};
use axum::routing::get;
use gts_config::ServerConfig;
use gts_db::service::RegistryService;
use gts_schema::SchemaRegistry;

pub use error::ApiError;

/// Shared handler state. Cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<RegistryService>,
    pub schemas: Arc<SchemaRegistry>,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    #[must_use]
    pub fn new(service: RegistryService, config: ServerConfig) -> Self {
        Self {
            service: Arc::new(service),
            schemas: Arc::new(SchemaRegistry::new()),
            config: Arc::new(config),
        }
    }
}

/// The full application router with middleware applied.
pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .nest("/universities", handlers::university::routes())
        .nest("/institutes", handlers::institute::routes())
        .nest("/people", handlers::person::routes())
        .nest("/subject-topics", handlers::subject_topic::routes())
        .nest("/theses", handlers::thesis::routes())
        .route("/dashboard/stats", get(handlers::dashboard::stats))
        .route("/health", get(handlers::health));

    Router::new()
        .nest("/api", api)
        .fallback(handlers::route_not_found)
        .layer(DefaultBodyLimit::max(state.config.max_body_bytes))
        .layer(from_fn_with_state(state.clone(), middleware::attach_stack))
        .layer(from_fn_with_state(state.clone(), middleware::cors))
        .layer(from_fn(middleware::request_tracing))
        .with_state(state)
}
