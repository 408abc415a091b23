//! Request tracing, CORS, and the development error stack.

use std::time::Instant;

use axum::Json;
use axum::body::Body;
use axum::extract::State;
use axum::http::header::{
    ACCESS_CONTROL_ALLOW_CREDENTIALS, ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
    ACCESS_CONTROL_ALLOW_ORIGIN, ACCESS_CONTROL_REQUEST_HEADERS, ORIGIN, VARY,
};
use axum::http::{HeaderValue, Method, Request, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use gts_core::responses::ApiEnvelope;
use tracing::Instrument;

use crate::AppState;
use crate::error::{ErrorStack, INTERNAL_MESSAGE};

const ALLOWED_METHODS: &str = "GET,HEAD,PUT,PATCH,POST,DELETE";

pub(crate) async fn request_tracing(request: Request<Body>, next: Next) -> Response {
    let method = request.method().to_string();
    let route = request.uri().path().to_string();
    let span = tracing::info_span!("http.request", method = %method, route = %route);

    let started = Instant::now();
    let response = next.run(request).instrument(span.clone()).await;
    let latency_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    span.in_scope(|| {
        tracing::info!(
            status = response.status().as_u16(),
            latency_ms,
            "request completed"
        );
    });
    response
}

/// Answer preflights and stamp CORS headers for configured origins.
///
/// Requests from other origins are served without CORS headers, which
/// browsers treat as a refusal.
pub(crate) async fn cors(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let origin = request
        .headers()
        .get(ORIGIN)
        .and_then(|value| value.to_str().ok())
        .filter(|origin| {
            state
                .config
                .cors_allowed_origins
                .iter()
                .any(|allowed| allowed == origin)
        })
        .and_then(|origin| HeaderValue::from_str(origin).ok());
    let requested_headers = request.headers().get(ACCESS_CONTROL_REQUEST_HEADERS).cloned();
    let preflight = request.method() == Method::OPTIONS;

    let mut response = if preflight {
        StatusCode::NO_CONTENT.into_response()
    } else {
        next.run(request).await
    };

    let headers = response.headers_mut();
    headers.append(VARY, HeaderValue::from_static("origin"));
    if let Some(origin) = origin {
        headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, origin);
        headers.insert(
            ACCESS_CONTROL_ALLOW_CREDENTIALS,
            HeaderValue::from_static("true"),
        );
        if preflight {
            headers.insert(
                ACCESS_CONTROL_ALLOW_METHODS,
                HeaderValue::from_static(ALLOWED_METHODS),
            );
            headers.insert(
                ACCESS_CONTROL_ALLOW_HEADERS,
                requested_headers.unwrap_or_else(|| HeaderValue::from_static("content-type")),
            );
        }
    }
    response
}

/// In development, expose the error chain of a 500 as `stack`.
pub(crate) async fn attach_stack(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let response = next.run(request).await;
    if !state.config.environment.is_development() {
        return response;
    }
    match response.extensions().get::<ErrorStack>() {
        Some(ErrorStack(stack)) => (
            response.status(),
            Json(ApiEnvelope::<()>::failure(INTERNAL_MESSAGE).with_stack(Some(stack.clone()))),
        )
            .into_response(),
        None => response,
    }
}
