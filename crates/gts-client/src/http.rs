//! Envelope handling shared by every resource call.

use gts_core::responses::ApiEnvelope;
use serde::de::DeserializeOwned;

use crate::error::ClientError;

/// Turn a non-success response into [`ClientError::Api`].
///
/// Failure bodies are parsed as envelopes to recover the `error` text and
/// validation `details`; anything else is reported verbatim.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    if resp.status().is_success() {
        return Ok(resp);
    }
    let status = resp.status().as_u16();
    let text = resp.text().await.unwrap_or_default();
    Err(match serde_json::from_str::<ApiEnvelope<serde_json::Value>>(&text) {
        Ok(envelope) => ClientError::Api {
            status,
            message: envelope.error.unwrap_or(text),
            details: envelope.details.unwrap_or_default(),
        },
        Err(_) => ClientError::Api {
            status,
            message: text,
            details: Vec::new(),
        },
    })
}

/// Unwrap the `data` of a success envelope.
pub async fn data<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ClientError> {
    let envelope: ApiEnvelope<T> = check_response(resp).await?.json().await?;
    envelope
        .data
        .ok_or_else(|| ClientError::Parse("success envelope without data".to_string()))
}

/// Like [`data`], but a 404 is `None`.
pub async fn optional_data<T: DeserializeOwned>(
    resp: reqwest::Response,
) -> Result<Option<T>, ClientError> {
    if resp.status() == reqwest::StatusCode::NOT_FOUND {
        return Ok(None);
    }
    data(resp).await.map(Some)
}

/// Accept a delete-style success envelope, which carries only a message.
pub async fn done(resp: reqwest::Response) -> Result<(), ClientError> {
    let envelope: ApiEnvelope<serde_json::Value> = check_response(resp).await?.json().await?;
    tracing::debug!(message = envelope.message.as_deref().unwrap_or(""), "api call done");
    Ok(())
}
