use axum::body::Bytes;
use axum::extract::{Extension, Path};
use axum::http::header::{ACCEPT, CONTENT_TYPE};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use super::memory::KeyValueStore;
use super::types::StoreError;

/// `GET /{key}`: returns the stored payload under its stored media type.
///
/// `200` with the record's `Content-Type` and bytes on a compatible hit,
/// `404` for an unknown key, `406` when the stored type satisfies none of
/// the `Accept` patterns. Error bodies are plain text.
pub async fn handle_get(
    Extension(store): Extension<Arc<KeyValueStore>>,
    Path(key): Path<String>,
    headers: HeaderMap,
) -> Response {
    let accept = headers.get(ACCEPT).and_then(|value| value.to_str().ok());

    match store.get(&key, accept) {
        Ok(record) => (
            StatusCode::OK,
            [(CONTENT_TYPE, record.content_type)],
            record.payload,
        )
            .into_response(),
        Err(err @ StoreError::NotFound(_)) => {
            (StatusCode::NOT_FOUND, err.to_string()).into_response()
        }
        Err(err @ StoreError::NotAcceptable { .. }) => {
            (StatusCode::NOT_ACCEPTABLE, err.to_string()).into_response()
        }
        Err(err) => {
            tracing::error!("Failed to read key {}: {}", key, err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal storage error".to_string(),
            )
                .into_response()
        }
    }
}

/// `POST /{key}`: stores the request body under the declared media type.
///
/// `200` with a plain-text confirmation when the declared type is specific,
/// `400` when it is generic or malformed (the store is left untouched),
/// `500` on an unexpected storage fault.
pub async fn handle_set(
    Extension(store): Extension<Arc<KeyValueStore>>,
    Path(key): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok());

    match store.set(&key, content_type, body) {
        Ok(()) => (StatusCode::OK, "OK".to_string()).into_response(),
        Err(err @ (StoreError::GenericMediaType(_) | StoreError::MalformedMediaType)) => {
            tracing::warn!("Rejected write to key {}: {}", key, err);
            (StatusCode::BAD_REQUEST, err.to_string()).into_response()
        }
        Err(err) => {
            tracing::error!("Failed to store key {}: {}", key, err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal storage error".to_string(),
            )
                .into_response()
        }
    }
}
