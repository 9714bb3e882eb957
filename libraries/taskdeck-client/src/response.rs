//! Shared handling of server responses.

use crate::error::{ClientError, Result};
use reqwest::{header::RETRY_AFTER, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

/// Turn a non-2xx response into the matching `ClientError`.
pub(crate) async fn ensure_success(response: Response) -> Result<Response> {
    let status = response.status();

    if status.is_success() {
        return Ok(response);
    }

    if status == StatusCode::TOO_MANY_REQUESTS {
        let retry_after_secs = response
            .headers()
            .get(RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(DEFAULT_RETRY_AFTER_SECS);
        warn!(retry_after_secs, "Rate limited by server");
        return Err(ClientError::RateLimited { retry_after_secs });
    }

    let body = response.text().await.unwrap_or_default();
    Err(ClientError::ServerRejected {
        status: status.as_u16(),
        message: extract_message(&body),
    })
}

/// Check the status, then decode the JSON body.
pub(crate) async fn read_json<T: DeserializeOwned>(response: Response, what: &str) -> Result<T> {
    let response = ensure_success(response).await?;
    response
        .json()
        .await
        .map_err(|e| ClientError::Parse(format!("Failed to parse {}: {}", what, e)))
}

/// Pull a human-readable message out of an error body.
///
/// Accepts `{"error": "..."}`, `{"error": {"message": "..."}}`,
/// `{"detail": "..."}`, `{"detail": [{"msg": "..."}]}` and `{"message": "..."}`.
pub(crate) fn extract_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;

    let candidates = [
        value.get("error").and_then(Value::as_str),
        value
            .get("error")
            .and_then(|e| e.get("message"))
            .and_then(Value::as_str),
        value.get("detail").and_then(Value::as_str),
        value
            .get("detail")
            .and_then(Value::as_array)
            .and_then(|items| items.first())
            .and_then(|item| item.get("msg"))
            .and_then(Value::as_str),
        value.get("message").and_then(Value::as_str),
    ];

    let message = candidates
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|m| !m.is_empty())
        .map(str::to_string);
    message
}
