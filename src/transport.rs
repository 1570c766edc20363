// Shared plumbing for the outbound JSON calls

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::HttpConfig;
use crate::error::{ApiError, ClientError};
use crate::retry::retry_with_backoff;

const MAX_ERROR_BODY_CHARS: usize = 200;

pub(crate) fn build_http_client(http: &HttpConfig) -> Result<reqwest::Client, ClientError> {
    reqwest::Client::builder()
        .timeout(Duration::from_millis(http.timeout_ms))
        .connect_timeout(Duration::from_millis(http.connect_timeout_ms))
        .build()
        .map_err(|e| ClientError::InitError(e.to_string()))
}

/// Sends the request produced by `build`, retrying transient failures per
/// `http.retry`, and decodes a 2xx body as `T`.
pub(crate) async fn send_json<T, F>(http: &HttpConfig, call: &str, build: F) -> Result<T, ApiError>
where
    T: DeserializeOwned + Send,
    F: Fn() -> reqwest::RequestBuilder + Sync,
{
    let timeout_ms = http.timeout_ms;
    let build = &build;

    retry_with_backoff(&http.retry, call, || async move {
        let response = build()
            .send()
            .await
            .map_err(|e| ApiError::from_transport(e, timeout_ms))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::from_transport(e, timeout_ms))?;

        if !status.is_success() {
            return Err(ApiError::from_status(status, error_message(&body)));
        }

        serde_json::from_str(&body).map_err(|e| ApiError::DecodeError(format!("{call}: {e}")))
    })
    .await
}

// Pulls a readable message out of an error body; falls back to a truncated body
pub(crate) fn error_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        let described = value
            .get("error_description")
            .or_else(|| value.pointer("/error/message"))
            .or_else(|| value.get("error_message"))
            .or_else(|| value.get("error"))
            .and_then(Value::as_str);
        if let Some(message) = described {
            return message.to_string();
        }
    }
    body.chars().take(MAX_ERROR_BODY_CHARS).collect()
}
