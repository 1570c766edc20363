// Error types shared by the outbound clients and the orchestrator

use thiserror::Error;

// Errors from a single outbound call (geocoder or travel search)
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout after {0}ms")]
    Timeout(u64),

    #[error("API error: {status_code} - {message}")]
    ApiResponseError {
        status_code: u16,
        message: String,
        is_retryable: bool,
    },

    #[error("Decode error: {0}")]
    DecodeError(String),
}

impl ApiError {
    /// Transient failures worth another attempt: transport errors, timeouts,
    /// and responses the server marked as retryable (429 and 5xx).
    pub fn is_retryable(&self) -> bool {
        match self {
            ApiError::NetworkError(_) | ApiError::Timeout(_) => true,
            ApiError::ApiResponseError { is_retryable, .. } => *is_retryable,
            ApiError::DecodeError(_) => false,
        }
    }

    pub(crate) fn from_status(status: reqwest::StatusCode, message: String) -> Self {
        ApiError::ApiResponseError {
            status_code: status.as_u16(),
            message,
            is_retryable: status == reqwest::StatusCode::TOO_MANY_REQUESTS
                || status.is_server_error(),
        }
    }

    pub(crate) fn from_transport(err: reqwest::Error, timeout_ms: u64) -> Self {
        if err.is_timeout() {
            ApiError::Timeout(timeout_ms)
        } else if err.is_decode() {
            ApiError::DecodeError(err.to_string())
        } else {
            ApiError::NetworkError(err.to_string())
        }
    }
}

// Errors raised while building a client
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Initialization error: {0}")]
    InitError(String),
}
