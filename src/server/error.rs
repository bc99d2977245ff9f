//! HTTP error responses.
//!
//! Maps the relay's error taxonomy to status codes and a `{error, details}`
//! JSON body.

use axum::{
    Json,
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;
use tracing::error;

use crate::error::{Error, UpstreamError};

/// Error response sent to HTTP callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// Response status.
    pub status_code: StatusCode,
    /// Human-readable summary.
    pub error: String,
    /// Underlying cause.
    pub details: String,
}

impl ApiError {
    /// Creates an error with an explicit status.
    pub fn new(status_code: StatusCode, error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            status_code,
            error: error.into(),
            details: details.into(),
        }
    }

    /// Creates a 500 error.
    pub fn internal(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, error, details)
    }

    /// Creates a 400 error.
    pub fn bad_request(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, error, details)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.error, self.details)
    }
}

impl std::error::Error for ApiError {}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match err {
            Error::Config { message } => Self::internal("Server misconfigured", message),
            Error::Validation(_) => Self::bad_request(
                "Missing required parameters",
                "Both query and username are required",
            ),
            Error::Upstream(UpstreamError::Status { status, body }) => {
                let status_code =
                    StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
                Self::new(
                    status_code,
                    format!("OpenRouter API error: {status} - {body}"),
                    format!("Request failed with status code {status}"),
                )
            }
            Error::Upstream(UpstreamError::Network(reason)) => Self::internal(
                "No response received from OpenRouter - check your network connection",
                reason,
            ),
            Error::Upstream(UpstreamError::Decode(reason)) => {
                Self::internal("Failed to fetch data from OpenRouter", reason)
            }
            Error::Io(err) => Self::internal("Internal server error", err.to_string()),
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::bad_request("Invalid query parameters", rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status_code.is_server_error() {
            error!(status = self.status_code.as_u16(), details = %self.details, "{}", self.error);
        }
        let body = json!({
            "error": self.error,
            "details": self.details,
        });
        (self.status_code, Json(body)).into_response()
    }
}

/// Result type alias for handlers.
pub type ApiResult<T> = std::result::Result<T, ApiError>;
