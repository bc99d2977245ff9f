//! Error types for relay operations.
//!
//! Every failure a query can hit is one of the tagged variants below. The
//! segmentation and pagination engine itself is total and never produces an
//! error; these variants come from configuration, request validation and the
//! upstream completion call, and are mapped to HTTP status codes only at the
//! server boundary.

use thiserror::Error;

/// Result type alias for relay operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error for relay operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Missing or invalid configuration (for example no upstream credential).
    #[error("configuration error: {message}")]
    Config {
        /// Description of the configuration problem.
        message: String,
    },

    /// Request is missing required fields.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Upstream completion API failure.
    #[error("upstream error: {0}")]
    Upstream(#[from] UpstreamError),

    /// I/O errors (binding the listener, serving).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Shorthand for a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

/// Request validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required query parameter was absent or blank.
    #[error("missing required parameter: {name}")]
    MissingParameter {
        /// Name of the parameter.
        name: &'static str,
    },
}

/// Failures talking to the upstream completion API.
#[derive(Error, Debug)]
pub enum UpstreamError {
    /// The API answered with a non-success status.
    #[error("OpenRouter API error: {status} - {body}")]
    Status {
        /// HTTP status code returned by the API.
        status: u16,
        /// Response body, echoed for diagnosis.
        body: String,
    },

    /// No response was received (connect failure, reset, or timeout).
    #[error("no response received: {0}")]
    Network(String),

    /// A success response whose body could not be decoded.
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl UpstreamError {
    /// Status code reported by the upstream, if one was received.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Network(_) | Self::Decode(_) => None,
        }
    }
}

impl From<reqwest::Error> for UpstreamError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            Self::Status {
                status: status.as_u16(),
                body: err.to_string(),
            }
        } else {
            Self::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for UpstreamError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}
