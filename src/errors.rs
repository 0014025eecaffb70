use reqwest::StatusCode;
use thiserror::Error;

/// Message used when a failed response carries no readable `detail` or `message`.
pub const GENERIC_FAILURE_MESSAGE: &str = "API request failed";

/// Dribbling API Errors.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The API answered with a non-success status code.
    /// `message` is the backend's `detail` or `message` field, or a generic fallback.
    #[error("{message}")]
    Request { status: StatusCode, message: String },

    /// The response body could not be decoded as JSON, or the request could not be built or sent
    /// (invalid header, malformed URL, unreachable host).
    #[error("{0}")]
    Parse(String),
}

impl ApiError {
    /// HTTP status of the failed response. `None` for parse and transport failures.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Request { status, .. } => Some(*status),
            ApiError::Parse(_) => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Parse(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Parse(format!("Failed to decode API response: {}", err))
    }
}
