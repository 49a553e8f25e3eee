use reqwest::StatusCode;
use std::error::Error;
use std::fmt;

/// Main error type for the library
///
/// Every failure surfaces to the caller through this enum; nothing is caught
/// or retried internally. Transport and decode errors wrap the underlying
/// library error unchanged.
#[derive(Debug)]
pub enum AppError {
    /// Transport-level failure (connection refused, DNS, timeout) or a
    /// response body that reqwest could not decode as JSON
    Request(reqwest::Error),
    /// JSON serialization or deserialization failure
    Json(serde_json::Error),
    /// Non-2xx HTTP status, only produced when status checking is enabled
    Unexpected(StatusCode),
    /// A field requested from an [`ApiResponse`](crate::model::response::ApiResponse)
    /// is not present in the payload
    MissingField(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Request(e) => write!(f, "request error: {e}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Unexpected(status) => write!(f, "unexpected status code: {status}"),
            AppError::MissingField(field) => write!(f, "missing field: {field}"),
        }
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            AppError::Request(e) => Some(e),
            AppError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(error: reqwest::Error) -> Self {
        AppError::Request(error)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        AppError::Json(error)
    }
}
