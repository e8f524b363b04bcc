//! Student Domain Errors
//!
//! Every failure the service or the HTTP layer can report. The `Display`
//! text of each variant is exactly the body sent back to the client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Result type alias using [`StudentError`].
pub type Result<T> = std::result::Result<T, StudentError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StudentError {
    /// No record is stored under the requested roll number.
    #[error("Student not found with ID: {0}")]
    NotFound(i32),

    /// An update carried a percentage outside `[0, 100]`.
    #[error("Percentage must be between 0 and 100.")]
    InvalidRange,

    /// Anything else: unreadable bodies, malformed path ids.
    #[error("Something went wrong: {0}")]
    Request(String),
}

impl StudentError {
    pub fn status(&self) -> StatusCode {
        match self {
            StudentError::NotFound(_) => StatusCode::NOT_FOUND,
            StudentError::InvalidRange => StatusCode::BAD_REQUEST,
            StudentError::Request(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for StudentError {
    fn into_response(self) -> Response {
        match &self {
            StudentError::Request(message) => tracing::error!("Request failed: {}", message),
            other => tracing::warn!("{}", other),
        }
        (self.status(), self.to_string()).into_response()
    }
}
