use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::api::response::json_no_store;

/// JSON body returned for every failed request: `{ "error": "<message>" }`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// API error type covering all client-input failures.
///
/// The display string of each variant is the exact message clients receive,
/// so the HTTP contract lives in one place.
#[derive(Debug, Error)]
pub enum AppError {
    /// The `slug` query parameter was absent or empty on a views read.
    #[error("Missing required \"slug\" query parameter")]
    MissingSlugParam,

    /// The request body could not be parsed as JSON.
    #[error("Invalid JSON in request body")]
    InvalidJsonBody,

    /// The request body parsed, but `slug` was missing, not a string, or
    /// empty after trimming.
    #[error("Request body must include a non-empty \"slug\" field")]
    MissingSlugField,

    /// A backing store failure. The in-memory store never produces this; it
    /// exists for fallible [`CounterRepository`] implementations.
    ///
    /// [`CounterRepository`]: crate::domain::repositories::CounterRepository
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingSlugParam | Self::InvalidJsonBody | Self::MissingSlugField => {
                StatusCode::BAD_REQUEST
            }
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
        };

        json_no_store(self.status_code(), &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_match_contract() {
        assert_eq!(
            AppError::MissingSlugParam.to_string(),
            "Missing required \"slug\" query parameter"
        );
        assert_eq!(
            AppError::InvalidJsonBody.to_string(),
            "Invalid JSON in request body"
        );
        assert_eq!(
            AppError::MissingSlugField.to_string(),
            "Request body must include a non-empty \"slug\" field"
        );
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::MissingSlugParam.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::InvalidJsonBody.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::MissingSlugField.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::internal("boom").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
