//! Error handling for the backend API

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use quiz_core::ParseError;
use serde::Serialize;
use thiserror::Error;

use crate::services::generator::GeneratorError;

/// Message shown to users whenever a quiz cannot be produced.
pub const QUESTIONS_UNAVAILABLE: &str = "could not load questions";

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Generator error: {0}")]
    Generator(#[from] GeneratorError),

    #[error("Unusable generator response: {0}")]
    Envelope(#[from] ParseError),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type) = match &self {
            ApiError::Generator(_) | ApiError::Envelope(_) => {
                (StatusCode::BAD_GATEWAY, "questions_unavailable")
            }
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
        };

        // Upstream details stay in the logs; callers get a fixed message.
        let message = match &self {
            ApiError::Generator(_) | ApiError::Envelope(_) => {
                tracing::error!(error = %self, "Failed to load questions");
                QUESTIONS_UNAVAILABLE.to_string()
            }
            ApiError::BadRequest(_) => self.to_string(),
        };

        let body = Json(ErrorResponse {
            error: error_type.to_string(),
            message,
        });

        (status, body).into_response()
    }
}

/// Result type alias for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
