//! Error types for quiz-core.

use thiserror::Error;

/// Result type alias using ParseError.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Errors that can occur while turning upstream text into questions.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("empty input")]
    EmptyInput,

    #[error("invalid response envelope: {0}")]
    InvalidEnvelope(#[from] serde_json::Error),

    #[error("'questions' field is missing or not a string/array")]
    MissingQuestions,
}
