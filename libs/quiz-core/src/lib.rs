//! Core quiz library shared by the backend and any client.
//!
//! Provides:
//! - Parser turning model-generated quiz text into question records
//! - Upstream response envelope handling (`{ "questions": string | array }`)
//! - Grading of submitted answers
//! - Shared types (ParsedQuestion, Difficulty, etc.)

pub mod envelope;
pub mod error;
pub mod grading;
pub mod parser;
pub mod types;

pub use envelope::{clean_response_text, extract_questions, QuestionsField};
pub use error::{ParseError, Result};
pub use grading::{grade, PerformanceBand, QuestionResult, QuizReport};
pub use parser::{parse, parse_or_empty};
pub use types::{option_label, Difficulty, ParsedQuestion};
