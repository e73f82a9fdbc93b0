//! API request and response types

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

// Re-export shared types from quiz-core
pub use quiz_core::{Difficulty, ParsedQuestion, PerformanceBand, QuestionResult, QuizReport};

/// Body of POST /api/quiz/parse
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseRequest {
    /// Raw quiz text. Anything other than a string parses to no questions.
    #[serde(default)]
    pub text: Option<Value>,
}

impl ParseRequest {
    pub fn text(&self) -> Option<&str> {
        self.text.as_ref().and_then(Value::as_str)
    }
}

/// Body of POST /api/quiz/generate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateQuizRequest {
    pub topic: String,
    #[serde(default)]
    pub difficulty: Difficulty,
}

/// Questions returned by the parse and generate endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionsResponse {
    pub questions: Vec<ParsedQuestion>,
}

/// Body of POST /api/quiz/grade
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradeRequest {
    pub questions: Vec<ParsedQuestion>,
    /// Submitted answers keyed by question id.
    #[serde(default)]
    pub answers: HashMap<String, String>,
}

/// Graded quiz with display texts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradeResponse {
    #[serde(flatten)]
    pub report: QuizReport,
    pub feedback: String,
    pub message: String,
    /// Per-question digest for study help.
    pub summary: String,
}

impl From<QuizReport> for GradeResponse {
    fn from(report: QuizReport) -> Self {
        Self {
            feedback: report.feedback(),
            message: report.band.message().to_string(),
            summary: report.summary_text(),
            report,
        }
    }
}
