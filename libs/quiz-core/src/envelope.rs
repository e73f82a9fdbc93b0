//! Upstream response envelope: `{ "questions": string | ParsedQuestion[] }`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ParseError, Result};
use crate::parser::normalize::{is_fence_only, strip_json_label, FENCE};
use crate::parser::parse_or_empty;
use crate::types::ParsedQuestion;

/// The two shapes the generator uses for the `questions` field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QuestionsField {
    Records(Vec<ParsedQuestion>),
    Text(String),
}

impl QuestionsField {
    /// Resolve into questions. Records are used as they are; text goes
    /// through the parser.
    pub fn into_questions(self) -> Vec<ParsedQuestion> {
        match self {
            Self::Records(records) => fill_missing_ids(records),
            Self::Text(text) => parse_or_empty(Some(&text)),
        }
    }
}

/// Strip the fenced `json` wrapper around a whole response body.
///
/// Fences inside JSON strings are left alone: their line breaks are still
/// escaped here, and the parser removes them once the string is decoded.
pub fn clean_response_text(body: &str) -> String {
    let unwrapped: String = body
        .split_inclusive('\n')
        .filter(|line| !is_fence_only(line))
        .collect();

    let trimmed = unwrapped.trim();
    let trimmed = trimmed.strip_prefix(FENCE).unwrap_or(trimmed);
    let trimmed = trimmed.strip_suffix(FENCE).unwrap_or(trimmed);

    strip_json_label(trimmed).trim().to_string()
}

/// Extract questions from an upstream response body.
pub fn extract_questions(body: &str) -> Result<Vec<ParsedQuestion>> {
    let cleaned = clean_response_text(body);
    let mut envelope: Value = serde_json::from_str(&cleaned)?;

    let field = envelope
        .get_mut("questions")
        .map(Value::take)
        .ok_or(ParseError::MissingQuestions)?;
    let field: QuestionsField =
        serde_json::from_value(field).map_err(|_| ParseError::MissingQuestions)?;

    Ok(field.into_questions())
}

fn fill_missing_ids(mut records: Vec<ParsedQuestion>) -> Vec<ParsedQuestion> {
    for (index, record) in records.iter_mut().enumerate() {
        if record.id.trim().is_empty() {
            record.id = format!("q{}", index + 1);
        }
    }
    records
}
