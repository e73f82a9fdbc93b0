//! Core types for the quiz application.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A multiple-choice question ready for rendering and grading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedQuestion {
    #[serde(default)]
    pub id: String,
    pub question: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Full choice lines including their label, e.g. `"a) 15"`.
    #[serde(default)]
    pub options: Vec<String>,
    /// Full correct-answer line; empty when none was declared.
    #[serde(default)]
    pub correct_answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl ParsedQuestion {
    /// Whether the question declares a correct answer at all.
    pub fn has_correct_answer(&self) -> bool {
        !self.correct_answer.trim().is_empty()
    }

    /// Option label of the declared correct answer.
    pub fn correct_label(&self) -> Option<char> {
        option_label(&self.correct_answer)
    }
}

/// Label (`a` through `d`) of an option-style line such as `"b) 5"`.
pub fn option_label(line: &str) -> Option<char> {
    let mut chars = line.trim_start().chars();
    match (chars.next(), chars.next()) {
        (Some(label @ 'a'..='d'), Some(')')) => Some(label),
        _ => None,
    }
}

/// Difficulty levels offered when requesting a quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::Beginner
    }
}

impl Difficulty {
    /// Get the difficulty name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown difficulty: {0}")]
pub struct UnknownDifficulty(pub String);

impl FromStr for Difficulty {
    type Err = UnknownDifficulty;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            _ => Err(UnknownDifficulty(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn question(correct_answer: &str) -> ParsedQuestion {
        ParsedQuestion {
            id: "q1".to_string(),
            question: "What is 2 + 2?".to_string(),
            code: None,
            options: vec!["a) 4".to_string(), "b) 5".to_string()],
            correct_answer: correct_answer.to_string(),
            explanation: None,
        }
    }

    #[test]
    fn serializes_camel_case_without_absent_fields() {
        let json = serde_json::to_value(question("a) 4")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "q1",
                "question": "What is 2 + 2?",
                "options": ["a) 4", "b) 5"],
                "correctAnswer": "a) 4"
            })
        );
    }

    #[test]
    fn deserializes_with_missing_optional_fields() {
        let q: ParsedQuestion = serde_json::from_str(r#"{"question": "Why?"}"#).unwrap();
        assert_eq!(q.id, "");
        assert!(q.options.is_empty());
        assert!(!q.has_correct_answer());
        assert_eq!(q.code, None);
    }

    #[test]
    fn correct_label_from_answer_line() {
        assert_eq!(question("c) Error").correct_label(), Some('c'));
        assert_eq!(question("").correct_label(), None);
    }

    #[test]
    fn option_label_only_for_a_to_d() {
        assert_eq!(option_label("a) 15"), Some('a'));
        assert_eq!(option_label("d) None"), Some('d'));
        assert_eq!(option_label("e) nope"), None);
        assert_eq!(option_label("A) upper"), None);
        assert_eq!(option_label("a. dotted"), None);
    }

    #[test]
    fn difficulty_from_str_is_case_insensitive() {
        assert_eq!("Advanced".parse::<Difficulty>(), Ok(Difficulty::Advanced));
        assert_eq!(" beginner ".parse::<Difficulty>(), Ok(Difficulty::Beginner));
        assert!("expert".parse::<Difficulty>().is_err());
    }

    #[test]
    fn difficulty_serializes_lowercase() {
        let json = serde_json::to_string(&Difficulty::Intermediate).unwrap();
        assert_eq!(json, "\"intermediate\"");
    }
}
