//! Grading of submitted answers against parsed questions.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::types::{option_label, ParsedQuestion};

/// Outcome for a single question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionResult {
    pub id: String,
    pub question: String,
    /// `None` when the question was skipped.
    pub user_answer: Option<String>,
    pub correct_answer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    pub is_correct: bool,
}

/// Overall performance band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PerformanceBand {
    Outstanding,
    Good,
    NeedsPractice,
}

impl PerformanceBand {
    /// Band for a percentage score (0 to 100).
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 80.0 {
            Self::Outstanding
        } else if percentage >= 60.0 {
            Self::Good
        } else {
            Self::NeedsPractice
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::Outstanding => "Outstanding Performance!",
            Self::Good => "Good Work! Keep Learning!",
            Self::NeedsPractice => "Keep Practicing! You'll Get Better!",
        }
    }
}

/// Graded quiz.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizReport {
    pub score: usize,
    pub total_questions: usize,
    pub percentage: f64,
    pub band: PerformanceBand,
    pub results: Vec<QuestionResult>,
}

impl QuizReport {
    pub fn feedback(&self) -> String {
        format!(
            "You correctly answered {} out of {} questions.",
            self.score, self.total_questions
        )
    }

    /// Plain-text digest of every question, suitable for a study-help prompt.
    pub fn summary_text(&self) -> String {
        self.results
            .iter()
            .map(|result| {
                let mut entry = format!(
                    "Question: {}\nYour Answer: {}\nCorrect Answer: {}",
                    result.question,
                    result.user_answer.as_deref().unwrap_or("Skipped"),
                    result.correct_answer
                );
                if let Some(explanation) = &result.explanation {
                    entry.push_str("\nExplanation: ");
                    entry.push_str(explanation);
                }
                entry
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

/// Grade answers keyed by question id.
pub fn grade(questions: &[ParsedQuestion], answers: &HashMap<String, String>) -> QuizReport {
    let results: Vec<QuestionResult> = questions
        .iter()
        .map(|question| {
            let user_answer = answers
                .get(&question.id)
                .filter(|answer| !answer.trim().is_empty())
                .cloned();
            let is_correct = user_answer
                .as_deref()
                .is_some_and(|answer| is_correct_answer(question, answer));

            QuestionResult {
                id: question.id.clone(),
                question: question.question.clone(),
                user_answer,
                correct_answer: question.correct_answer.clone(),
                explanation: question.explanation.clone(),
                is_correct,
            }
        })
        .collect();

    let score = results.iter().filter(|r| r.is_correct).count();
    let total_questions = results.len();
    let percentage = if total_questions == 0 {
        0.0
    } else {
        score as f64 / total_questions as f64 * 100.0
    };

    QuizReport {
        score,
        total_questions,
        percentage,
        band: PerformanceBand::from_percentage(percentage),
        results,
    }
}

/// An empty correct answer means none was declared and nothing matches it.
fn is_correct_answer(question: &ParsedQuestion, answer: &str) -> bool {
    if !question.has_correct_answer() {
        return false;
    }

    if normalize_whitespace(answer) == normalize_whitespace(&question.correct_answer) {
        return true;
    }

    match (option_label(answer), question.correct_label()) {
        (Some(given), Some(expected)) => given == expected,
        _ => false,
    }
}

/// Normalize whitespace in a string (trim and collapse multiple spaces).
fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
