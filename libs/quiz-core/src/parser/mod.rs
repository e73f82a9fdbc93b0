//! Parser for model-generated quiz text.
//!
//! # Format
//! ```text
//! **1. What will be the output of the following code snippet?**
//!
//! python
//! def my_func(x, y=10):
//!     return x + y
//!
//! a) 15
//! b) 5
//!
//! **Correct Answer: a) 15**
//!
//!
//! **2. Next question?**
//! ```
//!
//! Questions are separated by two or more blank lines. Text is normalized,
//! split into blocks, each block interpreted line by line, and blocks
//! without a prompt are dropped.

pub mod assemble;
pub mod interpret;
pub mod normalize;
pub mod split;

pub use assemble::assemble;
pub use interpret::{interpret, BlockFields};
pub use normalize::normalize;
pub use split::{split, QuestionBlock};

use crate::error::{ParseError, Result};
use crate::types::ParsedQuestion;

/// Parse raw quiz text into questions.
///
/// Empty or whitespace-only text is an error; text without any usable
/// question yields an empty list.
pub fn parse(raw: &str) -> Result<Vec<ParsedQuestion>> {
    if raw.trim().is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let normalized = normalize(raw);
    let blocks = split(&normalized);
    let questions = assemble(&blocks);

    tracing::debug!(
        blocks = blocks.len(),
        questions = questions.len(),
        "parsed quiz text"
    );

    Ok(questions)
}

/// Parse quiz text at a boundary that only wants a list.
///
/// Missing text and parse failures are logged and become an empty list.
pub fn parse_or_empty(raw: Option<&str>) -> Vec<ParsedQuestion> {
    let Some(raw) = raw else {
        tracing::warn!("no quiz text to parse");
        return Vec::new();
    };

    match parse(raw) {
        Ok(questions) => questions,
        Err(error) => {
            tracing::warn!(%error, "could not parse quiz text");
            Vec::new()
        }
    }
}
