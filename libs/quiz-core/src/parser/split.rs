//! Partitions normalized quiz text into candidate question blocks.

use once_cell::sync::Lazy;
use regex::Regex;

/// Two or more blank lines between questions. A single blank line stays
/// inside a block.
static BLOCK_SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s*\n\s*\n+").unwrap());

/// The lines of one candidate question, borrowed from the normalized text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBlock<'a> {
    lines: Vec<&'a str>,
}

impl<'a> QuestionBlock<'a> {
    pub fn lines(&self) -> &[&'a str] {
        &self.lines
    }
}

/// Split normalized text into blocks. Lines are not filtered here.
pub fn split(normalized: &str) -> Vec<QuestionBlock<'_>> {
    if normalized.is_empty() {
        return Vec::new();
    }

    BLOCK_SEPARATOR
        .split(normalized)
        .map(|segment| QuestionBlock {
            lines: segment.split('\n').collect(),
        })
        .collect()
}
