//! Packages interpreted blocks into question records.

use super::interpret::interpret;
use super::split::QuestionBlock;
use crate::types::ParsedQuestion;

/// Interpret every block and keep those that produced a prompt.
///
/// Ids come from the block position before filtering, so they increase but
/// may skip numbers.
pub fn assemble(blocks: &[QuestionBlock<'_>]) -> Vec<ParsedQuestion> {
    blocks
        .iter()
        .enumerate()
        .filter_map(|(index, block)| {
            let fields = interpret(block.lines());

            if fields.question.is_empty() {
                tracing::debug!(block = index + 1, "dropping block without a question prompt");
                return None;
            }

            Some(ParsedQuestion {
                id: format!("q{}", index + 1),
                question: fields.question,
                code: fields.code,
                options: fields.options,
                correct_answer: fields.correct_answer,
                explanation: None,
            })
        })
        .collect()
}
