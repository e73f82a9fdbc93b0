//! Extracts prompt, code sample, choices and correct answer from one block.
//!
//! Each trimmed line is offered to an ordered list of matchers and the first
//! hit decides what the line is. Which list applies depends on whether the
//! scan is inside a code span, and that mode is carried explicitly through a
//! fold over the block's lines.

use once_cell::sync::Lazy;
use regex::Regex;

use super::normalize::FENCE;

/// Marker word announcing a code sample in generated quizzes.
const CODE_LANGUAGE: &str = "python";

static PROMPT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*\d+\.\s*(.*?)\*\*").unwrap());

static CHOICE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-d]\)\s*\S").unwrap());

static CORRECT_ANSWER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*Correct Answer:\s*([a-d]\).*?)\s*(?:\*\*)?$").unwrap());

/// Fields recovered from a single block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockFields {
    /// Prompt text; empty when the block has no prompt line.
    pub question: String,
    pub code: Option<String>,
    pub options: Vec<String>,
    /// Correct-answer line without its emphasis; empty when absent.
    pub correct_answer: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Prose,
    Code,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Line<'a> {
    Prompt(&'a str),
    CodeStart,
    Fence,
    Choice(&'a str),
    CorrectAnswer(&'a str),
}

type Matcher = for<'a> fn(&'a str) -> Option<Line<'a>>;

const PROSE_MATCHERS: &[Matcher] = &[prompt, code_start, choice, correct_answer];

// Fences are normally gone after normalization, so a choice or the correct
// answer also ends a code span.
const CODE_MATCHERS: &[Matcher] = &[prompt, fence, choice, correct_answer];

fn prompt(line: &str) -> Option<Line<'_>> {
    PROMPT
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|text| Line::Prompt(text.as_str().trim()))
}

fn code_start(line: &str) -> Option<Line<'_>> {
    line.to_lowercase()
        .contains(CODE_LANGUAGE)
        .then_some(Line::CodeStart)
}

fn fence(line: &str) -> Option<Line<'_>> {
    (line == FENCE).then_some(Line::Fence)
}

fn choice(line: &str) -> Option<Line<'_>> {
    CHOICE.is_match(line).then_some(Line::Choice(line))
}

fn correct_answer(line: &str) -> Option<Line<'_>> {
    CORRECT_ANSWER
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|text| Line::CorrectAnswer(text.as_str().trim()))
}

struct Scan<'a> {
    mode: Mode,
    fields: BlockFields,
    code: Vec<&'a str>,
}

impl<'a> Scan<'a> {
    fn new() -> Self {
        Self {
            mode: Mode::Prose,
            fields: BlockFields::default(),
            code: Vec::new(),
        }
    }

    fn step(mut self, line: &'a str) -> Self {
        let matchers = match self.mode {
            Mode::Prose => PROSE_MATCHERS,
            Mode::Code => CODE_MATCHERS,
        };

        match matchers.iter().find_map(|matcher| matcher(line.trim())) {
            // Last prompt wins when a block carries several.
            Some(Line::Prompt(text)) => self.fields.question = text.to_string(),
            Some(Line::CodeStart) => self.mode = Mode::Code,
            Some(Line::Fence) => self.mode = Mode::Prose,
            Some(Line::Choice(text)) => {
                self.mode = Mode::Prose;
                self.fields.options.push(spaced_choice(text));
            }
            Some(Line::CorrectAnswer(text)) => {
                self.mode = Mode::Prose;
                self.fields.correct_answer = text.to_string();
            }
            None if self.mode == Mode::Code => self.code.push(line),
            None => {}
        }

        self
    }

    fn finish(self) -> BlockFields {
        BlockFields {
            code: join_code(&self.code),
            ..self.fields
        }
    }
}

/// Choice line with exactly one space after the label when none was given,
/// e.g. `a)15` becomes `a) 15`.
fn spaced_choice(line: &str) -> String {
    let (label, text) = line.split_at(2);
    if text.starts_with(' ') {
        line.to_string()
    } else {
        format!("{} {}", label, text.trim_start())
    }
}

/// Join code lines keeping indentation, dropping blank lines at either end.
fn join_code(lines: &[&str]) -> Option<String> {
    let lines: Vec<&str> = lines.iter().map(|line| line.trim_end()).collect();
    let start = lines.iter().position(|line| !line.is_empty())?;
    let end = lines.iter().rposition(|line| !line.is_empty())?;
    Some(lines[start..=end].join("\n"))
}

/// Interpret the lines of one block.
pub fn interpret(lines: &[&str]) -> BlockFields {
    lines
        .iter()
        .copied()
        .fold(Scan::new(), |scan, line| scan.step(line))
        .finish()
}
