//! Strips markdown wrappers that carry no meaning in generated quiz text.

use once_cell::sync::Lazy;
use regex::Regex;

pub(crate) const FENCE: &str = "```";

static JSON_LABEL: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^\s*json\b\s*").unwrap());

/// Remove fence markers and a leading `json` label, then trim.
///
/// A line made up only of fence markers is dropped together with its line
/// break, so fences never leave blank lines behind that could be mistaken
/// for a question boundary.
pub fn normalize(raw: &str) -> String {
    let mut unfenced = String::with_capacity(raw.len());

    for line in raw.split_inclusive('\n') {
        if !line.contains(FENCE) {
            unfenced.push_str(line);
        } else if !is_fence_only(line) {
            unfenced.push_str(&line.replace(FENCE, ""));
        }
    }

    strip_json_label(&unfenced).trim().to_string()
}

/// Whether a line holds fence markers and nothing else.
pub(crate) fn is_fence_only(line: &str) -> bool {
    line.contains(FENCE) && line.replace(FENCE, "").trim().is_empty()
}

/// Text after a leading `json` label and its surrounding whitespace.
pub(crate) fn strip_json_label(text: &str) -> &str {
    match JSON_LABEL.find(text) {
        Some(label) => &text[label.end()..],
        None => text,
    }
}
