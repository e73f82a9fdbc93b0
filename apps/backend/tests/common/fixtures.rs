//! Test fixtures and factory functions for request bodies.

use serde_json::json;

/// Quiz text as the generator emits it: fenced, with a code sample.
pub const CODE_QUIZ: &str = "```json
**1. What will be the output of the following code snippet?**

python
```
def my_func(x, y=10):
    return x + y

print(my_func(5))
```

a) 15
b) 5
c) Error
d) None

**Correct Answer: a) 15**
```";

/// Generate quiz text with a specified number of plain questions.
///
/// # Arguments
/// * `num_questions` - Number of questions to generate
/// * `with_answers` - Whether to include correct-answer lines
pub fn sample_quiz_text(num_questions: usize, with_answers: bool) -> String {
    (0..num_questions)
        .map(|i| {
            let mut block = format!(
                "**{}. Question {}?**\n\na) first\nb) second\nc) third\nd) fourth",
                i + 1,
                i + 1
            );
            if with_answers {
                block.push_str("\n\n**Correct Answer: b) second**");
            }
            block
        })
        .collect::<Vec<_>>()
        .join("\n\n\n")
}

/// Create a parse request body.
pub fn parse_request(text: &str) -> serde_json::Value {
    json!({ "text": text })
}

/// Create a generate request body.
pub fn generate_request(topic: &str, difficulty: &str) -> serde_json::Value {
    json!({ "topic": topic, "difficulty": difficulty })
}

/// Wrap quiz text in the generator's response envelope.
pub fn text_envelope(text: &str) -> String {
    json!({ "questions": text }).to_string()
}

/// Create a grade request body.
pub fn grade_request(
    questions: serde_json::Value,
    answers: serde_json::Value,
) -> serde_json::Value {
    json!({ "questions": questions, "answers": answers })
}
