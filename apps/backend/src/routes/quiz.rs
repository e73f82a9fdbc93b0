//! Quiz parsing and generation endpoints

use axum::{extract::State, Json};
use quiz_core::{extract_questions, parse_or_empty};

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;

/// POST /api/quiz/parse
/// Parses raw quiz text; unusable text yields an empty list
pub async fn parse(Json(payload): Json<ParseRequest>) -> Json<QuestionsResponse> {
    let questions = parse_or_empty(payload.text());
    Json(QuestionsResponse { questions })
}

/// POST /api/quiz/generate
/// Requests a quiz from the upstream generator and extracts its questions
pub async fn generate(
    State(state): State<AppState>,
    Json(payload): Json<GenerateQuizRequest>,
) -> Result<Json<QuestionsResponse>> {
    let topic = payload.topic.trim();
    if topic.is_empty() {
        return Err(ApiError::BadRequest("Topic must not be empty".to_string()));
    }

    tracing::info!("Generating {} quiz on {}", payload.difficulty, topic);

    let body = state.generator.generate(topic, payload.difficulty).await?;
    let questions = extract_questions(&body)?;

    tracing::info!("Generated {} questions", questions.len());

    Ok(Json(QuestionsResponse { questions }))
}
