//! Grading endpoint

use axum::Json;

use crate::models::*;

/// POST /api/quiz/grade
pub async fn grade(Json(payload): Json<GradeRequest>) -> Json<GradeResponse> {
    let report = quiz_core::grade(&payload.questions, &payload.answers);
    Json(report.into())
}
