//! Quiz catalog endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::error::Result;
use crate::models::*;
use crate::AppState;

/// POST /api/quizzes
pub async fn create(
    State(state): State<AppState>,
    Json(request): Json<CreateQuizRequest>,
) -> Result<(StatusCode, Json<CreateQuizResponse>)> {
    let stored = request.into_stored()?;
    let kind = stored.quiz.kind;
    let id = state.db.insert_quiz(stored).await?;

    tracing::info!(quiz_id = %id, kind = kind.as_str(), "quiz created");

    Ok((StatusCode::CREATED, Json(CreateQuizResponse { id })))
}

/// DELETE /api/quizzes/{quiz_id}
pub async fn delete(
    State(state): State<AppState>,
    Path(quiz_id): Path<QuizId>,
) -> Result<Json<serde_json::Value>> {
    let deleted = state.db.delete_quiz(quiz_id).await;

    Ok(Json(serde_json::json!({ "deleted": deleted })))
}
