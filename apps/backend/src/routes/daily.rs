//! Daily train endpoints

use std::collections::HashMap;

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use uuid::Uuid;

use crate::error::Result;
use crate::models::*;
use crate::AppState;

/// GET /api/users/{user_id}/daily
pub async fn today(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<DailySetResponse>> {
    let readable = state.db.readable_quizzes(user_id).await;
    let progress = state.db.get_progress(user_id).await;

    let selected = {
        let mut rng = rand::rng();
        state
            .scheduler
            .select_daily_set(&readable, &progress, Utc::now(), &mut rng)
    };

    let mut by_quiz: HashMap<QuizId, QuizProgressRecord> =
        progress.into_iter().map(|r| (r.quiz_id, r)).collect();

    let quizzes: Vec<DailyQuiz> = selected
        .into_iter()
        .map(|quiz| {
            let record = by_quiz.remove(&quiz.id);
            DailyQuiz::from_quiz(quiz, record)
        })
        .collect();

    tracing::debug!(%user_id, readable = readable.len(), due = quizzes.len(), "daily set built");

    Ok(Json(DailySetResponse {
        total: quizzes.len(),
        quizzes,
    }))
}

/// POST /api/users/{user_id}/daily/answer
pub async fn answer(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(payload): Json<SubmitAnswerRequest>,
) -> Result<Json<SubmitAnswerResponse>> {
    let readable = state.db.readable_quizzes(user_id).await;
    let now = Utc::now();

    // Score and persist under the progress lock
    let outcome = state
        .db
        .update_progress(user_id, payload.quiz_id, |existing| {
            let outcome = state.scheduler.record_answer(
                &readable,
                payload.quiz_id,
                &payload.response,
                existing,
                payload.failures,
                now,
            )?;
            Ok((outcome.record.clone(), outcome))
        })
        .await?;

    tracing::info!(
        %user_id,
        quiz_id = %payload.quiz_id,
        correct = outcome.is_correct,
        level = outcome.record.level,
        "answer recorded"
    );

    let hints: Vec<String> = if outcome.reveal_hints {
        readable
            .iter()
            .find(|quiz| quiz.id == payload.quiz_id)
            .map(|quiz| {
                quiz.hints
                    .iter()
                    .chain(&quiz.correct_responses)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    } else {
        Vec::new()
    };

    Ok(Json(SubmitAnswerResponse {
        is_correct: outcome.is_correct,
        similarity: outcome.similarity,
        previous_level: outcome.previous_level,
        record: outcome.record,
        failures: outcome.failures,
        reveal_hints: outcome.reveal_hints,
        hints,
    }))
}

/// GET /api/users/{user_id}/progress
pub async fn progress(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<ProgressResponse>> {
    let mut records = state.db.get_progress(user_id).await;
    records.sort_by_key(|r| r.hidden_until);

    Ok(Json(ProgressResponse { records }))
}

/// DELETE /api/users/{user_id}/progress
pub async fn reset_progress(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<serde_json::Value>> {
    let deleted = state.db.delete_user_progress(user_id).await;

    tracing::info!(%user_id, deleted, "progress cleared");

    Ok(Json(serde_json::json!({ "deleted": deleted })))
}
