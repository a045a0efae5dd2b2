//! In-memory quiz catalog and progress storage
//!
//! Stands in for the document store. Progress updates run under the
//! progress write lock so concurrent answers for the same user and quiz
//! are serialized.

use std::collections::HashMap;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{ApiError, Result};
use crate::models::*;

/// Catalog and per-user progress records
#[derive(Debug, Default)]
pub struct Database {
    quizzes: RwLock<HashMap<QuizId, StoredQuiz>>,
    progress: RwLock<HashMap<Uuid, HashMap<QuizId, QuizProgressRecord>>>,
}

impl Database {
    pub fn new() -> Self {
        Self::default()
    }

    // === Quiz Repository ===

    /// Add a quiz to the catalog
    pub async fn insert_quiz(&self, stored: StoredQuiz) -> Result<QuizId> {
        let mut quizzes = self.quizzes.write().await;
        let id = stored.quiz.id;
        if quizzes.contains_key(&id) {
            return Err(ApiError::Conflict(format!("Quiz {id} already exists")));
        }
        quizzes.insert(id, stored);
        Ok(id)
    }

    /// Quizzes the user may read, oldest first
    pub async fn readable_quizzes(&self, user_id: Uuid) -> Vec<Quiz> {
        let quizzes = self.quizzes.read().await;
        let mut readable: Vec<&StoredQuiz> = quizzes
            .values()
            .filter(|stored| stored.is_readable_by(user_id))
            .collect();
        readable.sort_by_key(|stored| stored.created_at);
        readable.into_iter().map(|stored| stored.quiz.clone()).collect()
    }

    /// Remove a quiz and every progress record that points at it
    pub async fn delete_quiz(&self, quiz_id: QuizId) -> bool {
        // lock order: progress, then quizzes
        let mut progress = self.progress.write().await;
        let removed = self.quizzes.write().await.remove(&quiz_id).is_some();
        if removed {
            for records in progress.values_mut() {
                records.remove(&quiz_id);
            }
        }
        removed
    }

    // === Progress Repository ===

    /// All progress records for a user
    pub async fn get_progress(&self, user_id: Uuid) -> Vec<QuizProgressRecord> {
        self.progress
            .read()
            .await
            .get(&user_id)
            .map(|records| records.values().cloned().collect())
            .unwrap_or_default()
    }

    /// Read-modify-write one progress record atomically.
    ///
    /// `update` sees the current record (if any) and returns the record to
    /// store plus a value passed back to the caller. On error nothing is
    /// written. Fails with `NotFound` if the quiz left the catalog.
    pub async fn update_progress<T, F>(&self, user_id: Uuid, quiz_id: QuizId, update: F) -> Result<T>
    where
        F: FnOnce(Option<&QuizProgressRecord>) -> Result<(QuizProgressRecord, T)>,
    {
        let mut progress = self.progress.write().await;
        let existing = progress.get(&user_id).and_then(|records| records.get(&quiz_id));
        let (record, value) = update(existing)?;
        if !self.quizzes.read().await.contains_key(&quiz_id) {
            return Err(ApiError::NotFound(format!("Quiz {quiz_id}")));
        }
        progress
            .entry(user_id)
            .or_default()
            .insert(quiz_id, record);
        Ok(value)
    }

    /// Remove every progress record for a user
    pub async fn delete_user_progress(&self, user_id: Uuid) -> usize {
        self.progress
            .write()
            .await
            .remove(&user_id)
            .map_or(0, |records| records.len())
    }
}
