//! Stored entities and API types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Re-export shared types from review-core
pub use review_core::types::{
    FailureCounter, Quiz, QuizId, QuizKind, QuizProgressRecord,
};

use crate::error::{ApiError, Result};

// === Stored Entity Types ===

/// Quiz in the catalog together with who may read it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredQuiz {
    pub quiz: Quiz,
    pub owner_id: Uuid,
    pub public: bool,
    pub readers: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl StoredQuiz {
    /// Whether `user_id` may read this quiz
    pub fn is_readable_by(&self, user_id: Uuid) -> bool {
        self.public || self.owner_id == user_id || self.readers.contains(&user_id)
    }
}

// === API Types ===

// Quiz types
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateQuizRequest {
    #[serde(rename = "type", default)]
    pub kind: QuizKind,
    pub prompt: String,
    #[serde(default)]
    pub choices: Vec<String>,
    pub correct_responses: Vec<String>,
    #[serde(default)]
    pub hints: Vec<String>,
    pub owner_id: Uuid,
    #[serde(default)]
    pub public: bool,
    #[serde(default)]
    pub readers: Vec<Uuid>,
}

impl CreateQuizRequest {
    /// Validate and turn into a catalog entry with a fresh ID
    pub fn into_stored(self) -> Result<StoredQuiz> {
        if self.prompt.trim().is_empty() {
            return Err(ApiError::BadRequest("Prompt cannot be empty".to_string()));
        }
        if self.correct_responses.iter().all(|r| r.trim().is_empty()) {
            return Err(ApiError::BadRequest("Need at least one answer".to_string()));
        }
        if self.kind.is_enumerated() {
            if self.choices.is_empty() {
                return Err(ApiError::BadRequest("Need at least one choice".to_string()));
            }
            if let Some(missing) = self
                .correct_responses
                .iter()
                .find(|r| !self.choices.contains(r))
            {
                return Err(ApiError::BadRequest(format!(
                    "Answer {missing:?} is not one of the choices"
                )));
            }
        }

        Ok(StoredQuiz {
            quiz: Quiz {
                id: Uuid::new_v4(),
                kind: self.kind,
                prompt: self.prompt,
                choices: self.choices,
                correct_responses: self.correct_responses,
                hints: self.hints,
            },
            owner_id: self.owner_id,
            public: self.public,
            readers: self.readers,
            created_at: Utc::now(),
        })
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateQuizResponse {
    pub id: QuizId,
}

// Daily train types

/// Quiz as presented for training (accepted answers withheld)
#[derive(Debug, Serialize, Deserialize)]
pub struct DailyQuiz {
    pub id: QuizId,
    #[serde(rename = "type")]
    pub kind: QuizKind,
    pub prompt: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<QuizProgressRecord>,
}

impl DailyQuiz {
    pub fn from_quiz(quiz: Quiz, progress: Option<QuizProgressRecord>) -> Self {
        Self {
            id: quiz.id,
            kind: quiz.kind,
            prompt: quiz.prompt,
            choices: quiz.choices,
            progress,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DailySetResponse {
    pub quizzes: Vec<DailyQuiz>,
    pub total: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SubmitAnswerRequest {
    pub quiz_id: QuizId,
    pub response: String,
    /// Consecutive failures so far in the caller's session
    #[serde(default)]
    pub failures: FailureCounter,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SubmitAnswerResponse {
    pub is_correct: bool,
    pub similarity: f64,
    pub previous_level: u32,
    pub record: QuizProgressRecord,
    pub failures: FailureCounter,
    pub reveal_hints: bool,
    /// Hints followed by accepted answers, only once hints are revealed
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hints: Vec<String>,
}

// Progress types
#[derive(Debug, Serialize, Deserialize)]
pub struct ProgressResponse {
    pub records: Vec<QuizProgressRecord>,
}
