//! Common test utilities and fixtures for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - TestContext wrapping an in-memory app state and test server
//! - Helpers for seeding quizzes and progress

pub mod fixtures;

use axum_test::TestServer;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use daily_train_backend::config::AppConfig;
use daily_train_backend::models::{CreateQuizResponse, QuizId, QuizProgressRecord};
use daily_train_backend::{router, AppState};

/// Test context holding the shared state and a server over it.
pub struct TestContext {
    pub state: AppState,
    pub server: TestServer,
}

impl TestContext {
    /// Create a new test context with default configuration.
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    /// Create a new test context with the given configuration.
    pub fn with_config(config: AppConfig) -> Self {
        let state = AppState::new(&config).expect("valid test config");
        let server = TestServer::new(router(state.clone())).expect("Failed to start test server");
        Self { state, server }
    }

    /// Create a quiz through the API and return its ID.
    pub async fn create_quiz(&self, body: &serde_json::Value) -> QuizId {
        let response = self.server.post("/api/quizzes").json(body).await;
        response.assert_status(axum::http::StatusCode::CREATED);
        response.json::<CreateQuizResponse>().id
    }

    /// Store a progress record directly, bypassing answer scoring.
    pub async fn seed_progress(
        &self,
        user_id: Uuid,
        quiz_id: QuizId,
        level: u32,
        hidden_until: DateTime<Utc>,
    ) {
        self.state
            .db
            .update_progress(user_id, quiz_id, |_| {
                Ok((
                    QuizProgressRecord {
                        quiz_id,
                        level,
                        hidden_until,
                    },
                    (),
                ))
            })
            .await
            .expect("Failed to seed progress");
    }

    pub fn daily_path(user_id: Uuid) -> String {
        format!("/api/users/{}/daily", user_id)
    }

    pub fn answer_path(user_id: Uuid) -> String {
        format!("/api/users/{}/daily/answer", user_id)
    }

    pub fn progress_path(user_id: Uuid) -> String {
        format!("/api/users/{}/progress", user_id)
    }
}
