//! Error types for review-core.

use thiserror::Error;

use crate::types::QuizId;

/// Result type alias using SchedulerError.
pub type Result<T> = std::result::Result<T, SchedulerError>;

/// Errors that can occur while scheduling or recording answers.
#[derive(Debug, Error, PartialEq)]
pub enum SchedulerError {
    #[error("quiz {0} not found")]
    NotFound(QuizId),

    #[error("response is empty")]
    InvalidResponse,

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
