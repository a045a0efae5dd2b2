//! Review scheduling library for the Daily Train.
//!
//! Provides:
//! - Daily set selection over a user's readable quizzes
//! - Answer recording with level and hide-until updates
//! - Answer matching for text-style quizzes (Levenshtein similarity)
//! - Ephemeral training session state (visible set, failure counters)
//! - Shared types (Quiz, QuizKind, QuizProgressRecord, etc.)

pub mod config;
pub mod error;
pub mod matching;
pub mod policy;
pub mod scheduler;
pub mod session;
pub mod types;

pub use config::SchedulerConfig;
pub use error::{Result, SchedulerError};
pub use matching::{check_response, levenshtein_distance, normalized_similarity, MatchResult};
pub use policy::{HidePolicy, LinearDays};
pub use scheduler::{AnswerOutcome, Scheduler};
pub use session::{SessionStatus, TrainingSession, TrainingSettings};
pub use types::{FailureCounter, ProgressState, Quiz, QuizId, QuizKind, QuizProgressRecord};
