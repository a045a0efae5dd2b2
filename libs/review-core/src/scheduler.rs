//! Daily set selection and answer recording.
//!
//! Both operations are pure: they read the snapshots handed to them and
//! return new values. Persisting an updated record is the caller's job.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::SchedulerConfig;
use crate::error::{Result, SchedulerError};
use crate::matching::check_response;
use crate::policy::{HidePolicy, LinearDays};
use crate::types::{FailureCounter, ProgressState, Quiz, QuizId, QuizProgressRecord};

/// Result of recording one answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerOutcome {
    /// Updated record, to be handed to persistence.
    pub record: QuizProgressRecord,
    /// Level before this answer (0 for an unseen quiz).
    pub previous_level: u32,
    pub is_correct: bool,
    pub similarity: f64,
    /// Consecutive failures after this answer.
    pub failures: FailureCounter,
    /// Whether the presentation layer should show hints.
    pub reveal_hints: bool,
}

/// Review scheduler with a configurable hide policy.
#[derive(Debug, Clone)]
pub struct Scheduler<P = LinearDays> {
    config: SchedulerConfig,
    policy: P,
}

impl Default for Scheduler<LinearDays> {
    fn default() -> Self {
        Self {
            config: SchedulerConfig::default(),
            policy: LinearDays,
        }
    }
}

impl Scheduler<LinearDays> {
    /// Scheduler with the default level-in-days policy.
    pub fn new(config: SchedulerConfig) -> Result<Self> {
        Self::with_policy(config, LinearDays)
    }
}

impl<P: HidePolicy> Scheduler<P> {
    /// Scheduler with a custom hide policy.
    pub fn with_policy(config: SchedulerConfig, policy: P) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, policy })
    }

    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// End of the hide window for a quiz that just reached `level`.
    ///
    /// Saturates at the latest representable time.
    fn hide_until(&self, now: DateTime<Utc>, level: u32) -> DateTime<Utc> {
        now.checked_add_signed(self.policy.hide_for(level))
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }

    /// Select today's training set, shuffled.
    ///
    /// A quiz is kept unless its record is hidden past `now`. Duplicate
    /// quiz IDs in `readable` are kept once.
    pub fn select_daily_set<R: Rng + ?Sized>(
        &self,
        readable: &[Quiz],
        progress: &[QuizProgressRecord],
        now: DateTime<Utc>,
        rng: &mut R,
    ) -> Vec<Quiz> {
        let by_quiz: HashMap<QuizId, &QuizProgressRecord> =
            progress.iter().map(|r| (r.quiz_id, r)).collect();

        let mut seen = HashSet::with_capacity(readable.len());
        let mut selected: Vec<Quiz> = readable
            .iter()
            .filter(|quiz| seen.insert(quiz.id))
            .filter(|quiz| {
                ProgressState::from_record(by_quiz.get(&quiz.id).copied()).is_due(now)
            })
            .cloned()
            .collect();

        selected.shuffle(rng);

        tracing::debug!(
            readable = readable.len(),
            selected = selected.len(),
            "selected daily set"
        );

        selected
    }

    /// Check a response and compute the updated progress record.
    ///
    /// `existing` is the user's current record for the quiz, if any, and
    /// `failures` the session's counter for it. Nothing is carried over
    /// between calls.
    pub fn record_answer(
        &self,
        readable: &[Quiz],
        quiz_id: QuizId,
        response: &str,
        existing: Option<&QuizProgressRecord>,
        failures: FailureCounter,
        now: DateTime<Utc>,
    ) -> Result<AnswerOutcome> {
        if response.trim().is_empty() {
            return Err(SchedulerError::InvalidResponse);
        }

        let quiz = readable
            .iter()
            .find(|q| q.id == quiz_id)
            .ok_or(SchedulerError::NotFound(quiz_id))?;

        let result = check_response(quiz, response, self.config.fuzzy_threshold);
        let previous_level = ProgressState::from_record(existing).level();

        let (record, failures) = if result.is_correct {
            let level = previous_level.saturating_add(1);
            let record = QuizProgressRecord {
                quiz_id,
                level,
                hidden_until: self.hide_until(now, level),
            };
            (record, failures.reset())
        } else {
            let record = QuizProgressRecord {
                quiz_id,
                level: previous_level.saturating_sub(1),
                hidden_until: now,
            };
            (record, failures.incremented())
        };

        tracing::debug!(
            quiz_id = %quiz_id,
            correct = result.is_correct,
            from_level = previous_level,
            to_level = record.level,
            failures = failures.value(),
            "recorded answer"
        );

        Ok(AnswerOutcome {
            record,
            previous_level,
            is_correct: result.is_correct,
            similarity: result.similarity,
            failures,
            reveal_hints: failures.reached(self.config.hint_after_failures),
        })
    }
}
