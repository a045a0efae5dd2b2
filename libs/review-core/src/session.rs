//! Ephemeral training session over one daily set.
//!
//! Tracks what the learner still has to answer, per-quiz failure counters,
//! and the start/pause state with a time limit. None of it is persisted.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::scheduler::AnswerOutcome;
use crate::types::{FailureCounter, Quiz, QuizId};

/// Session lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    NotStarted,
    Running,
    Paused,
    Finished,
}

impl Default for SessionStatus {
    fn default() -> Self {
        Self::NotStarted
    }
}

/// User-adjustable session settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingSettings {
    /// Time limit in seconds.
    pub time_limit_secs: u32,
}

impl Default for TrainingSettings {
    fn default() -> Self {
        Self {
            time_limit_secs: 15 * 60,
        }
    }
}

impl TrainingSettings {
    pub fn time_limit(&self) -> Duration {
        Duration::seconds(i64::from(self.time_limit_secs))
    }
}

#[derive(Debug, Clone, Default)]
struct Slot {
    visible: bool,
    failures: FailureCounter,
}

/// Presentation state for one pass over a daily set.
#[derive(Debug, Clone)]
pub struct TrainingSession {
    order: Vec<QuizId>,
    slots: HashMap<QuizId, Slot>,
    settings: TrainingSettings,
    status: SessionStatus,
    /// Running time accumulated before the current run segment.
    elapsed: Duration,
    resumed_at: Option<DateTime<Utc>>,
}

impl TrainingSession {
    /// Build a session over a daily set, keeping its order.
    pub fn new(daily_set: &[Quiz], settings: TrainingSettings) -> Self {
        let mut order = Vec::with_capacity(daily_set.len());
        let mut slots = HashMap::with_capacity(daily_set.len());
        for quiz in daily_set {
            if slots
                .insert(
                    quiz.id,
                    Slot {
                        visible: true,
                        ..Default::default()
                    },
                )
                .is_none()
            {
                order.push(quiz.id);
            }
        }

        Self {
            order,
            slots,
            settings,
            status: SessionStatus::NotStarted,
            elapsed: Duration::zero(),
            resumed_at: None,
        }
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn settings(&self) -> &TrainingSettings {
        &self.settings
    }

    pub fn update_settings(&mut self, settings: TrainingSettings) {
        self.settings = settings;
    }

    /// Start the session. No-op unless it has not started yet.
    pub fn start(&mut self, now: DateTime<Utc>) {
        if self.status == SessionStatus::NotStarted {
            self.status = SessionStatus::Running;
            self.resumed_at = Some(now);
        }
    }

    /// Start when not started, otherwise flip between running and paused.
    pub fn toggle_pause(&mut self, now: DateTime<Utc>) {
        match self.status {
            SessionStatus::NotStarted => self.start(now),
            SessionStatus::Running => {
                self.elapsed = self.elapsed_at(now);
                self.resumed_at = None;
                self.status = SessionStatus::Paused;
            }
            SessionStatus::Paused => {
                self.resumed_at = Some(now);
                self.status = SessionStatus::Running;
            }
            SessionStatus::Finished => {}
        }
    }

    /// End the session.
    pub fn close(&mut self, now: DateTime<Utc>) {
        self.elapsed = self.elapsed_at(now);
        self.resumed_at = None;
        self.status = SessionStatus::Finished;
    }

    /// Running time so far, excluding paused periods.
    pub fn elapsed_at(&self, now: DateTime<Utc>) -> Duration {
        match self.resumed_at {
            Some(resumed) if now > resumed => self.elapsed + (now - resumed),
            _ => self.elapsed,
        }
    }

    /// Whether the time limit has been used up.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.elapsed_at(now) >= self.settings.time_limit()
    }

    /// Failure counter to pass into the next answer for `quiz_id`.
    pub fn failures(&self, quiz_id: QuizId) -> FailureCounter {
        self.slots
            .get(&quiz_id)
            .map(|slot| slot.failures)
            .unwrap_or_default()
    }

    /// Fold an answer outcome into the session.
    ///
    /// A correct answer removes the quiz for the rest of the session.
    /// Returns false when the quiz is not part of this session.
    pub fn apply(&mut self, outcome: &AnswerOutcome) -> bool {
        let Some(slot) = self.slots.get_mut(&outcome.record.quiz_id) else {
            return false;
        };
        slot.failures = outcome.failures;
        if outcome.is_correct {
            slot.visible = false;
        }
        if self.remaining_count() == 0 {
            self.status = SessionStatus::Finished;
        }
        true
    }

    /// Quizzes still to answer, in presentation order.
    pub fn remaining(&self) -> Vec<QuizId> {
        self.order
            .iter()
            .filter(|id| self.slots.get(*id).is_some_and(|slot| slot.visible))
            .copied()
            .collect()
    }

    pub fn remaining_count(&self) -> usize {
        self.slots.values().filter(|slot| slot.visible).count()
    }

    pub fn is_complete(&self) -> bool {
        self.remaining_count() == 0
    }
}
