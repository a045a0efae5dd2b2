//! Core types for the review scheduler.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Quiz identifier.
pub type QuizId = Uuid;

/// Kind of quiz question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuizKind {
    PromptResponse,
    MultipleChoice,
    FillInTheBlank,
    OrderedListAnswer,
    UnorderedListAnswer,
    Verbatim,
}

impl Default for QuizKind {
    fn default() -> Self {
        Self::PromptResponse
    }
}

impl QuizKind {
    /// Whether responses are picked from a fixed list of choices.
    ///
    /// Enumerated kinds are checked by exact match, every other kind by
    /// fuzzy similarity.
    pub fn is_enumerated(self) -> bool {
        matches!(self, Self::MultipleChoice)
    }

    /// Get the kind name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PromptResponse => "prompt-response",
            Self::MultipleChoice => "multiple-choice",
            Self::FillInTheBlank => "fill-in-the-blank",
            Self::OrderedListAnswer => "ordered-list-answer",
            Self::UnorderedListAnswer => "unordered-list-answer",
            Self::Verbatim => "verbatim",
        }
    }
}

/// Quiz question as seen by the scheduler.
///
/// Visibility is decided before a quiz reaches the scheduler, so no
/// permission data lives here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quiz {
    pub id: QuizId,
    #[serde(rename = "type", default)]
    pub kind: QuizKind,
    pub prompt: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<String>,
    pub correct_responses: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hints: Vec<String>,
}

impl Quiz {
    /// Create a prompt/response quiz with a fresh ID.
    pub fn new(prompt: impl Into<String>, correct_responses: Vec<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind: QuizKind::PromptResponse,
            prompt: prompt.into(),
            choices: Vec::new(),
            correct_responses,
            hints: Vec::new(),
        }
    }

    /// Builder-style kind override.
    pub fn with_kind(mut self, kind: QuizKind) -> Self {
        self.kind = kind;
        self
    }

    /// Builder-style choices override.
    pub fn with_choices(mut self, choices: Vec<String>) -> Self {
        self.choices = choices;
        self
    }

    /// Builder-style hints override.
    pub fn with_hints(mut self, hints: Vec<String>) -> Self {
        self.hints = hints;
        self
    }
}

/// Per-user, per-quiz mastery state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizProgressRecord {
    pub quiz_id: QuizId,
    pub level: u32,
    pub hidden_until: DateTime<Utc>,
}

impl QuizProgressRecord {
    /// Whether the record keeps its quiz out of the daily set at `now`.
    pub fn is_hidden_at(&self, now: DateTime<Utc>) -> bool {
        now < self.hidden_until
    }
}

/// State of a (user, quiz) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressState {
    Unseen,
    Active {
        level: u32,
        hidden_until: DateTime<Utc>,
    },
}

impl ProgressState {
    /// Derive the pair state from an optional record.
    pub fn from_record(record: Option<&QuizProgressRecord>) -> Self {
        match record {
            Some(r) => Self::Active {
                level: r.level,
                hidden_until: r.hidden_until,
            },
            None => Self::Unseen,
        }
    }

    /// Current level (0 for unseen pairs).
    pub fn level(&self) -> u32 {
        match self {
            Self::Unseen => 0,
            Self::Active { level, .. } => *level,
        }
    }

    /// Whether the quiz belongs in the daily set at `now`.
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        match self {
            Self::Unseen => true,
            Self::Active { hidden_until, .. } => *hidden_until <= now,
        }
    }
}

/// Consecutive incorrect answers for one quiz within a training session.
///
/// Never persisted. Callers hold it and pass it back in on the next answer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FailureCounter(u32);

impl FailureCounter {
    pub fn new(count: u32) -> Self {
        Self(count)
    }

    pub fn value(self) -> u32 {
        self.0
    }

    /// Counter after one more incorrect answer.
    pub fn incremented(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// Counter after a correct answer.
    pub fn reset(self) -> Self {
        Self(0)
    }

    /// Whether hints should be revealed for the given threshold.
    pub fn reached(self, threshold: u32) -> bool {
        self.0 >= threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn quiz_kind_serializes_kebab_case() {
        let json = serde_json::to_string(&QuizKind::FillInTheBlank).unwrap();
        assert_eq!(json, "\"fill-in-the-blank\"");

        let kind: QuizKind = serde_json::from_str("\"multiple-choice\"").unwrap();
        assert_eq!(kind, QuizKind::MultipleChoice);
    }

    #[test]
    fn quiz_kind_as_str_matches_serde_name() {
        for kind in [
            QuizKind::PromptResponse,
            QuizKind::MultipleChoice,
            QuizKind::FillInTheBlank,
            QuizKind::OrderedListAnswer,
            QuizKind::UnorderedListAnswer,
            QuizKind::Verbatim,
        ] {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
        }
        assert!(serde_json::from_str::<QuizKind>("\"essay\"").is_err());
    }

    #[test]
    fn only_multiple_choice_is_enumerated() {
        assert!(QuizKind::MultipleChoice.is_enumerated());
        assert!(!QuizKind::PromptResponse.is_enumerated());
        assert!(!QuizKind::Verbatim.is_enumerated());
    }

    #[test]
    fn quiz_deserializes_with_type_field() {
        let json = r#"{
            "id": "6f1c8f5e-9a52-4b5e-9d6f-2d1e8c3b7a10",
            "type": "multiple-choice",
            "prompt": "2 + 2?",
            "choices": ["3", "4"],
            "correct_responses": ["4"]
        }"#;
        let quiz: Quiz = serde_json::from_str(json).unwrap();
        assert_eq!(quiz.kind, QuizKind::MultipleChoice);
        assert_eq!(quiz.choices.len(), 2);
        assert!(quiz.hints.is_empty());
    }

    #[test]
    fn progress_state_due_boundary() {
        let now = Utc::now();
        let at_now = QuizProgressRecord {
            quiz_id: Uuid::new_v4(),
            level: 2,
            hidden_until: now,
        };
        assert!(ProgressState::from_record(Some(&at_now)).is_due(now));
        assert!(!at_now.is_hidden_at(now));

        let later = QuizProgressRecord {
            hidden_until: now + Duration::seconds(1),
            ..at_now
        };
        assert!(!ProgressState::from_record(Some(&later)).is_due(now));
        assert!(ProgressState::from_record(None).is_due(now));
        assert_eq!(ProgressState::from_record(None).level(), 0);
    }

    #[test]
    fn failure_counter_reaches_threshold() {
        let counter = FailureCounter::default().incremented().incremented();
        assert!(!counter.reached(3));
        let counter = counter.incremented();
        assert!(counter.reached(3));
        assert_eq!(counter.reset().value(), 0);
    }
}
