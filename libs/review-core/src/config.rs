//! Scheduler configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SchedulerError};

/// Similarity a text response needs to count as correct.
pub const DEFAULT_FUZZY_THRESHOLD: f64 = 0.8;

/// Consecutive failures after which hints are revealed.
pub const DEFAULT_HINT_AFTER_FAILURES: u32 = 3;

/// Tunables for answer checking and hint reveal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    pub fuzzy_threshold: f64,
    pub hint_after_failures: u32,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            fuzzy_threshold: DEFAULT_FUZZY_THRESHOLD,
            hint_after_failures: DEFAULT_HINT_AFTER_FAILURES,
        }
    }
}

impl SchedulerConfig {
    /// Check that every value is in range.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.fuzzy_threshold) {
            return Err(SchedulerError::InvalidConfig(format!(
                "fuzzy_threshold must be within 0..=1, got {}",
                self.fuzzy_threshold
            )));
        }
        if self.hint_after_failures == 0 {
            return Err(SchedulerError::InvalidConfig(
                "hint_after_failures must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
