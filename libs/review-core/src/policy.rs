//! How long a quiz stays hidden after a correct answer.

use chrono::Duration;

/// Maps a level reached by a correct answer to the time the quiz stays
/// out of the daily set.
pub trait HidePolicy: Send + Sync {
    /// Policy identifier.
    fn name(&self) -> &'static str;

    /// Hide duration for a quiz that was just answered correctly and is now at `level`.
    fn hide_for(&self, level: u32) -> Duration;
}

/// Hide for as many days as the level: level 7 means 7 days.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearDays;

impl HidePolicy for LinearDays {
    fn name(&self) -> &'static str {
        "linear_days"
    }

    fn hide_for(&self, level: u32) -> Duration {
        Duration::days(i64::from(level))
    }
}

impl<F> HidePolicy for F
where
    F: Fn(u32) -> Duration + Send + Sync,
{
    fn name(&self) -> &'static str {
        "custom"
    }

    fn hide_for(&self, level: u32) -> Duration {
        self(level)
    }
}
