//! Environment configuration for the backend

use anyhow::Context;
use review_core::SchedulerConfig;

/// Server and scheduler settings read from the environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub log_filter: String,
    pub scheduler: SchedulerConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            log_filter: "info".to_string(),
            scheduler: SchedulerConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load from the process environment (after `.env`, if present)
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("PORT must be a port number, got {raw:?}"))?,
            None => defaults.port,
        };

        let mut scheduler = defaults.scheduler;
        if let Some(raw) = lookup("FUZZY_THRESHOLD") {
            scheduler.fuzzy_threshold = raw
                .parse()
                .with_context(|| format!("FUZZY_THRESHOLD must be a number, got {raw:?}"))?;
        }
        if let Some(raw) = lookup("HINT_AFTER_FAILURES") {
            scheduler.hint_after_failures = raw
                .parse()
                .with_context(|| format!("HINT_AFTER_FAILURES must be an integer, got {raw:?}"))?;
        }
        scheduler.validate()?;

        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port,
            log_filter: lookup("RUST_LOG").unwrap_or(defaults.log_filter),
            scheduler,
        })
    }

    /// Socket address string for the listener
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
