pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;

use std::sync::Arc;

use axum::{
    routing::{delete, get, post},
    Router,
};
use review_core::{HidePolicy, Scheduler};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::AppConfig;
use crate::db::Database;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Database>,
    pub scheduler: Arc<Scheduler>,
}

impl AppState {
    /// Fresh state with an empty catalog
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let scheduler = Scheduler::new(config.scheduler.clone())?;
        Ok(Self {
            db: Arc::new(Database::new()),
            scheduler: Arc::new(scheduler),
        })
    }
}

/// Build the router with all routes
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        // Quiz catalog
        .route("/api/quizzes", post(routes::quizzes::create))
        .route("/api/quizzes/{quiz_id}", delete(routes::quizzes::delete))
        // Daily train
        .route("/api/users/{user_id}/daily", get(routes::daily::today))
        .route("/api/users/{user_id}/daily/answer", post(routes::daily::answer))
        .route(
            "/api/users/{user_id}/progress",
            get(routes::daily::progress).delete(routes::daily::reset_progress),
        )
        .with_state(state)
}

pub async fn run() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.log_filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let state = AppState::new(&config)?;
    tracing::info!(
        policy = state.scheduler.policy().name(),
        fuzzy_threshold = state.scheduler.config().fuzzy_threshold,
        hint_after_failures = state.scheduler.config().hint_after_failures,
        "Scheduler ready"
    );

    let app = router(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr = config.addr();
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}
