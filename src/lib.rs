pub mod config;
pub mod handlers;
pub mod metrics;
pub mod models;
pub mod phone;
pub mod rate_limit;
pub mod state;

use axum::{
    Router,
    routing::{any, get},
};
use std::sync::Arc;

use crate::state::AppState;

// Build the full application router. Kept separate from main so the
// integration tests can mount the same routes on their own listener.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health_handler))
        .route("/api/test-call", any(handlers::test_call_handler))
        .route("/metrics", get(handlers::metrics_handler))
        .with_state(state)
}
