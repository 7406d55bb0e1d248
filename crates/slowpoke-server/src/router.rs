//! Axum router wiring for both listeners.

use axum::{middleware, routing::get, Router};

use crate::{app_state::AppState, ops, work};

/// Application surface: every path and method falls through to the work
/// simulator. `layer` wraps outward, so the logger is added last to run first.
pub fn build_app_router(state: AppState) -> Router {
    Router::new()
        .fallback(work::do_work)
        .layer(middleware::from_fn_with_state(state.clone(), crate::middleware::count_hits))
        .layer(middleware::from_fn_with_state(state.clone(), crate::middleware::log_requests))
        .with_state(state)
}

/// Metrics surface: only `GET /metrics`.
pub fn build_metrics_router(state: AppState) -> Router {
    Router::new()
        .route("/metrics", get(ops::metrics))
        .with_state(state)
}
