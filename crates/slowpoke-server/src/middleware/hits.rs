use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::app_state::AppState;

/// Count the request, then delegate. Counts regardless of the outcome.
pub async fn count_hits(State(state): State<AppState>, req: Request, next: Next) -> Response {
    state.metrics().hits.inc();
    next.run(req).await
}
