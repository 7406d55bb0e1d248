//! Access logging stage.
//!
//! Captures the request line before delegating and the final status after,
//! so the record reflects whatever the downstream chain produced.
//!
//! The rest of the chain runs on its own task. A client that disconnects
//! drops only the outer future; the work still completes and the line is
//! still written.

use std::time::Instant;

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::app_state::AppState;
use crate::middleware::client_ip::real_ip;
use crate::obs::access_log::AccessRecord;

pub async fn log_requests(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let client_ip = real_ip(&req);
    let method = req.method().clone();
    // raw request target: absolute-form keeps scheme and authority
    let uri = req.uri().to_string();

    let start = Instant::now();
    let task_state = state.clone();
    let mut record = AccessRecord {
        client_ip,
        method,
        uri,
        status: StatusCode::OK,
        elapsed: start.elapsed(),
    };
    let mut task_record = record.clone();

    let handle = tokio::spawn(async move {
        let response = next.run(req).await;
        task_record.status = response.status();
        task_record.elapsed = start.elapsed();
        task_state.access_log().record(&task_record);
        response
    });

    match handle.await {
        Ok(response) => response,
        Err(e) => {
            tracing::error!(error = %e, uri = %record.uri, "request task failed");
            record.status = StatusCode::INTERNAL_SERVER_ERROR;
            record.elapsed = start.elapsed();
            state.access_log().record(&record);
            record.status.into_response()
        }
    }
}
