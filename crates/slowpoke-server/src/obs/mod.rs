//! In-process observability: the hit counter registry rendered at `/metrics`
//! and the per-request access log.

pub mod access_log;
pub mod metrics;
