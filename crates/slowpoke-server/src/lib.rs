//! slowpoke server library entry.
//!
//! Wires the metrics registry, request-processing stages, and the work
//! simulator into two listeners: application traffic and `/metrics`. Used by
//! the binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod middleware;
pub mod obs;
pub mod ops;
pub mod router;
pub mod server;
pub mod work;
