//! Access log records and sinks.
//!
//! One record per application request, written as
//! `<client-ip> <method> <request-uri> <status> <duration>`.

use std::fmt;
use std::io::Write;
use std::time::Duration;

use axum::http::{Method, StatusCode};

#[derive(Debug, Clone)]
pub struct AccessRecord {
    pub client_ip: String,
    pub method: Method,
    /// Raw request target: path plus query.
    pub uri: String,
    pub status: StatusCode,
    pub elapsed: Duration,
}

impl fmt::Display for AccessRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Duration's Debug output is the human form: 312.456789ms, 1.2s, 850µs
        write!(
            f,
            "{} {} {} {} {:?}",
            self.client_ip,
            self.method,
            self.uri,
            self.status.as_u16(),
            self.elapsed
        )
    }
}

/// Destination for access log lines.
pub trait AccessLog: Send + Sync {
    fn record(&self, rec: &AccessRecord);
}

/// Writes each record as a line on stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutAccessLog;

impl AccessLog for StdoutAccessLog {
    fn record(&self, rec: &AccessRecord) {
        let mut out = std::io::stdout().lock();
        if let Err(e) = writeln!(out, "{rec}") {
            tracing::warn!(error = %e, "access log write failed");
        }
    }
}
