//! Shared application state for the slowpoke backend.
//!
//! The composition root: owns the config, the metrics registry, and the access
//! log sink, and hands `Arc` handles to middleware and handlers.

use std::sync::Arc;

use slowpoke_core::config::ServerConfig;

use crate::obs::access_log::{AccessLog, StdoutAccessLog};
use crate::obs::metrics::BackendMetrics;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
    metrics: Arc<BackendMetrics>,
    access_log: Arc<dyn AccessLog>,
}

struct AppStateInner {
    cfg: ServerConfig,
}

impl AppState {
    /// Build state that logs requests to stdout.
    pub fn new(cfg: ServerConfig) -> Self {
        Self::with_access_log(cfg, Arc::new(StdoutAccessLog))
    }

    pub fn with_access_log(cfg: ServerConfig, access_log: Arc<dyn AccessLog>) -> Self {
        Self {
            inner: Arc::new(AppStateInner { cfg }),
            metrics: Arc::new(BackendMetrics::new()),
            access_log,
        }
    }

    pub fn cfg(&self) -> &ServerConfig {
        &self.inner.cfg
    }

    pub fn metrics(&self) -> Arc<BackendMetrics> {
        Arc::clone(&self.metrics)
    }

    pub fn access_log(&self) -> &dyn AccessLog {
        self.access_log.as_ref()
    }
}
