#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use slowpoke_core::config::ServerConfig;
use slowpoke_server::app_state::AppState;
use slowpoke_server::obs::access_log::{AccessLog, AccessRecord};
use slowpoke_server::server::Backend;

/// Collects access log lines in memory.
#[derive(Default)]
pub struct CaptureLog {
    lines: Mutex<Vec<String>>,
}

impl CaptureLog {
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

impl AccessLog for CaptureLog {
    fn record(&self, rec: &AccessRecord) {
        self.lines.lock().unwrap().push(rec.to_string());
    }
}

pub struct Running {
    pub app: SocketAddr,
    pub metrics: SocketAddr,
    pub state: AppState,
    pub log: Arc<CaptureLog>,
}

impl Running {
    pub fn app_url(&self, path: &str) -> String {
        format!("http://{}{}", self.app, path)
    }

    pub fn metrics_url(&self) -> String {
        format!("http://{}/metrics", self.metrics)
    }
}

/// Bind both listeners on loopback ephemeral ports and serve in the background.
pub async fn spawn_backend(max_delay_ms: u64) -> Running {
    let log = Arc::new(CaptureLog::default());
    let state = AppState::with_access_log(ServerConfig::ephemeral(max_delay_ms), log.clone());
    let backend = Backend::bind(state.clone()).await.expect("bind");
    let app = backend.app_addr().expect("app addr");
    let metrics = backend.metrics_addr().expect("metrics addr");
    tokio::spawn(backend.run());
    Running {
        app,
        metrics,
        state,
        log,
    }
}

/// Scrape `/metrics` and return the `hits_counter` sample.
pub async fn scrape_hits(client: &reqwest::Client, running: &Running) -> u64 {
    let body = client
        .get(running.metrics_url())
        .send()
        .await
        .expect("scrape")
        .text()
        .await
        .expect("scrape body");
    body.lines()
        .find_map(|l| l.strip_prefix("hits_counter "))
        .expect("hits_counter sample")
        .trim()
        .parse()
        .expect("integer sample")
}
