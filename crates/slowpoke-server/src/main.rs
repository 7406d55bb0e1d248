//! slowpoke backend
//!
//! - Application listener on :8080, every path sleeps up to 700ms then confirms
//! - `/metrics` listener on :5050 with the hit counter
//! - One access log line per application request on stdout

use tracing_subscriber::{fmt, EnvFilter};

use slowpoke_core::config::ServerConfig;
use slowpoke_server::{app_state::AppState, server::Backend};

#[tokio::main]
async fn main() {
    // stdout carries the access log
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "slowpoke-server failed");
        std::process::exit(1);
    }
}

async fn run() -> slowpoke_core::Result<()> {
    let state = AppState::new(ServerConfig::default());
    let backend = Backend::bind(state).await?;

    let app = backend.app_addr()?;
    let metrics = backend.metrics_addr()?;
    tracing::info!(%app, %metrics, "slowpoke-server starting");

    backend.run().await
}
