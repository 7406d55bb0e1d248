//! Listener lifecycle.
//!
//! Both listeners are bound before either starts serving, so a port conflict
//! surfaces as a startup error. Once running, they are served concurrently
//! and independently: a slow application request never delays a scrape.

use std::net::SocketAddr;

use tokio::net::TcpListener;

use slowpoke_core::error::{Result, SlowpokeError, Surface};

use crate::app_state::AppState;
use crate::router::{build_app_router, build_metrics_router};

pub struct Backend {
    state: AppState,
    app: TcpListener,
    metrics: TcpListener,
}

async fn bind_listener(surface: Surface, addr: SocketAddr) -> Result<TcpListener> {
    TcpListener::bind(addr)
        .await
        .map_err(|source| SlowpokeError::Bind { surface, addr, source })
}

fn local_addr(surface: Surface, listener: &TcpListener) -> Result<SocketAddr> {
    listener
        .local_addr()
        .map_err(|source| SlowpokeError::Serve { surface, source })
}

impl Backend {
    /// Validate the config and bind both listeners.
    pub async fn bind(state: AppState) -> Result<Self> {
        state.cfg().validate()?;
        let metrics = bind_listener(Surface::Metrics, state.cfg().metrics_listen).await?;
        let app = bind_listener(Surface::App, state.cfg().app_listen).await?;
        Ok(Self { state, app, metrics })
    }

    pub fn app_addr(&self) -> Result<SocketAddr> {
        local_addr(Surface::App, &self.app)
    }

    pub fn metrics_addr(&self) -> Result<SocketAddr> {
        local_addr(Surface::Metrics, &self.metrics)
    }

    /// Serve both listeners until one of them fails.
    pub async fn run(self) -> Result<()> {
        let Backend { state, app, metrics } = self;

        let app_router = build_app_router(state.clone());
        let metrics_router = build_metrics_router(state);

        let app_srv = async move {
            axum::serve(app, app_router.into_make_service_with_connect_info::<SocketAddr>())
                .await
                .map_err(|source| SlowpokeError::Serve { surface: Surface::App, source })
        };
        let metrics_srv = async move {
            axum::serve(metrics, metrics_router)
                .await
                .map_err(|source| SlowpokeError::Serve { surface: Surface::Metrics, source })
        };

        // first listener error ends the process
        tokio::try_join!(app_srv, metrics_srv).map(|_| ())
    }
}
