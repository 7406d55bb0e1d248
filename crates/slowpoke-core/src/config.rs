//! Typed server configuration.
//!
//! There is no file or environment loading: the binary runs on the defaults
//! and tests build their own values.

use std::net::{Ipv4Addr, SocketAddr};

use crate::error::{Result, SlowpokeError};

/// Default application port.
pub const DEFAULT_APP_PORT: u16 = 8080;
/// Default metrics port.
pub const DEFAULT_METRICS_PORT: u16 = 5050;
/// Upper (exclusive) bound of the simulated work delay.
pub const DEFAULT_MAX_DELAY_MS: u64 = 700;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Listen address for application traffic.
    pub app_listen: SocketAddr,
    /// Listen address for `/metrics`.
    pub metrics_listen: SocketAddr,
    /// Work delay is drawn from `[0, max_delay_ms)`. Zero disables the delay.
    pub max_delay_ms: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            app_listen: SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_APP_PORT)),
            metrics_listen: SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_METRICS_PORT)),
            max_delay_ms: DEFAULT_MAX_DELAY_MS,
        }
    }
}

impl ServerConfig {
    /// Both listeners on loopback with OS-assigned ports.
    pub fn ephemeral(max_delay_ms: u64) -> Self {
        Self {
            app_listen: SocketAddr::from((Ipv4Addr::LOCALHOST, 0)),
            metrics_listen: SocketAddr::from((Ipv4Addr::LOCALHOST, 0)),
            max_delay_ms,
        }
    }

    pub fn validate(&self) -> Result<()> {
        // port 0 lets the OS pick, so two zero ports never collide
        if self.app_listen.port() != 0 && self.app_listen == self.metrics_listen {
            return Err(SlowpokeError::InvalidConfig(format!(
                "app and metrics listeners must differ (both {})",
                self.app_listen
            )));
        }
        if self.app_listen.port() != 0
            && self.app_listen.port() == self.metrics_listen.port()
            && (self.app_listen.ip().is_unspecified() || self.metrics_listen.ip().is_unspecified())
        {
            return Err(SlowpokeError::InvalidConfig(format!(
                "port {} is shared by app and metrics listeners",
                self.app_listen.port()
            )));
        }
        Ok(())
    }
}
