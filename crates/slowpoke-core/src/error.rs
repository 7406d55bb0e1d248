//! Shared error type across slowpoke crates.

use std::net::SocketAddr;

use thiserror::Error;

/// Shared result type.
pub type Result<T> = std::result::Result<T, SlowpokeError>;

/// Which listener an error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    /// Application traffic (simulated work).
    App,
    /// Metrics scraping.
    Metrics,
}

impl Surface {
    pub fn as_str(self) -> &'static str {
        match self {
            Surface::App => "app",
            Surface::Metrics => "metrics",
        }
    }
}

impl std::fmt::Display for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unified error type. Every variant is fatal at startup.
#[derive(Debug, Error)]
pub enum SlowpokeError {
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("{surface} listener failed to bind {addr}: {source}")]
    Bind {
        surface: Surface,
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("{surface} listener stopped: {source}")]
    Serve {
        surface: Surface,
        #[source]
        source: std::io::Error,
    },
}

impl SlowpokeError {
    /// Listener the error originated from, if any.
    pub fn surface(&self) -> Option<Surface> {
        match self {
            SlowpokeError::InvalidConfig(_) => None,
            SlowpokeError::Bind { surface, .. } | SlowpokeError::Serve { surface, .. } => {
                Some(*surface)
            }
        }
    }
}
