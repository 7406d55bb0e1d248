//! Client address resolution honoring proxy headers.

use std::net::SocketAddr;

use axum::extract::ConnectInfo;
use axum::http::{HeaderMap, Request};

pub const X_FORWARDED_FOR: &str = "x-forwarded-for";
pub const X_REAL_IP: &str = "x-real-ip";

/// Placeholder when no address is known.
pub const UNKNOWN_IP: &str = "-";

/// First non-empty hop of `X-Forwarded-For`, then `X-Real-IP`.
pub fn forwarded_ip(headers: &HeaderMap) -> Option<String> {
    if let Some(xff) = headers.get(X_FORWARDED_FOR).and_then(|v| v.to_str().ok()) {
        if let Some(first) = xff.split(',').map(str::trim).find(|s| !s.is_empty()) {
            return Some(first.to_string());
        }
    }
    headers
        .get(X_REAL_IP)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Client IP as perceived by the server.
///
/// The peer address comes from `ConnectInfo`, present when the listener is
/// served with `into_make_service_with_connect_info`.
pub fn real_ip<B>(req: &Request<B>) -> String {
    if let Some(ip) = forwarded_ip(req.headers()) {
        return ip;
    }
    req.extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(peer)| peer.ip().to_string())
        .unwrap_or_else(|| UNKNOWN_IP.to_string())
}
