#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::net::SocketAddr;

use slowpoke_core::config::ServerConfig;
use slowpoke_core::SlowpokeError;

#[test]
fn defaults_match_fixed_ports() {
    let cfg = ServerConfig::default();
    assert_eq!(cfg.app_listen.port(), 8080);
    assert_eq!(cfg.metrics_listen.port(), 5050);
    assert_eq!(cfg.max_delay_ms, 700);
    cfg.validate().expect("defaults must validate");
}

#[test]
fn ephemeral_ports_never_collide() {
    let cfg = ServerConfig::ephemeral(10);
    cfg.validate().expect("two port-0 listeners are fine");
}

#[test]
fn rejects_same_listen_address() {
    let addr: SocketAddr = "127.0.0.1:9000".parse().unwrap();
    let cfg = ServerConfig {
        app_listen: addr,
        metrics_listen: addr,
        max_delay_ms: 700,
    };
    let err = cfg.validate().expect_err("must fail");
    assert!(matches!(err, SlowpokeError::InvalidConfig(_)));
    assert!(err.surface().is_none());
}

#[test]
fn rejects_port_shared_with_wildcard() {
    let cfg = ServerConfig {
        app_listen: "0.0.0.0:9000".parse().unwrap(),
        metrics_listen: "127.0.0.1:9000".parse().unwrap(),
        max_delay_ms: 700,
    };
    assert!(cfg.validate().is_err());
}

#[test]
fn distinct_hosts_may_share_port() {
    let cfg = ServerConfig {
        app_listen: "127.0.0.1:9000".parse().unwrap(),
        metrics_listen: "127.0.0.2:9000".parse().unwrap(),
        max_delay_ms: 700,
    };
    cfg.validate().expect("distinct concrete hosts");
}
