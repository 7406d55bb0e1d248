//! slowpoke core: the error surface and typed configuration shared by the
//! server library and its binary.
//!
//! Carries no runtime or transport dependencies.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here. Fallible paths
//! surface as `SlowpokeError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod config;
pub mod error;

/// Shared result type.
pub use error::{Result, SlowpokeError};
