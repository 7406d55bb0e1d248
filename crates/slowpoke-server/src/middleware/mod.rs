//! Request-processing stages for application traffic.
//!
//! Applied outermost first: `logging` -> `hits` -> work handler. Each stage
//! receives `Next`, delegates, and may observe the response afterwards.

pub mod client_ip;
pub mod hits;
pub mod logging;

pub use hits::count_hits;
pub use logging::log_requests;
