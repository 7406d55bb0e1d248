//! Work simulator: the catch-all application handler.

use std::time::Duration;

use axum::{extract::State, http::StatusCode};
use rand::Rng;

use crate::app_state::AppState;

pub const DONE_BODY: &str = "My long request has finished! I'm done!\n";

/// Uniform draw from `[0, max_ms)`; zero when `max_ms` is 0.
pub fn pick_delay(max_ms: u64) -> Duration {
    if max_ms == 0 {
        return Duration::ZERO;
    }
    Duration::from_millis(rand::thread_rng().gen_range(0..max_ms))
}

/// Sleep for a random bounded delay, then confirm.
///
/// Only this request's task is suspended; the listener keeps serving others.
pub async fn do_work(State(state): State<AppState>) -> (StatusCode, &'static str) {
    let delay = pick_delay(state.cfg().max_delay_ms);
    tokio::time::sleep(delay).await;
    (StatusCode::OK, DONE_BODY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delay_stays_below_bound() {
        for _ in 0..1_000 {
            assert!(pick_delay(700) < Duration::from_millis(700));
        }
    }

    #[test]
    fn zero_bound_means_no_delay() {
        assert_eq!(pick_delay(0), Duration::ZERO);
    }

    #[test]
    fn bound_of_one_is_always_zero() {
        assert_eq!(pick_delay(1), Duration::ZERO);
    }
}
