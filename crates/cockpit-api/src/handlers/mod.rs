//! HTTP handlers

pub mod auth;
pub mod data_sources;
pub mod health;
pub mod intelligence;
pub mod signals;
pub mod triggers;

use std::time::Duration;

use crate::AppState;

/// Hold a handler for the configured mock upstream latency. No-op when
/// latency simulation is off (tests, local dev).
pub(crate) async fn simulate_upstream_delay(state: &AppState, ms: u64) {
    if state.config.simulate_latency {
        tokio::time::sleep(Duration::from_millis(ms)).await;
    }
}
