//! HTTP routes for grok-chat
//!
//! The router attached to the application at bootstrap. Plugin and component
//! routes are merged in by the application when it mounts.

pub mod chat;
pub mod health;
pub mod icons;
pub mod metrics;
pub mod ui;

use std::sync::Arc;
use std::time::Instant;

use axum::{routing::get, Router};

use crate::routes::health::HealthState;

/// Create the application router
pub fn create_router() -> Router {
    let state = Arc::new(HealthState {
        start_time: Instant::now(),
    });

    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/live", get(health::liveness_check))
        .route("/metrics", get(metrics::prometheus_metrics))
        .with_state(state)
}
