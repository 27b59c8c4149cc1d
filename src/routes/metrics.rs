//! Prometheus metrics endpoint
//!
//! Exposes application metrics in Prometheus format for monitoring.

use axum::response::IntoResponse;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::Lazy;

/// Global Prometheus handle for metrics export
static PROMETHEUS_HANDLE: Lazy<PrometheusHandle> = Lazy::new(|| {
    PrometheusBuilder::new()
        .install_recorder()
        .expect("Failed to install Prometheus recorder")
});

/// Initialize metrics (call once at startup)
pub fn init_metrics() {
    let _ = &*PROMETHEUS_HANDLE;

    metrics::describe_counter!(
        "grok_chat_xai_requests_total",
        "Total number of chat completion requests sent to xAI"
    );
    metrics::describe_histogram!(
        "grok_chat_xai_request_duration_seconds",
        "xAI request duration in seconds"
    );
    metrics::describe_counter!(
        "grok_chat_mounts_total",
        "Total number of times the application was mounted"
    );
    metrics::describe_gauge!(
        "grok_chat_live_instances",
        "Number of live mounted application instances"
    );
}

/// Prometheus metrics endpoint handler
pub async fn prometheus_metrics() -> impl IntoResponse {
    PROMETHEUS_HANDLE.render()
}

/// Record an outbound xAI request
pub fn record_request(status: &str, model: &str, duration_secs: f64) {
    metrics::counter!("grok_chat_xai_requests_total", "status" => status.to_string(), "model" => model.to_string())
        .increment(1);
    metrics::histogram!("grok_chat_xai_request_duration_seconds", "model" => model.to_string())
        .record(duration_secs);
}

/// Record a mount and the resulting number of live instances
pub fn record_mount(live_instances: usize) {
    metrics::counter!("grok_chat_mounts_total").increment(1);
    set_live_instances(live_instances);
}

/// Update the live instances gauge
pub fn set_live_instances(count: usize) {
    metrics::gauge!("grok_chat_live_instances").set(count as f64);
}
