//! Prometheus metrics for request tracking.
//!
//! This module provides:
//! - HTTP request counters and latency histograms (per route)
//! - Domain counters for signups, logins, and greeting updates
//! - The recorder installation used by the `/metrics` endpoint

use std::time::Instant;

use axum::extract::{MatchedPath, Request};
use axum::middleware::Next;
use axum::response::Response;
use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};
use tracing::debug;

// === Metric Name Constants ===

/// HTTP request latency metric name.
pub const METRIC_HTTP_REQUEST_LATENCY: &str = "http_request_latency_ms";
/// HTTP requests counter metric name.
pub const METRIC_HTTP_REQUESTS: &str = "http_requests_total";
/// Successful logins counter metric name.
pub const METRIC_LOGINS_SUCCEEDED: &str = "logins_succeeded_total";
/// Failed logins counter metric name.
pub const METRIC_LOGINS_FAILED: &str = "logins_failed_total";
/// Signups counter metric name.
pub const METRIC_SIGNUPS: &str = "signups_total";
/// Greeting updates counter metric name.
pub const METRIC_GREETING_UPDATES: &str = "greeting_updates_total";

/// Install the Prometheus recorder and register metric descriptions.
///
/// Call this once at startup; the returned handle renders the exposition
/// text for the `/metrics` endpoint.
pub fn install_recorder() -> Result<PrometheusHandle, BuildError> {
    let handle = PrometheusBuilder::new().install_recorder()?;
    init_metrics();
    Ok(handle)
}

/// Initialize all metric descriptions.
pub fn init_metrics() {
    describe_histogram!(
        METRIC_HTTP_REQUEST_LATENCY,
        "HTTP request latency in milliseconds"
    );

    describe_counter!(METRIC_HTTP_REQUESTS, "Total number of HTTP requests");
    describe_counter!(METRIC_LOGINS_SUCCEEDED, "Total number of successful logins");
    describe_counter!(METRIC_LOGINS_FAILED, "Total number of failed logins");
    describe_counter!(METRIC_SIGNUPS, "Total number of signup requests");
    describe_counter!(
        METRIC_GREETING_UPDATES,
        "Total number of greeting template updates"
    );

    debug!("Metrics initialized");
}

/// Axum middleware recording a counter and latency histogram per request.
///
/// Routes are labeled by their matched pattern (e.g. `/greet/:name`), not the
/// raw path, to keep label cardinality bounded.
pub async fn track_http(request: Request, next: Next) -> Response {
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| request.uri().path().to_string());
    let method = request.method().to_string();

    let start = Instant::now();
    let response = next.run(request).await;
    let latency_ms = start.elapsed().as_secs_f64() * 1000.0;

    counter!(METRIC_HTTP_REQUESTS, "route" => route.clone(), "method" => method).increment(1);
    histogram!(METRIC_HTTP_REQUEST_LATENCY, "route" => route).record(latency_ms);

    response
}

/// Increment successful logins counter.
pub fn inc_logins_succeeded() {
    counter!(METRIC_LOGINS_SUCCEEDED).increment(1);
}

/// Increment failed logins counter.
pub fn inc_logins_failed() {
    counter!(METRIC_LOGINS_FAILED).increment(1);
}

/// Increment signups counter.
pub fn inc_signups() {
    counter!(METRIC_SIGNUPS).increment(1);
}

/// Increment greeting updates counter.
pub fn inc_greeting_updates() {
    counter!(METRIC_GREETING_UPDATES).increment(1);
}
