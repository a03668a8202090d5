//! Prometheus metrics for request tracking and monitoring.
//!
//! This module provides metrics for:
//! - HTTP request latency
//! - Statistics aggregation latency
//! - Item creation outcomes
//! - Store failures and stats fallbacks

use std::time::Instant;

use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};
use tracing::debug;

// === Metric Name Constants ===

/// HTTP request latency metric name.
pub const METRIC_HTTP_REQUEST_LATENCY: &str = "http_request_latency_ms";
/// Statistics aggregation latency metric name.
pub const METRIC_STATS_AGGREGATION_LATENCY: &str = "stats_aggregation_latency_ms";
/// Items created counter metric name.
pub const METRIC_ITEMS_CREATED: &str = "items_created_total";
/// Items rejected by validation counter metric name.
pub const METRIC_ITEMS_REJECTED: &str = "items_rejected_total";
/// Store error counter metric name.
pub const METRIC_STORE_ERRORS: &str = "store_errors_total";
/// Stats fallback counter metric name.
pub const METRIC_STATS_FALLBACKS: &str = "stats_fallbacks_total";

/// Install the Prometheus recorder and register metric descriptions.
/// Call this once at startup; the returned handle renders the exposition
/// text for the `/metrics` endpoint.
pub fn init_metrics() -> Result<PrometheusHandle, BuildError> {
    let handle = PrometheusBuilder::new().install_recorder()?;

    describe_histogram!(
        METRIC_HTTP_REQUEST_LATENCY,
        "HTTP request latency in milliseconds"
    );
    describe_histogram!(
        METRIC_STATS_AGGREGATION_LATENCY,
        "Statistics aggregation latency in milliseconds"
    );

    describe_counter!(METRIC_ITEMS_CREATED, "Total number of work items created");
    describe_counter!(
        METRIC_ITEMS_REJECTED,
        "Total number of work item creations rejected by validation"
    );
    describe_counter!(METRIC_STORE_ERRORS, "Total number of store failures");
    describe_counter!(
        METRIC_STATS_FALLBACKS,
        "Total number of stats requests served from the fallback snapshot"
    );

    debug!("Metrics initialized");
    Ok(handle)
}

/// Record HTTP request latency for an endpoint.
pub fn record_http_latency(start: Instant, endpoint: &str) {
    let latency_ms = start.elapsed().as_secs_f64() * 1000.0;
    histogram!(METRIC_HTTP_REQUEST_LATENCY, "endpoint" => endpoint.to_string()).record(latency_ms);
}

/// Increment the items created counter.
pub fn inc_items_created() {
    counter!(METRIC_ITEMS_CREATED).increment(1);
}

/// Increment the items rejected counter.
pub fn inc_items_rejected() {
    counter!(METRIC_ITEMS_REJECTED).increment(1);
}

/// Increment the store errors counter.
pub fn inc_store_errors() {
    counter!(METRIC_STORE_ERRORS).increment(1);
}

/// Increment the stats fallback counter.
pub fn inc_stats_fallbacks() {
    counter!(METRIC_STATS_FALLBACKS).increment(1);
}

/// RAII guard for timing operations.
/// Automatically records latency when dropped.
pub struct LatencyTimer {
    start: Instant,
    metric_name: &'static str,
}

impl LatencyTimer {
    /// Create a new latency timer for the given metric.
    pub fn new(metric_name: &'static str) -> Self {
        Self {
            start: Instant::now(),
            metric_name,
        }
    }

    /// Get elapsed time in milliseconds (without recording).
    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

impl Drop for LatencyTimer {
    fn drop(&mut self) {
        let latency_ms = self.start.elapsed().as_secs_f64() * 1000.0;
        histogram!(self.metric_name).record(latency_ms);
    }
}

/// Create a latency timer for statistics aggregation.
pub fn timer_stats_aggregation() -> LatencyTimer {
    LatencyTimer::new(METRIC_STATS_AGGREGATION_LATENCY)
}
