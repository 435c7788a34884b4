//! Metrics collection and exposition.
//!
//! # Responsibilities
//! - Define service metrics (requests, upstream calls, cache traffic)
//! - Expose a Prometheus-compatible metrics endpoint on a side port
//!
//! # Metrics
//! - `pokespeare_requests_total` (counter): requests by status code
//! - `pokespeare_request_duration_seconds` (histogram): latency distribution
//! - `pokespeare_upstream_calls_total` (counter): calls by upstream name
//! - `pokespeare_cache_total` (counter): cache lookups by cache and outcome
//!
//! # Design Decisions
//! - Low-overhead metric updates (atomic operations)
//! - Recording functions never fail; a missing recorder is a no-op

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter listening on `addr`.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(err) => tracing::error!(error = %err, "Failed to install metrics exporter"),
    }
}

/// Record a completed inbound request.
pub fn record_request(status: u16, start: Instant) {
    counter!("pokespeare_requests_total", "status" => status.to_string()).increment(1);
    histogram!("pokespeare_request_duration_seconds").record(start.elapsed().as_secs_f64());
}

/// Record one outbound call to an upstream provider.
pub fn record_upstream_call(upstream: &'static str) {
    counter!("pokespeare_upstream_calls_total", "upstream" => upstream).increment(1);
}

/// Record a cache lookup outcome ("hit" or "miss").
pub fn record_cache_access(cache: &'static str, outcome: &'static str) {
    counter!("pokespeare_cache_total", "cache" => cache, "outcome" => outcome).increment(1);
}
