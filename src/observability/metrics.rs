//! Metrics collection and exposition.
//!
//! # Metrics
//! - `prerender_classifications_total` (counter): viewer decisions by `decision`
//! - `prerender_render_requests_total` (counter): render calls by `outcome`
//! - `prerender_render_duration_seconds` (histogram): render call latency
//!
//! Recording is a no-op until a recorder is installed, so library callers
//! and tests pay nothing.

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus recorder with a scrape listener on `addr`.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

pub fn record_classification(should_render: bool) {
    let decision = if should_render { "render" } else { "pass" };
    metrics::counter!("prerender_classifications_total", "decision" => decision).increment(1);
}

/// Record one render call. `outcome` is `rendered`, `rejected`,
/// `unreachable` or `malformed`.
pub fn record_render(outcome: &'static str, start: Instant) {
    metrics::counter!("prerender_render_requests_total", "outcome" => outcome).increment(1);
    metrics::histogram!("prerender_render_duration_seconds", "outcome" => outcome)
        .record(start.elapsed().as_secs_f64());
}
