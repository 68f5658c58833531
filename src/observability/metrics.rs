//! Metrics collection and exposition.
//!
//! # Metrics
//! - `indexer_requests_total` (counter): requests by endpoint and status
//! - `indexer_request_duration_seconds` (histogram): request latency
//! - `indexer_index_documents_written_total` (counter): daily index
//!   documents upserted
//!
//! # Design Decisions
//! - The exporter is optional; recording against no exporter is a no-op
//! - Exporter setup failures are logged and the service keeps running

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

use crate::config::ObservabilityConfig;

/// Install the Prometheus exporter if metrics are enabled.
pub fn init(config: &ObservabilityConfig) {
    if !config.metrics_enabled {
        return;
    }

    let addr: SocketAddr = match config.metrics_address.parse() {
        Ok(addr) => addr,
        Err(_) => {
            tracing::error!(
                metrics_address = %config.metrics_address,
                "Failed to parse metrics address"
            );
            return;
        }
    };

    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(err) => tracing::error!(error = %err, "Failed to install metrics exporter"),
    }
}

/// Record one handled request.
pub fn record_request(endpoint: &str, status: u16, started: Instant) {
    counter!(
        "indexer_requests_total",
        "endpoint" => endpoint.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
    histogram!(
        "indexer_request_duration_seconds",
        "endpoint" => endpoint.to_string()
    )
    .record(started.elapsed().as_secs_f64());
}

/// Record daily index documents written by a build.
pub fn record_documents_written(count: usize) {
    counter!("indexer_index_documents_written_total").increment(count as u64);
}
