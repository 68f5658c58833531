//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the
//! service. All types derive Serde traits for deserialization from the
//! optional TOML config file; CLI flags and the `PORT` environment
//! variable overlay the file in `loader`.

use serde::{Deserialize, Serialize};

/// Default TCP port when neither `--bind` nor `PORT` is supplied.
pub const DEFAULT_PORT: u16 = 8080;

/// Default number of worker runtimes. Fixed, never derived from core count.
pub const DEFAULT_WORKERS: usize = 3;

/// Default per-request timeout in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 120;

/// Default application entry point served when none is named on the CLI.
pub const DEFAULT_APP_ENTRY: &str = "index_builder";

/// Root configuration for the service.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ServiceConfig {
    /// Listener configuration (bind address, limits).
    pub listener: ListenerConfig,

    /// Server process settings (workers, timeout, entry point).
    pub server: ServerConfig,

    /// Document store connection settings.
    pub datastore: DatastoreConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    ///
    /// Stored unparsed: a malformed port from the environment is carried
    /// through and fails at bind time.
    pub bind_address: String,

    /// Maximum in-flight requests across all workers (backpressure).
    pub max_concurrent_requests: usize,

    /// Maximum request body size in bytes.
    pub max_body_bytes: usize,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: format!("0.0.0.0:{DEFAULT_PORT}"),
            max_concurrent_requests: 1_024,
            max_body_bytes: 2 * 1024 * 1024,
        }
    }
}

/// Server process settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Number of worker runtimes accepting requests in parallel.
    pub workers: usize,

    /// Per-request timeout in seconds. Requests exceeding it are aborted.
    pub request_timeout_secs: u64,

    /// Name of the application entry point to serve.
    pub app_entry: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            workers: DEFAULT_WORKERS,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            app_entry: DEFAULT_APP_ENTRY.to_string(),
        }
    }
}

/// Document store connection settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DatastoreConfig {
    /// Base URL of the document-store HTTP API.
    pub base_url: String,

    /// Collection holding the raw article documents.
    pub articles_collection: String,

    /// Collection receiving the per-day index documents.
    pub index_collection: String,

    /// Connection establishment timeout in seconds.
    pub connect_timeout_secs: u64,

    /// Per-request timeout towards the store in seconds.
    pub request_timeout_secs: u64,
}

impl Default for DatastoreConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8086".to_string(),
            articles_collection: "articles".to_string(),
            index_collection: "dialogue_index".to_string(),
            connect_timeout_secs: 5,
            request_timeout_secs: 30,
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable output for local runs.
    #[default]
    Pretty,
    /// One JSON object per event for log aggregation.
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Log output format.
    pub log_format: LogFormat,

    /// Write each log event straight to stdout with no intermediate
    /// buffering. The hosting environment expects immediate flushes.
    pub unbuffered_output: bool,

    /// Enable the Prometheus metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::default(),
            unbuffered_output: true,
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
