//! Shared utilities for integration testing.

use std::net::SocketAddr;

use axum::Router;
use chrono::{DateTime, Utc};

use dialogue_indexer::config::ServiceConfig;
use dialogue_indexer::index::{DialogueLog, DIALOGUE_LOG_SOURCE};
use dialogue_indexer::lifecycle::{Shutdown, WorkerSet};
use dialogue_indexer::net;

/// Config bound to an ephemeral localhost port with the given timeout.
#[allow(dead_code)]
pub fn test_config(request_timeout_secs: u64) -> ServiceConfig {
    let mut config = ServiceConfig::default();
    config.listener.bind_address = "127.0.0.1:0".to_string();
    config.server.request_timeout_secs = request_timeout_secs;
    config.observability.metrics_enabled = false;
    config
}

/// A dialogue-log article document.
#[allow(dead_code)]
pub fn dialogue_log(
    id: &str,
    title: Option<&str>,
    created_at: Option<DateTime<Utc>>,
) -> DialogueLog {
    DialogueLog {
        id: id.to_string(),
        title: title.map(str::to_string),
        source_type: DIALOGUE_LOG_SOURCE.to_string(),
        created_at,
        categories: Vec::new(),
        tags: Vec::new(),
    }
}

/// Bind an ephemeral listener and spawn the configured worker set for it.
#[allow(dead_code)]
pub fn start_service(app: Router, config: &ServiceConfig) -> (SocketAddr, Shutdown, WorkerSet) {
    let listener = net::bind(&config.listener).expect("bind test listener");
    let addr = listener.local_addr().expect("listener local addr");
    let shutdown = Shutdown::new();
    let workers =
        WorkerSet::spawn(listener, app, config.server.workers, &shutdown).expect("spawn workers");
    (addr, shutdown, workers)
}
