//! Service entry point.
//!
//! Bring the process from launch to listening with no application logic
//! of its own: resolve configuration, resolve the named application entry
//! point, bind the listener, and fan out a fixed number of workers. Every
//! failure on this path is fatal and exits non-zero.

use std::sync::Arc;

use clap::Parser;

use dialogue_indexer::app::registry;
use dialogue_indexer::config::{loader, Cli};
use dialogue_indexer::http::{self, AppState};
use dialogue_indexer::lifecycle::{signals, Shutdown, WorkerSet};
use dialogue_indexer::net;
use dialogue_indexer::observability::{logging, metrics};
use dialogue_indexer::store::{DocumentStore, RestStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = loader::resolve(&cli)?;

    logging::init(&config.observability);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "dialogue-indexer starting"
    );
    tracing::info!(
        bind_address = %config.listener.bind_address,
        workers = config.server.workers,
        request_timeout_secs = config.server.request_timeout_secs,
        app = %config.server.app_entry,
        "Configuration resolved"
    );

    // The entry point must resolve before any socket is bound.
    let factory = registry::resolve(&config.server.app_entry)?;

    let store: Arc<dyn DocumentStore> = Arc::new(RestStore::from_config(&config.datastore)?);
    let state = AppState::new(store);
    let app = http::apply_middleware(factory(state), &config);

    metrics::init(&config.observability);

    let listener = net::bind(&config.listener)?;

    let shutdown = Shutdown::new();
    let workers = WorkerSet::spawn(listener, app, config.server.workers, &shutdown)?;
    tracing::info!(workers = workers.count(), "Workers started");

    signals::shutdown_signal().await;
    shutdown.trigger();

    tokio::task::spawn_blocking(move || workers.join()).await??;

    tracing::info!("Shutdown complete");
    Ok(())
}
