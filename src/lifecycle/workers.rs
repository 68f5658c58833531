//! Worker fan-out.
//!
//! # Responsibilities
//! - Spawn exactly the configured number of workers, no more, no fewer
//! - Give each worker its own single-threaded runtime and listener clone
//! - Join workers at shutdown and propagate the first failure
//!
//! # Design Decisions
//! - The worker count comes from configuration only; it is never derived
//!   from the host's core count
//! - Workers share the kernel accept queue through cloned sockets; there
//!   is no userspace dispatcher between them

use std::net::TcpListener as StdTcpListener;
use std::thread::JoinHandle;

use axum::Router;
use tokio::net::TcpListener;

use crate::http;
use crate::lifecycle::shutdown::Shutdown;

/// Error type for worker lifecycle failures.
#[derive(Debug)]
pub enum WorkerError {
    /// A worker's runtime or serve loop failed.
    Runtime {
        worker: usize,
        source: std::io::Error,
    },
    /// A worker thread panicked.
    Panicked { worker: usize },
}

impl std::fmt::Display for WorkerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WorkerError::Runtime { worker, source } => {
                write!(f, "worker {} failed: {}", worker, source)
            }
            WorkerError::Panicked { worker } => write!(f, "worker {} panicked", worker),
        }
    }
}

impl std::error::Error for WorkerError {}

/// A fixed set of running workers.
pub struct WorkerSet {
    handles: Vec<(usize, JoinHandle<std::io::Result<()>>)>,
}

impl WorkerSet {
    /// Spawn `count` workers serving clones of `listener` with clones of
    /// `app`. Each worker subscribes to `shutdown` before it starts.
    pub fn spawn(
        listener: StdTcpListener,
        app: Router,
        count: usize,
        shutdown: &Shutdown,
    ) -> std::io::Result<Self> {
        let mut handles = Vec::with_capacity(count);

        for id in 0..count {
            let listener = listener.try_clone()?;
            let app = app.clone();
            let shutdown_rx = shutdown.subscribe();

            let handle = std::thread::Builder::new()
                .name(format!("worker-{id}"))
                .spawn(move || -> std::io::Result<()> {
                    let runtime = tokio::runtime::Builder::new_current_thread()
                        .enable_all()
                        .build()?;

                    runtime.block_on(async move {
                        let listener = TcpListener::from_std(listener)?;
                        tracing::info!(worker = id, "Worker accepting requests");
                        http::serve(listener, app, shutdown_rx).await
                    })
                })?;

            handles.push((id, handle));
        }

        Ok(Self { handles })
    }

    /// Number of running workers.
    pub fn count(&self) -> usize {
        self.handles.len()
    }

    /// Join every worker, returning the first failure if any occurred.
    pub fn join(self) -> Result<(), WorkerError> {
        let mut first_error = None;

        for (id, handle) in self.handles {
            match handle.join() {
                Ok(Ok(())) => tracing::debug!(worker = id, "Worker exited cleanly"),
                Ok(Err(source)) => {
                    tracing::error!(worker = id, error = %source, "Worker exited with error");
                    if first_error.is_none() {
                        first_error = Some(WorkerError::Runtime { worker: id, source });
                    }
                }
                Err(_) => {
                    tracing::error!(worker = id, "Worker panicked");
                    if first_error.is_none() {
                        first_error = Some(WorkerError::Panicked { worker: id });
                    }
                }
            }
        }

        match first_error {
            None => Ok(()),
            Some(err) => Err(err),
        }
    }
}
