//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main):
//!     Resolve config → Resolve entry point → Bind listener → Spawn workers
//!
//! Shutdown:
//!     SIGINT/SIGTERM (signals.rs)
//!         → Shutdown broadcast (shutdown.rs)
//!         → each worker drains in-flight requests and exits
//!         → master joins workers, propagates the first failure
//! ```
//!
//! # Design Decisions
//! - The process has exactly three states: not started, started, exited
//! - Any startup failure is fatal; there is no retry or partial start
//! - Worker failures surface as a non-zero process exit

pub mod shutdown;
pub mod signals;
pub mod workers;

pub use shutdown::Shutdown;
pub use workers::{WorkerError, WorkerSet};
