//! Dialogue Index Service
//!
//! A multi-worker HTTP service that builds the dialogue index for the
//! memory library: on request it reads dialogue-log articles from the
//! document store, groups them by calendar date in JST, and writes one
//! searchable index document per day.
//!
//! # Architecture Overview
//!
//! ```text
//!                   ┌──────────────────────────────────────────────────┐
//!                   │                DIALOGUE INDEXER                   │
//!                   │                                                   │
//!   POST / ─────────┼─▶ net (shared listener, fixed worker fan-out)    │
//!                   │        │                                          │
//!                   │        ▼                                          │
//!                   │   http (middleware: request ID, trace, timeout,   │
//!                   │         body limit, concurrency limit)            │
//!                   │        │                                          │
//!                   │        ▼                                          │
//!                   │   index builder ────▶ store (document store)      │
//!                   │   (JST grouping,       GET  articles              │
//!                   │    daily summaries,    PUT  dialogue_index/{day}) │
//!                   │    time chunks)                                   │
//!                   │                                                   │
//!                   │  ┌─────────────────────────────────────────────┐ │
//!                   │  │           Cross-Cutting Concerns             │ │
//!                   │  │  config      lifecycle       observability   │ │
//!                   │  │  (env+file)  (workers,       (logging,       │ │
//!                   │  │              shutdown)        metrics)       │ │
//!                   │  └─────────────────────────────────────────────┘ │
//!                   └──────────────────────────────────────────────────┘
//! ```
//!
//! Startup is fail-fast: configuration, entry-point resolution, datastore
//! client construction, and the listener bind all abort the process with a
//! non-zero exit on error. The worker count and per-request timeout are
//! resolved once at startup and never change for the lifetime of the
//! process.

// Core subsystems
pub mod app;
pub mod config;
pub mod http;
pub mod index;
pub mod net;
pub mod store;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::{Cli, ServiceConfig};
pub use http::AppState;
pub use lifecycle::Shutdown;
