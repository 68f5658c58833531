//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured tracing events)
//!     → metrics.rs (request counters, durations, documents written)
//!
//! Consumers:
//!     → stdout (pretty for local runs, JSON for aggregation)
//!     → Prometheus scrape endpoint (optional)
//! ```
//!
//! # Design Decisions
//! - Log output flushes per event by default; the hosting environment
//!   reads the stream live
//! - Metrics failures are logged, never fatal; the service runs fine
//!   without an exporter

pub mod logging;
pub mod metrics;
