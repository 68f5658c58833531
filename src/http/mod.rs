//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection (one worker's listener clone)
//!     → server.rs (middleware: request ID, trace, timeout, limits)
//!     → handlers.rs (index build trigger, health probe)
//!     → response.rs (JSON envelopes, opaque error mapping)
//! ```

pub mod handlers;
pub mod response;
pub mod server;

pub use server::{apply_middleware, index_builder_app, serve, AppState};
