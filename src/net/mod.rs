//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! resolved bind address (raw string)
//!     → listener.rs (parse, bind once, set non-blocking)
//!     → cloned handles, one per worker
//!     → each worker registers its clone with its own runtime
//! ```
//!
//! # Design Decisions
//! - The socket is bound exactly once, before workers start
//! - Address parse failure and OS bind failure are both fatal; parsing
//!   happens here and nowhere earlier, so a malformed PORT value from the
//!   environment surfaces as a bind failure

pub mod listener;

pub use listener::{bind, ListenError};
