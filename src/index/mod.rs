//! Dialogue index domain.
//!
//! # Data Flow
//! ```text
//! dialogue logs (articles collection)
//!     → builder.rs (group by JST calendar date)
//!     → per date: daily summary + 3-hour time chunks + key moments
//!     → DailyIndex documents (model.rs)
//!     → upserted into the dialogue_index collection, keyed by date
//! ```
//!
//! # Design Decisions
//! - Dates are taken in JST (UTC+9), the timezone the dialogues happen in
//! - Logs without a creation timestamp are skipped, never guessed
//! - Output is deterministic: dates ascend, logs within a day are ordered
//!   by timestamp before chunking

pub mod builder;
pub mod model;

pub use builder::{BuildReport, IndexBuilder};
pub use model::{DailyIndex, DialogueLog, KeyMoment, TimeChunk, DIALOGUE_LOG_SOURCE};
