//! Document store subsystem.
//!
//! # Data Flow
//! ```text
//! IndexBuilder
//!     → DocumentStore (port)
//!         → rest.rs   (document-store HTTP API, production)
//!         → memory.rs (in-memory, tests and local runs)
//! ```
//!
//! # Design Decisions
//! - The builder depends on the port, never on an adapter
//! - Fetching returns only dialogue logs; the source-type filter is the
//!   store's responsibility
//! - Upserts use merge semantics keyed by the index date

use async_trait::async_trait;
use thiserror::Error;

use crate::index::model::{DailyIndex, DialogueLog};

pub mod memory;
pub mod rest;

pub use memory::MemoryStore;
pub use rest::RestStore;

/// Error type for document-store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("datastore request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("datastore returned {status} for {context}")]
    Status {
        status: reqwest::StatusCode,
        context: String,
    },

    #[error("invalid datastore base URL: {0}")]
    BaseUrl(#[from] url::ParseError),
}

/// Port over the document store holding articles and the dialogue index.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetch every article with source type `DIALOGUE_LOG`.
    async fn dialogue_logs(&self) -> Result<Vec<DialogueLog>, StoreError>;

    /// Upsert one daily index document, keyed by its date, merging into
    /// any existing document for that date.
    async fn upsert_daily_index(&self, index: &DailyIndex) -> Result<(), StoreError>;
}
