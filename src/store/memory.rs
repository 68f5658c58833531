//! In-memory document store for tests and local runs.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::index::model::{DailyIndex, DialogueLog, DIALOGUE_LOG_SOURCE};
use crate::store::{DocumentStore, StoreError};

/// A document store held entirely in process memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    articles: Mutex<Vec<DialogueLog>>,
    index: Mutex<BTreeMap<String, DailyIndex>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an article document.
    pub fn push_article(&self, log: DialogueLog) {
        self.articles.lock().expect("articles lock poisoned").push(log);
    }

    /// Look up the index document for a date key ("YYYY-MM-DD").
    pub fn daily_index(&self, date_key: &str) -> Option<DailyIndex> {
        self.index
            .lock()
            .expect("index lock poisoned")
            .get(date_key)
            .cloned()
    }

    /// Number of index documents written so far.
    pub fn index_len(&self) -> usize {
        self.index.lock().expect("index lock poisoned").len()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn dialogue_logs(&self) -> Result<Vec<DialogueLog>, StoreError> {
        let articles = self.articles.lock().expect("articles lock poisoned");
        Ok(articles
            .iter()
            .filter(|log| log.source_type == DIALOGUE_LOG_SOURCE)
            .cloned()
            .collect())
    }

    async fn upsert_daily_index(&self, index: &DailyIndex) -> Result<(), StoreError> {
        self.index
            .lock()
            .expect("index lock poisoned")
            .insert(index.date_key(), index.clone());
        Ok(())
    }
}
