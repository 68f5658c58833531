//! Document-store HTTP adapter.
//!
//! Talks to the memory library's document-store API:
//! - `GET  {base}/collections/{articles}/documents?source_type=DIALOGUE_LOG`
//! - `PUT  {base}/collections/{index}/documents/{date}?merge=true`
//!
//! Rows that fail to decode are skipped with a warning rather than
//! failing the whole batch; legacy article documents are not uniformly
//! shaped.

use std::time::Duration;

use async_trait::async_trait;
use url::Url;

use crate::config::DatastoreConfig;
use crate::index::model::{DailyIndex, DialogueLog, DIALOGUE_LOG_SOURCE};
use crate::store::{DocumentStore, StoreError};

/// Client for the document-store HTTP API.
#[derive(Debug)]
pub struct RestStore {
    client: reqwest::Client,
    base: String,
    articles_collection: String,
    index_collection: String,
}

impl RestStore {
    /// Build a client from configuration. The base URL is validated here
    /// so a malformed value fails at startup, not on the first request.
    pub fn from_config(config: &DatastoreConfig) -> Result<Self, StoreError> {
        Url::parse(&config.base_url)?;

        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base: config.base_url.trim_end_matches('/').to_string(),
            articles_collection: config.articles_collection.clone(),
            index_collection: config.index_collection.clone(),
        })
    }
}

#[async_trait]
impl DocumentStore for RestStore {
    async fn dialogue_logs(&self) -> Result<Vec<DialogueLog>, StoreError> {
        let url = format!(
            "{}/collections/{}/documents",
            self.base, self.articles_collection
        );
        let response = self
            .client
            .get(&url)
            .query(&[("source_type", DIALOGUE_LOG_SOURCE)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(StoreError::Status {
                status: response.status(),
                context: format!("GET {url}"),
            });
        }

        let rows: Vec<serde_json::Value> = response.json().await?;
        let mut logs = Vec::with_capacity(rows.len());
        for row in rows {
            match serde_json::from_value::<DialogueLog>(row) {
                // The server already filters; re-check in case it ignores
                // the query parameter.
                Ok(log) if log.source_type == DIALOGUE_LOG_SOURCE => logs.push(log),
                Ok(log) => {
                    tracing::debug!(id = %log.id, source_type = %log.source_type, "Ignoring non-dialogue article");
                }
                Err(err) => {
                    tracing::warn!(error = %err, "Skipping malformed article document");
                }
            }
        }

        Ok(logs)
    }

    async fn upsert_daily_index(&self, index: &DailyIndex) -> Result<(), StoreError> {
        let url = format!(
            "{}/collections/{}/documents/{}",
            self.base,
            self.index_collection,
            index.date_key()
        );
        let response = self
            .client
            .put(&url)
            .query(&[("merge", "true")])
            .json(index)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(StoreError::Status {
                status: response.status(),
                context: format!("PUT {url}"),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(base_url: &str) -> DatastoreConfig {
        DatastoreConfig {
            base_url: base_url.to_string(),
            ..DatastoreConfig::default()
        }
    }

    #[test]
    fn rejects_malformed_base_url() {
        let err = RestStore::from_config(&config("not a url")).unwrap_err();
        assert!(matches!(err, StoreError::BaseUrl(_)));
    }

    #[test]
    fn trims_trailing_slash_from_base_url() {
        let store = RestStore::from_config(&config("http://store.internal:8086/")).unwrap();
        assert_eq!(store.base, "http://store.internal:8086");
    }
}
