//! Wire-level tests for the document-store HTTP adapter.

use chrono::{TimeZone, Utc};
use httpmock::prelude::*;

use dialogue_indexer::config::DatastoreConfig;
use dialogue_indexer::index::{DailyIndex, TimeChunk};
use dialogue_indexer::store::{DocumentStore, RestStore, StoreError};

fn store_for(server: &MockServer) -> RestStore {
    let config = DatastoreConfig {
        base_url: server.base_url(),
        ..DatastoreConfig::default()
    };
    RestStore::from_config(&config).expect("valid test config")
}

#[tokio::test]
async fn fetches_dialogue_logs_and_skips_malformed_rows() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/collections/articles/documents")
                .query_param("source_type", "DIALOGUE_LOG");
            then.status(200).json_body(serde_json::json!([
                {
                    "id": "a1",
                    "title": "API design session",
                    "sourceType": "DIALOGUE_LOG",
                    "createdAt": "2025-07-16T01:15:00Z"
                },
                // Missing required fields: skipped, not fatal.
                { "title": "fragment" },
                // Wrong source type: filtered out.
                {
                    "id": "n1",
                    "sourceType": "NOTE",
                    "createdAt": "2025-07-16T02:00:00Z"
                }
            ]));
        })
        .await;

    let logs = store_for(&server).dialogue_logs().await.unwrap();

    mock.assert_async().await;
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].id, "a1");
    assert_eq!(logs[0].title.as_deref(), Some("API design session"));
}

#[tokio::test]
async fn upserts_index_documents_keyed_by_date_with_merge() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(PUT)
                .path("/collections/dialogue_index/documents/2025-07-16")
                .query_param("merge", "true");
            then.status(200);
        })
        .await;

    let index = DailyIndex {
        date: Utc.with_ymd_and_hms(2025, 7, 16, 0, 0, 0).unwrap(),
        daily_summary: "Dialogue summary for 2025-07-16: 1 entry recorded.".to_string(),
        time_chunks: vec![TimeChunk {
            start_time: "09:00".to_string(),
            end_time: "11:59".to_string(),
            chunk_summary: "1 dialogue entry recorded in this window.".to_string(),
            categories: Vec::new(),
            tags: Vec::new(),
            key_moments: Vec::new(),
        }],
        updated_at: Utc.with_ymd_and_hms(2025, 7, 16, 12, 0, 0).unwrap(),
    };

    store_for(&server).upsert_daily_index(&index).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn non_success_statuses_are_errors() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/collections/articles/documents");
            then.status(500);
        })
        .await;

    let err = store_for(&server).dialogue_logs().await.unwrap_err();
    assert!(matches!(
        err,
        StoreError::Status { status, .. } if status == reqwest::StatusCode::INTERNAL_SERVER_ERROR
    ));
}
