//! End-to-end tests for the index service: worker fan-out, the build
//! endpoint, timeout enforcement, and error rendering.

use std::sync::Arc;

use async_trait::async_trait;
use axum::routing::get;
use axum::Router;
use chrono::{TimeZone, Utc};

use dialogue_indexer::http::{apply_middleware, index_builder_app, AppState};
use dialogue_indexer::index::{DailyIndex, DialogueLog};
use dialogue_indexer::store::{DocumentStore, MemoryStore, StoreError};

mod common;

/// A store whose reads always fail, for exercising the error path.
struct FailingStore;

#[async_trait]
impl DocumentStore for FailingStore {
    async fn dialogue_logs(&self) -> Result<Vec<DialogueLog>, StoreError> {
        Err(StoreError::Status {
            status: reqwest::StatusCode::SERVICE_UNAVAILABLE,
            context: "GET http://store.internal/collections/articles/documents".to_string(),
        })
    }

    async fn upsert_daily_index(&self, _index: &DailyIndex) -> Result<(), StoreError> {
        Ok(())
    }
}

#[tokio::test]
async fn build_endpoint_writes_one_index_document_per_jst_date() {
    let store = Arc::new(MemoryStore::new());
    // 01:00 UTC on the 16th is 10:00 JST the same day; 20:00 UTC is
    // 05:00 JST on the 17th. One log has no timestamp and is skipped.
    store.push_article(common::dialogue_log(
        "a",
        Some("Backend design"),
        Some(Utc.with_ymd_and_hms(2025, 7, 16, 1, 0, 0).unwrap()),
    ));
    store.push_article(common::dialogue_log(
        "b",
        None,
        Some(Utc.with_ymd_and_hms(2025, 7, 16, 20, 0, 0).unwrap()),
    ));
    store.push_article(common::dialogue_log("c", None, None));

    let config = common::test_config(120);
    let app = apply_middleware(index_builder_app(AppState::new(store.clone())), &config);
    let (addr, shutdown, _workers) = common::start_service(app, &config);

    let client = reqwest::Client::new();
    let response = client
        .post(format!("http://{addr}/"))
        .send()
        .await
        .expect("service unreachable");

    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["status"], "success");
    assert_eq!(body["days_updated"], 2);

    assert_eq!(store.index_len(), 2);
    let day_one = store.daily_index("2025-07-16").expect("index for the 16th");
    assert_eq!(
        day_one.daily_summary,
        "Dialogue summary for 2025-07-16: 1 entry recorded."
    );
    assert_eq!(day_one.time_chunks.len(), 1);
    assert_eq!(day_one.time_chunks[0].start_time, "09:00");
    assert!(store.daily_index("2025-07-17").is_some());

    shutdown.trigger();
}

#[tokio::test]
async fn health_endpoint_reports_ok() {
    let store = Arc::new(MemoryStore::new());
    let config = common::test_config(120);
    let app = apply_middleware(index_builder_app(AppState::new(store)), &config);
    let (addr, shutdown, _workers) = common::start_service(app, &config);

    let response = reqwest::get(format!("http://{addr}/health"))
        .await
        .expect("service unreachable");
    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["status"], "ok");

    shutdown.trigger();
}

#[tokio::test]
async fn store_failures_render_an_opaque_500() {
    let config = common::test_config(120);
    let app = apply_middleware(index_builder_app(AppState::new(Arc::new(FailingStore))), &config);
    let (addr, shutdown, _workers) = common::start_service(app, &config);

    let client = reqwest::Client::new();
    let response = client
        .post(format!("http://{addr}/"))
        .send()
        .await
        .expect("service unreachable");

    assert_eq!(response.status(), 500);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["status"], "error");
    assert_eq!(body["message"], "Internal Server Error");

    shutdown.trigger();
}

#[tokio::test]
async fn exactly_the_configured_number_of_workers_starts() {
    let store = Arc::new(MemoryStore::new());
    let config = common::test_config(120);
    assert_eq!(config.server.workers, 3);

    let app = apply_middleware(index_builder_app(AppState::new(store)), &config);
    let (_addr, shutdown, workers) = common::start_service(app, &config);

    assert_eq!(workers.count(), 3);

    // With no connections open, shutdown drains immediately and every
    // worker joins cleanly.
    shutdown.trigger();
    workers.join().expect("workers exit cleanly");
}

#[tokio::test]
async fn requests_exceeding_the_timeout_are_aborted() {
    let config = common::test_config(1);
    let app = apply_middleware(
        Router::new()
            .route(
                "/slow",
                get(|| async {
                    tokio::time::sleep(std::time::Duration::from_secs(3)).await;
                    "late"
                }),
            )
            .route("/fast", get(|| async { "ok" })),
        &config,
    );
    let (addr, shutdown, _workers) = common::start_service(app, &config);

    let client = reqwest::Client::new();

    let fast = client
        .get(format!("http://{addr}/fast"))
        .send()
        .await
        .expect("service unreachable");
    assert_eq!(fast.status(), 200);

    let slow = client
        .get(format!("http://{addr}/slow"))
        .send()
        .await
        .expect("service unreachable");
    assert_eq!(slow.status(), 408);

    shutdown.trigger();
}

#[tokio::test]
async fn concurrent_requests_are_served_across_workers() {
    let store = Arc::new(MemoryStore::new());
    store.push_article(common::dialogue_log(
        "a",
        None,
        Some(Utc.with_ymd_and_hms(2025, 7, 16, 1, 0, 0).unwrap()),
    ));

    let config = common::test_config(120);
    let app = apply_middleware(index_builder_app(AppState::new(store)), &config);
    let (addr, shutdown, _workers) = common::start_service(app, &config);

    let client = reqwest::Client::new();
    let mut tasks = Vec::new();
    for _ in 0..12 {
        let client = client.clone();
        tasks.push(tokio::spawn(async move {
            client
                .get(format!("http://{addr}/health"))
                .send()
                .await
                .expect("service unreachable")
                .status()
        }));
    }
    for task in tasks {
        assert_eq!(task.await.unwrap(), 200);
    }

    shutdown.trigger();
}
