//! Request handlers for the index_builder application.

use std::time::Instant;

use axum::extract::State;
use axum::Json;
use uuid::Uuid;

use crate::http::response::{ApiError, BuildResponse, HealthResponse};
use crate::http::server::AppState;
use crate::index::IndexBuilder;
use crate::observability::metrics;

/// `POST /` — rebuild the dialogue index.
///
/// Every dialogue log in the store is re-grouped and every affected daily
/// index document rewritten. Errors are logged and surfaced as an opaque
/// 500 envelope; details never leak to the caller.
pub async fn build_index(State(state): State<AppState>) -> Result<Json<BuildResponse>, ApiError> {
    let started = Instant::now();
    let build_id = Uuid::new_v4();

    tracing::info!(build_id = %build_id, "Dialogue index build started");

    let builder = IndexBuilder::new(state.store.clone());
    match builder.run().await {
        Ok(report) => {
            tracing::info!(
                build_id = %build_id,
                days_updated = report.days_updated,
                logs_indexed = report.logs_indexed,
                logs_skipped = report.logs_skipped,
                elapsed_ms = started.elapsed().as_millis() as u64,
                "Dialogue index build finished"
            );
            metrics::record_request("build_index", 200, started);
            metrics::record_documents_written(report.days_updated);
            Ok(Json(BuildResponse::success(&report)))
        }
        Err(err) => {
            tracing::error!(build_id = %build_id, error = %err, "Dialogue index build failed");
            metrics::record_request("build_index", 500, started);
            Err(ApiError::Internal)
        }
    }
}

/// `GET /health` — liveness probe.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
