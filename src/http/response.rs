//! Response envelopes and error mapping.
//!
//! # Responsibilities
//! - Define the JSON envelopes handlers return
//! - Map internal errors to an opaque 500 response
//!
//! # Design Decisions
//! - Error responses never carry internal detail; the detail is logged
//!   with the request ID instead

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::index::BuildReport;

/// Envelope for a successful index build.
#[derive(Debug, Serialize, Deserialize)]
pub struct BuildResponse {
    pub status: String,
    pub message: String,
    pub days_updated: usize,
}

impl BuildResponse {
    pub fn success(report: &BuildReport) -> Self {
        let noun = if report.days_updated == 1 { "day" } else { "days" };
        Self {
            status: "success".to_string(),
            message: format!(
                "Updated the dialogue index for {count} {noun}.",
                count = report.days_updated
            ),
            days_updated: report.days_updated,
        }
    }
}

/// Envelope for the liveness probe.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

/// Handler-level error. Always rendered as an opaque envelope.
#[derive(Debug)]
pub enum ApiError {
    Internal,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({
                    "status": "error",
                    "message": "Internal Server Error",
                })),
            )
                .into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_response_message_counts_days() {
        let response = BuildResponse::success(&BuildReport {
            days_updated: 1,
            logs_indexed: 4,
            logs_skipped: 0,
        });
        assert_eq!(response.status, "success");
        assert_eq!(response.message, "Updated the dialogue index for 1 day.");
    }

    #[test]
    fn internal_error_renders_opaque_500() {
        let response = ApiError::Internal.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
