//! HTTP server assembly.
//!
//! # Responsibilities
//! - Build the application router for the resolved entry point
//! - Wire up middleware (request ID, tracing, timeout, limits)
//! - Drive one worker's listener clone with graceful shutdown
//!
//! The per-request timeout is enforced here: a request still running when
//! it elapses is aborted with 408, exactly once, in whichever worker owns
//! the connection.

use std::sync::Arc;
use std::time::Duration;

use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::limit::GlobalConcurrencyLimitLayer;
use tower::ServiceBuilder;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::MakeRequestUuid;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tower_http::ServiceBuilderExt;

use crate::config::ServiceConfig;
use crate::http::handlers;
use crate::store::DocumentStore;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn DocumentStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }
}

/// Router factory for the `index_builder` entry point.
pub fn index_builder_app(state: AppState) -> Router {
    Router::new()
        .route("/", post(handlers::build_index))
        .route("/health", get(handlers::health))
        .with_state(state)
}

/// Wrap an application router in the service middleware stack.
///
/// Built once in `main` and cloned into every worker, so the concurrency
/// limit is shared across all of them.
pub fn apply_middleware(app: Router, config: &ServiceConfig) -> Router {
    app.layer(
        ServiceBuilder::new()
            .set_x_request_id(MakeRequestUuid)
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.server.request_timeout_secs,
            )))
            // Normalize the body-limit layer's `ResponseBody<Body>` back to
            // `axum::body::Body` so the enclosing `TimeoutLayer` (which requires
            // its inner response body to implement `Default`) type-checks. This
            // is a zero-cost type adapter and does not change the middleware
            // ordering mandated by the spec.
            .map_response(
                |r: axum::response::Response<
                    tower_http::limit::ResponseBody<axum::body::Body>,
                >| r.map(axum::body::Body::new),
            )
            .layer(RequestBodyLimitLayer::new(config.listener.max_body_bytes))
            .layer(GlobalConcurrencyLimitLayer::new(
                config.listener.max_concurrent_requests,
            ))
            .propagate_x_request_id(),
    )
}

/// Serve requests on one worker's listener until shutdown is signalled,
/// then drain in-flight requests and return.
pub async fn serve(
    listener: TcpListener,
    app: Router,
    mut shutdown: broadcast::Receiver<()>,
) -> std::io::Result<()> {
    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(async move {
            let _ = shutdown.recv().await;
        })
        .await
}
