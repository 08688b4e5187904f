//! API Route Modules
//!
//! # Structure
//!
//! - [`auth`] - signup, login, current account
//! - [`workers`] - hospital worker records
//! - [`staff`] - hospital staff records
//! - [`alerts`] - public health alert feed
//! - [`health`] - liveness probe

pub mod alerts;
pub mod auth;
pub mod health;
pub mod staff;
pub mod workers;

use axum::Router;
use axum::middleware as axum_middleware;
use http::{HeaderName, HeaderValue};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::auth::require_auth;
use crate::core::ServerState;

/// Custom request ID generator
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// HTTP access log middleware
async fn log_request(
    request: http::Request<axum::body::Body>,
    next: axum_middleware::Next,
) -> http::Response<axum::body::Body> {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    let status = response.status();

    tracing::info!(target: "http_access", "{} {} {}", method, uri, status);

    response
}

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        // Auth API - signup/login public, me authenticated
        .merge(auth::router())
        // Hospital management APIs - hospital role required
        .merge(workers::router())
        .merge(staff::router())
        // Public routes
        .merge(alerts::router())
        .merge(health::router())
}

/// Build the fully configured application with middleware and state.
///
/// Used by the HTTP server and by tests driving the router directly.
pub fn build_app(state: ServerState) -> Router {
    build_router()
        // JWT authentication, skips the public routes internally
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            require_auth,
        ))
        .with_state(state)
        // ========== Tower HTTP Middleware ==========
        // CORS - handle cross-origin requests
        .layer(CorsLayer::permissive())
        // Compression - gzip responses
        .layer(CompressionLayer::new())
        // Access logging
        .layer(axum_middleware::from_fn(log_request))
        // Trace - request tracing (logs at INFO level)
        .layer(TraceLayer::new_for_http())
        // Request ID - propagate sits inside set so it sees the generated ID
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            "x-request-id",
        )))
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static("x-request-id"),
            XRequestId,
        ))
}
