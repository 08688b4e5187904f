//! Staff Records API Module

mod handler;

use axum::{Router, middleware, routing::get, routing::put};

use crate::auth::require_hospital;
use crate::core::ServerState;

/// Staff router, hospital role required on every route
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/hospital/staff", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/{id}", put(handler::update).delete(handler::delete))
        .layer(middleware::from_fn(require_hospital))
}
