//! Health Alert Feed
//!
//! Static advisory feed shown on hospital dashboards. Public route; the
//! entries are fixed until a real alert source exists.

use axum::{Json, Router, routing::get};
use serde::Serialize;

use crate::core::ServerState;

/// Alert feed router, public route (no auth)
pub fn router() -> Router<ServerState> {
    Router::new().route("/api/hospital/alerts", get(alerts))
}

#[derive(Debug, Clone, Serialize)]
pub struct Alert {
    pub id: u32,
    pub title: &'static str,
    pub date: &'static str,
    pub severity: &'static str,
    pub content: &'static str,
}

/// The fixed two-entry advisory feed
pub async fn alerts() -> Json<Vec<Alert>> {
    Json(vec![
        Alert {
            id: 1,
            title: "High Fever Cluster",
            date: "2025-09-16",
            severity: "Urgent",
            content: "Screen for high fever...",
        },
        Alert {
            id: 2,
            title: "Vaccination Drive",
            date: "2025-09-15",
            severity: "Informational",
            content: "New shipment arrived.",
        },
    ])
}
