//! System and health endpoints.

use axum::extract::{Json, State};
use axum::response::IntoResponse;

use crate::state::AppState;

use super::types::HealthResponse;

/// Check server health.
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.uptime_secs(),
    })
}
