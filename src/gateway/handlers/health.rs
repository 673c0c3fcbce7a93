//! Health check handler

use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;
use utoipa::ToSchema;

use super::super::state::AppState;

/// Health check response data
#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "ok")]
    pub status: &'static str,
    /// Short git hash embedded at build time
    #[schema(example = "a1b2c3d")]
    pub version: &'static str,
}

/// Health check endpoint
///
/// Pings the store and reports the build version.
///
/// - Healthy: 200 OK + {"status": "ok", "version": ...}
/// - Unhealthy: 503 Service Unavailable
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Service healthy", body = HealthResponse),
        (status = 503, description = "Service unavailable")
    ),
    tag = "System"
)]
pub async fn health_check(
    State(state): State<AppState>,
) -> (StatusCode, Json<HealthResponse>) {
    let status = match state.db.health_check().await {
        Ok(()) => StatusCode::OK,
        Err(e) => {
            tracing::error!("health check failed: {}", e);
            StatusCode::SERVICE_UNAVAILABLE
        }
    };

    let body = HealthResponse {
        status: if status == StatusCode::OK { "ok" } else { "unavailable" },
        version: env!("GIT_HASH"),
    };
    (status, Json(body))
}
