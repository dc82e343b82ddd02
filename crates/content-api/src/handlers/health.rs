//! Health check handlers
//!
//! Endpoints for liveness and readiness probes.

use axum::{extract::State, http::StatusCode, Json};
use content_service::{HealthResponse, ReadinessResponse};

use crate::state::AppState;

/// Basic health check (liveness probe)
///
/// GET /health
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: state.config().app.name.clone(),
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Readiness check with store health
///
/// GET /health/ready
pub async fn readiness_check(
    State(state): State<AppState>,
) -> (StatusCode, Json<ReadinessResponse>) {
    let store = state.service_context().store();

    // Running without a store is a valid deployment; content requests
    // report it per call.
    if !store.is_configured() {
        return (
            StatusCode::OK,
            Json(ReadinessResponse {
                status: "ready",
                database: "not_configured",
            }),
        );
    }

    match store.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(ReadinessResponse {
                status: "ready",
                database: "ok",
            }),
        ),
        Err(_) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ReadinessResponse {
                status: "not_ready",
                database: "unreachable",
            }),
        ),
    }
}
