//! Health check endpoint.

use axum::Json;

use crate::models::HealthResponse;

/// `GET /api/health` — static liveness probe.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".into(),
        message: "chartbox API is running".into(),
    })
}
