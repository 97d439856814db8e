//! Liveness probe.

use axum::Json;

use crate::dto::response::HealthResponse;

/// `GET /health` — report service liveness.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
