//! Health check handlers

use axum::Json;
use family_service::HealthResponse;

/// Basic health check (liveness probe)
///
/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
