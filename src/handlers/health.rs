use axum::Json;
use tracing::{debug, instrument};

use crate::models::HealthResponse;

#[instrument(name = "handlers.health")]
pub async fn health_handler() -> Json<HealthResponse> {
    debug!(msg = "Health check");

    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
