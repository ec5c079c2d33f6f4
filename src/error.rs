use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, info};

use crate::models::ErrorResponse;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Missing required query parameters: {}", .missing.join(", "))]
    Validation { missing: Vec<&'static str> },

    #[error("Persistence failed: {0}")]
    Persistence(#[source] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation { missing } => {
                info!(msg = "Rejecting activity log request", missing = ?missing);

                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(ErrorResponse {
                        error: "Missing required query parameters".to_string(),
                        missing: missing.into_iter().map(str::to_string).collect(),
                    }),
                )
                    .into_response()
            }
            AppError::Persistence(err) => {
                error!(msg = "Failed to persist activity log", error = ?err);

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse {
                        error: "Internal server error".to_string(),
                        missing: Vec::new(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
