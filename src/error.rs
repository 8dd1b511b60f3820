use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::router::{LOCATION_NOT_FOUND_HEADING, LOCATION_NOT_FOUND_MESSAGE};

/// Error response type
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Response type for health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

/// Response type for unhealthy status
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct UnhealthyResponse {
    pub status: String,
    pub error: String,
}

/// Error type for API endpoints, rendered as `{"error": "..."}`.
#[derive(Debug)]
pub enum ApiError {
    /// Required query parameter absent or blank
    MissingQueryParam(&'static str),
    /// No city record for a location slug
    LocationNotFound(String),
    /// The shell template could not be loaded
    ShellUnavailable(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::MissingQueryParam(name) => (
                StatusCode::BAD_REQUEST,
                format!("Missing query parameter: {}", name),
            ),
            ApiError::LocationNotFound(slug) => (
                StatusCode::NOT_FOUND,
                format!("{} ({}). {}", LOCATION_NOT_FOUND_HEADING, slug, LOCATION_NOT_FOUND_MESSAGE),
            ),
            ApiError::ShellUnavailable(err) => {
                tracing::error!("Shell unavailable: {:#}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Shell unavailable: {}", err),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status, body).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::ShellUnavailable(err)
    }
}
