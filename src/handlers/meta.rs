use crate::content::{meta_for_path, normalize_path, site};
use crate::error::{ApiError, ErrorResponse};
use crate::models::{MetaResponse, PathQuery};
use crate::routes;
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};

/// Extracts a non-blank `path` query parameter.
pub(crate) fn require_path(query: PathQuery) -> Result<String, ApiError> {
    query
        .path
        .filter(|p| !p.trim().is_empty())
        .ok_or(ApiError::MissingQueryParam("path"))
}

/// GET /api/meta handler - Metadata the shell publishes for a path
#[utoipa::path(
    get,
    path = routes::API_META,
    params(PathQuery),
    responses(
        (status = 200, description = "Metadata for the path, or the home page's for unknown paths", body = MetaResponse),
        (status = 400, description = "Missing path parameter", body = ErrorResponse)
    ),
    tag = "content"
)]
pub async fn meta_handler(
    State(state): State<AppState>,
    Query(query): Query<PathQuery>,
) -> Result<(StatusCode, Json<MetaResponse>), ApiError> {
    let raw = require_path(query)?;
    let path = normalize_path(&raw);
    let meta = meta_for_path(path);

    tracing::info!("Resolved metadata for path: {}", path);

    Ok((
        StatusCode::OK,
        Json(MetaResponse {
            path: path.to_string(),
            title: meta.title.to_string(),
            description: meta.description.to_string(),
            canonical_url: site::absolute_url(state.base_url(), path),
        }),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use axum::{body::Body, http::Request, routing::get, Router};
    use tower::ServiceExt;

    fn app() -> Router {
        Router::new()
            .route(crate::routes::API_META, get(meta_handler))
            .with_state(AppState::new(Config::default()))
    }

    async fn call(uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_meta_for_route() {
        let (status, body) = call("/api/meta?path=/contact").await;
        assert_eq!(status, StatusCode::OK);

        let meta: MetaResponse = serde_json::from_value(body).unwrap();
        assert_eq!(meta.path, "/contact");
        assert_eq!(meta.title, "Contact Us | Antek Automation | AI Agency UK");
        assert_eq!(meta.canonical_url, "https://www.aiautomationagencyuk.com/contact");
    }

    #[tokio::test]
    async fn test_meta_for_location_with_trailing_slash() {
        let (status, body) = call("/api/meta?path=%2Flocations%2Fleeds%2F").await;
        assert_eq!(status, StatusCode::OK);

        let meta: MetaResponse = serde_json::from_value(body).unwrap();
        assert_eq!(meta.path, "/locations/leeds");
        assert_eq!(meta.title, "AI Automation Agency Leeds | Antek Automation");
    }

    #[tokio::test]
    async fn test_meta_for_unknown_path_falls_back_to_home() {
        let (_, body) = call("/api/meta?path=/locations/atlantis").await;
        let meta: MetaResponse = serde_json::from_value(body).unwrap();
        assert_eq!(meta.title, "AI Automation Agency UK | Antek Automation");
        assert_eq!(meta.canonical_url, "https://www.aiautomationagencyuk.com/locations/atlantis");
    }

    #[tokio::test]
    async fn test_meta_missing_path() {
        let (status, body) = call("/api/meta").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Missing query parameter: path");

        let (status, _) = call("/api/meta?path=").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
