use crate::error::{ApiError, ErrorResponse};
use crate::handlers::meta::require_path;
use crate::models::{CityResponse, PageResponse, PathQuery, SeoHeadResponse};
use crate::router::{Page, PageView};
use crate::routes;
use crate::seo::SeoHead;
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};

/// GET /api/pages handler - Resolve a path to the page the client renders
#[utoipa::path(
    get,
    path = routes::API_PAGES,
    params(PathQuery),
    responses(
        (status = 200, description = "Resolved page with its head tags", body = PageResponse),
        (status = 400, description = "Missing path parameter", body = ErrorResponse),
        (status = 404, description = "Location slug has no city", body = ErrorResponse)
    ),
    tag = "content"
)]
pub async fn pages_handler(
    State(state): State<AppState>,
    Query(query): Query<PathQuery>,
) -> Result<(StatusCode, Json<PageResponse>), ApiError> {
    let path = require_path(query)?;
    let page = Page::resolve(&path);

    let city = match page.view() {
        PageView::Location(city) => Some(city),
        PageView::LocationNotFound { slug } => {
            tracing::info!("Location not found: {}", slug);
            return Err(ApiError::LocationNotFound(slug));
        }
        PageView::Static => None,
    };

    let head = match city {
        Some(city) => SeoHead::for_city(city, state.base_url()),
        None => SeoHead::for_page(&page, state.base_url())
            .ok_or_else(|| ApiError::LocationNotFound(path.clone()))?,
    };

    tracing::info!("Resolved {} to page {}", path, page.name());

    Ok((
        StatusCode::OK,
        Json(PageResponse {
            path,
            page: page.name().to_string(),
            canonical_url: head.canonical_url(),
            seo: SeoHeadResponse::from(&head),
            head_html: head.render(),
            city: city.map(CityResponse::from),
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
            .route(crate::routes::API_PAGES, get(pages_handler))
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
    async fn test_service_page() {
        let (status, body) = call("/api/pages?path=/services/ai-voice-agents").await;
        assert_eq!(status, StatusCode::OK);

        let page: PageResponse = serde_json::from_value(body).unwrap();
        assert_eq!(page.page, "ai-voice-agents");
        assert_eq!(page.canonical_url, "https://www.aiautomationagencyuk.com/services/ai-voice-agents");
        assert_eq!(page.seo.robots, "index, follow");
        assert_eq!(page.seo.breadcrumbs.len(), 3);
        // BreadcrumbList plus the Service/FAQPage graph
        assert_eq!(page.seo.json_ld.len(), 2);
        assert_eq!(page.seo.json_ld[0]["@type"], "BreadcrumbList");
        assert!(page.city.is_none());
    }

    #[tokio::test]
    async fn test_unknown_path_resolves_to_home() {
        let (status, body) = call("/api/pages?path=/blog/post-1").await;
        assert_eq!(status, StatusCode::OK);

        let page: PageResponse = serde_json::from_value(body).unwrap();
        assert_eq!(page.path, "/blog/post-1");
        assert_eq!(page.page, "home");
        assert_eq!(page.canonical_url, "https://www.aiautomationagencyuk.com/");
        assert!(page.seo.breadcrumbs.is_empty());
    }

    #[tokio::test]
    async fn test_trailing_slash_is_not_a_route() {
        let (status, body) = call("/api/pages?path=/about/").await;
        assert_eq!(status, StatusCode::OK);

        let page: PageResponse = serde_json::from_value(body).unwrap();
        assert_eq!(page.path, "/about/");
        assert_eq!(page.page, "home");

        let (status, body) = call("/api/pages?path=/locations/leeds/").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["error"].as_str().unwrap().starts_with("Location Not Found (leeds/)"));
    }

    #[tokio::test]
    async fn test_head_html_is_rendered() {
        let (_, body) = call("/api/pages?path=/who-we-help/lawyers").await;
        let page: PageResponse = serde_json::from_value(body).unwrap();

        assert!(page.head_html.starts_with("<title>"));
        assert!(page.head_html.contains("&amp;"));
        assert!(page.head_html.contains(
            r#"<link rel="canonical" href="https://www.aiautomationagencyuk.com/who-we-help/lawyers" />"#
        ));
        assert!(page.head_html.contains(r#"<script id="breadcrumb-schema" type="application/ld+json">"#));
    }

    #[tokio::test]
    async fn test_location_page_includes_city() {
        let (status, body) = call("/api/pages?path=/locations/birmingham").await;
        assert_eq!(status, StatusCode::OK);

        let page: PageResponse = serde_json::from_value(body).unwrap();
        assert_eq!(page.page, "location");
        assert_eq!(page.seo.title, "AI Automation Agency Serving Birmingham | Antek Automation");
        let city = page.city.unwrap();
        assert_eq!(city.slug, "birmingham");
        assert_eq!(city.region, "West Midlands");
    }

    #[tokio::test]
    async fn test_unknown_location_is_not_found() {
        let (status, body) = call("/api/pages?path=/locations/atlantis").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["error"].as_str().unwrap().starts_with("Location Not Found (atlantis)"));
    }

    #[tokio::test]
    async fn test_missing_path() {
        let (status, _) = call("/api/pages").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
