use crate::routes;
use crate::sitemap::{robots_txt, Sitemap};
use crate::state::AppState;
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
};

/// GET /sitemap.xml handler - Every published page, dated today
#[utoipa::path(
    get,
    path = routes::SITEMAP,
    responses(
        (status = 200, description = "Sitemap document", content_type = "application/xml", body = String)
    ),
    tag = "crawlers"
)]
pub async fn sitemap_handler(State(state): State<AppState>) -> impl IntoResponse {
    let sitemap = Sitemap::build(state.base_url(), chrono::Utc::now().date_naive());
    tracing::debug!("Serving sitemap with {} urls", sitemap.len());

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/xml; charset=utf-8")],
        sitemap.into_xml(),
    )
}

/// GET /robots.txt handler
#[utoipa::path(
    get,
    path = routes::ROBOTS,
    responses(
        (status = 200, description = "Crawler rules", content_type = "text/plain", body = String)
    ),
    tag = "crawlers"
)]
pub async fn robots_handler(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        robots_txt(state.base_url()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use axum::{body::Body, http::Request, routing::get, Router};
    use tower::ServiceExt;

    fn app() -> Router {
        let config = Config {
            site_base_url: "http://localhost:3000".to_string(),
            ..Config::default()
        };
        Router::new()
            .route(crate::routes::SITEMAP, get(sitemap_handler))
            .route(crate::routes::ROBOTS, get(robots_handler))
            .with_state(AppState::new(config))
    }

    async fn call(uri: &str) -> (StatusCode, String, String) {
        let response = app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap().to_string();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, content_type, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_sitemap() {
        let (status, content_type, xml) = call("/sitemap.xml").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type, "application/xml; charset=utf-8");
        assert!(xml.contains("<loc>http://localhost:3000/about</loc>"));
        assert!(xml.contains("<loc>http://localhost:3000/locations/london</loc>"));
        let today = chrono::Utc::now().date_naive().format("%Y-%m-%d").to_string();
        assert!(xml.contains(&today));
    }

    #[tokio::test]
    async fn test_robots() {
        let (status, content_type, body) = call("/robots.txt").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type, "text/plain; charset=utf-8");
        assert!(body.ends_with("Sitemap: http://localhost:3000/sitemap.xml\n"));
    }
}
