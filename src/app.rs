//! Router assembly: API routes, crawler files, static assets, Swagger UI and
//! the shell fallback, wrapped in request-id and tracing layers.

use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue},
    routing::get,
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use uuid::Uuid;

use crate::api_doc::ApiDoc;
use crate::handlers;
use crate::routes;
use crate::state::AppState;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Issues a v4 UUID for requests that arrive without an id.
#[derive(Clone, Copy, Default)]
pub struct MakeRequestUuid;

impl MakeRequestId for MakeRequestUuid {
    fn make_request_id<B>(&mut self, _request: &axum::http::Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::new_v4().to_string())
            .ok()
            .map(RequestId::new)
    }
}

pub fn build_router(state: AppState) -> Router {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    let mut router = Router::new()
        .route(routes::HEALTH, get(handlers::health_handler))
        .route(routes::API_META, get(handlers::meta_handler))
        .route(routes::API_PAGES, get(handlers::pages_handler))
        .route(routes::API_NAVIGATION, get(handlers::navigation_handler))
        .route(routes::API_LOCATIONS, get(handlers::list_locations_handler))
        .route(routes::API_LOCATION_ITEM, get(handlers::get_location_handler))
        .route(routes::SITEMAP, get(handlers::sitemap_handler))
        .route(routes::ROBOTS, get(handlers::robots_handler))
        .merge(SwaggerUi::new(routes::SWAGGER_UI).url(routes::OPENAPI_JSON, ApiDoc::openapi()));

    if let Some(dir) = &state.config.static_dir {
        tracing::info!("Serving {} from {}", routes::ASSETS, dir.display());
        router = router.nest_service(routes::ASSETS, ServeDir::new(dir));
    }

    router
        .fallback(handlers::shell_handler)
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(request_id.clone(), MakeRequestUuid))
                .layer(TraceLayer::new_for_http().make_span_with(|request: &Request| {
                    let request_id = request
                        .headers()
                        .get(REQUEST_ID_HEADER)
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or("-");
                    tracing::info_span!(
                        "request",
                        method = %request.method(),
                        uri = %request.uri(),
                        request_id = %request_id,
                    )
                }))
                .layer(PropagateRequestIdLayer::new(request_id)),
        )
}
