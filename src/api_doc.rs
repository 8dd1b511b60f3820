use utoipa::OpenApi;

use crate::error::{ErrorResponse, HealthResponse, UnhealthyResponse};
use crate::handlers;
use crate::models::{
    BreadcrumbResponse, CityResponse, ContactDetails, HighlightResponse, LocationSummary,
    MetaResponse, MetaTagResponse, NavLinkResponse, NavigationResponse, PageResponse,
    SeoHeadResponse, TestimonialResponse,
};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "antek-site API",
        version = "1.0.0",
        description = "Page metadata, SEO head tags and service areas for the Antek Automation website"
    ),
    paths(
        handlers::health::health_handler,
        handlers::meta::meta_handler,
        handlers::pages::pages_handler,
        handlers::navigation::navigation_handler,
        handlers::locations::list_locations_handler,
        handlers::locations::get_location_handler,
        handlers::sitemap::sitemap_handler,
        handlers::sitemap::robots_handler
    ),
    components(
        schemas(
            MetaResponse,
            PageResponse,
            SeoHeadResponse,
            MetaTagResponse,
            BreadcrumbResponse,
            LocationSummary,
            CityResponse,
            HighlightResponse,
            TestimonialResponse,
            NavigationResponse,
            NavLinkResponse,
            ContactDetails,
            ErrorResponse,
            HealthResponse,
            UnhealthyResponse
        )
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "content", description = "Route metadata and page resolution"),
        (name = "locations", description = "Service areas"),
        (name = "crawlers", description = "Sitemap and robots rules")
    )
)]
pub struct ApiDoc;
