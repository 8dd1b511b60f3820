use crate::content::{all_cities, city_by_slug};
use crate::error::{ApiError, ErrorResponse};
use crate::models::{CityResponse, LocationSummary};
use crate::routes;
use axum::{extract::Path, http::StatusCode, Json};

/// GET /api/locations handler - List service areas in display order
#[utoipa::path(
    get,
    path = routes::API_LOCATIONS,
    responses(
        (status = 200, description = "All service areas", body = [LocationSummary])
    ),
    tag = "locations"
)]
pub async fn list_locations_handler() -> (StatusCode, Json<Vec<LocationSummary>>) {
    let locations: Vec<LocationSummary> = all_cities().iter().map(LocationSummary::from).collect();

    tracing::info!("Listed {} locations", locations.len());

    (StatusCode::OK, Json(locations))
}

/// GET /api/locations/{slug} handler - Full record for one service area
#[utoipa::path(
    get,
    path = routes::API_LOCATION_ITEM,
    params(
        ("slug" = String, Path, description = "City slug, e.g. `manchester`")
    ),
    responses(
        (status = 200, description = "City found", body = CityResponse),
        (status = 404, description = "No city for the slug", body = ErrorResponse)
    ),
    tag = "locations"
)]
pub async fn get_location_handler(
    Path(slug): Path<String>,
) -> Result<(StatusCode, Json<CityResponse>), ApiError> {
    match city_by_slug(&slug) {
        Some(city) => {
            tracing::info!("Retrieved location: {}", slug);
            Ok((StatusCode::OK, Json(CityResponse::from(city))))
        }
        None => {
            tracing::info!("Location not found: {}", slug);
            Err(ApiError::LocationNotFound(slug))
        }
    }
}
