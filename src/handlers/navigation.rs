use crate::content::{all_cities, site};
use crate::models::{ContactDetails, NavLinkResponse, NavigationResponse};
use crate::router::{
    CALL_TO_ACTION, FOOTER_SERVICE_LINKS, LEGAL_LINKS, PRIMARY_LINKS, SERVICE_LINKS,
    WHO_WE_HELP_LINKS,
};
use crate::routes;
use axum::{http::StatusCode, Json};

fn links(items: &[crate::router::NavLink]) -> Vec<NavLinkResponse> {
    items.iter().map(NavLinkResponse::from).collect()
}

/// GET /api/navigation handler - Header dropdowns, footer columns and contact details
#[utoipa::path(
    get,
    path = routes::API_NAVIGATION,
    responses(
        (status = 200, description = "Site menus", body = NavigationResponse)
    ),
    tag = "content"
)]
pub async fn navigation_handler() -> (StatusCode, Json<NavigationResponse>) {
    let locations = all_cities()
        .iter()
        .map(|city| NavLinkResponse {
            label: city.name.to_string(),
            href: city.path(),
        })
        .collect();

    (
        StatusCode::OK,
        Json(NavigationResponse {
            primary: links(PRIMARY_LINKS),
            services: links(SERVICE_LINKS),
            who_we_help: links(WHO_WE_HELP_LINKS),
            call_to_action: NavLinkResponse::from(&CALL_TO_ACTION),
            footer_services: links(FOOTER_SERVICE_LINKS),
            locations,
            legal: links(LEGAL_LINKS),
            contact: ContactDetails {
                telephone: site::TELEPHONE.to_string(),
                telephone_display: site::TELEPHONE_DISPLAY.to_string(),
                email: site::CONTACT_EMAIL.to_string(),
                booking_url: site::BOOKING_URL.to_string(),
            },
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, routing::get, Router};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_navigation() {
        let app = Router::new().route(crate::routes::API_NAVIGATION, get(navigation_handler));
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/navigation")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let nav: NavigationResponse = serde_json::from_slice(&body).unwrap();

        let services: Vec<_> = nav.services.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(services, ["AI Chatbots", "AI Voice Agents", "Workflow Automation"]);
        assert_eq!(nav.who_we_help[1].label, "Lawyers & Solicitors");
        assert_eq!(nav.who_we_help[1].href, "/who-we-help/lawyers");
        assert_eq!(nav.footer_services[1].href, "/services/ai-voice-assistants");
        assert_eq!(nav.locations.len(), 8);
        assert_eq!(nav.locations[0].href, "/locations/london");
        assert_eq!(nav.legal[0].label, "Terms of Business");
        assert_eq!(nav.call_to_action.href, "/contact");
        assert_eq!(nav.contact.telephone_display, "0333 038 9960");
    }
}
