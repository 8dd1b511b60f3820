use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::content::cities::{Highlight, Testimonial};
use crate::content::{Breadcrumb, City};
use crate::router::NavLink;
use crate::seo::SeoHead;

/// Query parameters naming a site path
#[derive(Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PathQuery {
    /// Site path, e.g. `/services/ai-chatbots`
    pub path: Option<String>,
}

/// Shell metadata for a path
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct MetaResponse {
    pub path: String,
    pub title: String,
    pub description: String,
    pub canonical_url: String,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct MetaTagResponse {
    pub key: String,
    pub content: String,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct BreadcrumbResponse {
    pub name: String,
    pub url: String,
}

impl From<&Breadcrumb> for BreadcrumbResponse {
    fn from(crumb: &Breadcrumb) -> Self {
        BreadcrumbResponse {
            name: crumb.name.clone(),
            url: crumb.url.clone(),
        }
    }
}

/// Head tags a page publishes
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct SeoHeadResponse {
    pub title: String,
    pub description: String,
    pub canonical_url: String,
    pub robots: String,
    pub keywords: Option<String>,
    pub open_graph: Vec<MetaTagResponse>,
    pub twitter: Vec<MetaTagResponse>,
    pub breadcrumbs: Vec<BreadcrumbResponse>,
    pub json_ld: Vec<JsonValue>,
}

fn tags(pairs: Vec<(&'static str, String)>) -> Vec<MetaTagResponse> {
    pairs
        .into_iter()
        .map(|(key, content)| MetaTagResponse {
            key: key.to_string(),
            content,
        })
        .collect()
}

impl From<&SeoHead> for SeoHeadResponse {
    fn from(head: &SeoHead) -> Self {
        SeoHeadResponse {
            title: head.title.clone(),
            description: head.description.clone(),
            canonical_url: head.canonical_url(),
            robots: head.robots().to_string(),
            keywords: head.keywords.clone(),
            open_graph: tags(head.open_graph()),
            twitter: tags(head.twitter()),
            breadcrumbs: head.breadcrumbs.iter().map(BreadcrumbResponse::from).collect(),
            json_ld: head
                .breadcrumb_schema()
                .into_iter()
                .chain(head.page_schema())
                .collect(),
        }
    }
}

/// Resolved page for a path
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct PageResponse {
    pub path: String,
    pub page: String,
    pub canonical_url: String,
    pub seo: SeoHeadResponse,
    /// The head tags as rendered markup, ready to splice into `<head>`
    pub head_html: String,
    pub city: Option<CityResponse>,
}

/// Entry in the locations list
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct LocationSummary {
    pub name: String,
    pub slug: String,
    pub region: String,
    pub path: String,
}

impl From<&City> for LocationSummary {
    fn from(city: &City) -> Self {
        LocationSummary {
            name: city.name.to_string(),
            slug: city.slug.to_string(),
            region: city.region.to_string(),
            path: city.path(),
        }
    }
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HighlightResponse {
    pub title: String,
    pub description: String,
}

impl From<&Highlight> for HighlightResponse {
    fn from(highlight: &Highlight) -> Self {
        HighlightResponse {
            title: highlight.title.to_string(),
            description: highlight.description.to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct TestimonialResponse {
    pub quote: String,
    pub author: String,
    pub business: String,
}

impl From<&Testimonial> for TestimonialResponse {
    fn from(testimonial: &Testimonial) -> Self {
        TestimonialResponse {
            quote: testimonial.quote.to_string(),
            author: testimonial.author.to_string(),
            business: testimonial.business.to_string(),
        }
    }
}

/// Full city record
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct CityResponse {
    pub name: String,
    pub slug: String,
    pub region: String,
    pub path: String,
    pub coverage_areas: Vec<String>,
    pub local_context: String,
    pub meta_description: String,
    pub hero_description: String,
    pub why_choose_us: Vec<HighlightResponse>,
    pub testimonial: Option<TestimonialResponse>,
}

impl From<&City> for CityResponse {
    fn from(city: &City) -> Self {
        CityResponse {
            name: city.name.to_string(),
            slug: city.slug.to_string(),
            region: city.region.to_string(),
            path: city.path(),
            coverage_areas: city.coverage_areas.iter().map(|area| area.to_string()).collect(),
            local_context: city.local_context.to_string(),
            meta_description: city.meta_description.to_string(),
            hero_description: city.hero_description.to_string(),
            why_choose_us: city.why_choose_us.iter().map(HighlightResponse::from).collect(),
            testimonial: city.testimonial.as_ref().map(TestimonialResponse::from),
        }
    }
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct NavLinkResponse {
    pub label: String,
    pub href: String,
}

impl From<&NavLink> for NavLinkResponse {
    fn from(link: &NavLink) -> Self {
        NavLinkResponse {
            label: link.label.to_string(),
            href: link.href.to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ContactDetails {
    pub telephone: String,
    pub telephone_display: String,
    pub email: String,
    pub booking_url: String,
}

/// Header and footer menus
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct NavigationResponse {
    pub primary: Vec<NavLinkResponse>,
    pub services: Vec<NavLinkResponse>,
    pub who_we_help: Vec<NavLinkResponse>,
    pub call_to_action: NavLinkResponse,
    pub footer_services: Vec<NavLinkResponse>,
    pub locations: Vec<NavLinkResponse>,
    pub legal: Vec<NavLinkResponse>,
    pub contact: ContactDetails,
}
