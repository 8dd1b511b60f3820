//! Route metadata tables and the path lookup used by the shell handler.
//!
//! Titles and descriptions must stay in sync with the page descriptors in
//! [`super::pages`]; both are what link previews and search engines see.

use std::collections::HashMap;
use std::sync::LazyLock;

use serde::Serialize;

/// Title/description pair published for a URL path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RouteMeta {
    pub title: &'static str,
    pub description: &'static str,
}

pub const HOME_PATH: &str = "/";
pub const LOCATIONS_PREFIX: &str = "/locations/";

/// Static routes in publication order.
pub const ROUTES: &[(&str, RouteMeta)] = &[
    (
        "/",
        RouteMeta {
            title: "AI Automation Agency UK | Antek Automation",
            description: "We build AI voice agents, chatbots and automated workflows for UK service businesses and professionals. Less admin. More of the work you're actually good at.",
        },
    ),
    (
        "/contact",
        RouteMeta {
            title: "Contact Us | Antek Automation | AI Agency UK",
            description: "Talk to us about AI automation | Capture every customer call 24/7 | Expert setup & support for UK service businesses | Free consultation",
        },
    ),
    (
        "/services/ai-chatbots",
        RouteMeta {
            title: "AI Chatbots for UK Businesses | Antek Automation",
            description: "AI chatbots for websites and WhatsApp. Captures enquiries, qualifies leads, answers common questions — while you're working. Built for UK service businesses.",
        },
    ),
    (
        "/services/ai-voice-assistants",
        RouteMeta {
            title: "AI Voice Assistants | Antek Automation UK",
            description: "AI voice agents that answer calls 24/7 | Book appointments automatically | Never miss a call again | Boost revenue for UK service businesses",
        },
    ),
    (
        "/services/workflow-automation",
        RouteMeta {
            title: "Workflow Automation for UK Businesses | Antek Automation",
            description: "Workflow automation built on n8n. Connects your tools, removes repetitive admin, and runs in the background. Built for UK service businesses.",
        },
    ),
    (
        "/privacy-policy",
        RouteMeta {
            title: "Privacy Policy | Antek Automation",
            description: "Privacy Policy for Antek Automation. Learn how we collect, process, and protect your personal data.",
        },
    ),
    (
        "/terms-of-business",
        RouteMeta {
            title: "Terms of Business | Antek Automation",
            description: "Terms of Business for Antek Automation. Read our terms and conditions for AI automation services.",
        },
    ),
    (
        "/services/ai-voice-agents",
        RouteMeta {
            title: "AI Voice Agents for UK Businesses | Antek Automation",
            description: "AI voice agents that answer your calls 24/7. Books appointments, handles enquiries, sounds human. Certified Retell AI Gold Partner. UK businesses.",
        },
    ),
    (
        "/who-we-help/tradespeople",
        RouteMeta {
            title: "AI Automation for Tradespeople UK | Antek Automation",
            description: "You can't answer your phone mid-job. AI voice agents and chatbots built for UK tradespeople — plumbers, electricians, HVAC and more.",
        },
    ),
    (
        "/who-we-help/lawyers",
        RouteMeta {
            title: "AI Automation for Law Firms & Solicitors UK",
            description: "AI voice agents and chatbots for small law firms and solicitors. Client intake, appointment booking and enquiries handled automatically.",
        },
    ),
    (
        "/who-we-help/dentists",
        RouteMeta {
            title: "AI Automation for Dental Practices UK | Antek",
            description: "AI voice agents and chatbots for dental practices. Appointment bookings, cancellations, new patient enquiries — handled automatically.",
        },
    ),
    (
        "/who-we-help/consultants",
        RouteMeta {
            title: "AI Automation for Consultants & Freelancers UK",
            description: "AI automation for consultants and freelancers. Stop losing enquiries to slow responses. Chatbots, voice agents and workflows built around how you work.",
        },
    ),
    (
        "/about",
        RouteMeta {
            title: "About Antek Automation | UK AI Automation Agency",
            description: "Small UK agency building AI voice agents, chatbots and workflow automation for service businesses. Retell AI Gold Partner. Based in Hampshire.",
        },
    ),
    (
        "/case-studies",
        RouteMeta {
            title: "Case Studies | AI Automation Results | Antek Automation",
            description: "How UK service businesses use AI voice agents, chatbots and workflow automation to stop losing enquiries. Real examples from trades, legal and dental.",
        },
    ),
];

/// Location landing page metadata keyed by city slug.
pub const LOCATIONS: &[(&str, RouteMeta)] = &[
    (
        "london",
        RouteMeta {
            title: "AI Automation Agency London | Antek Automation",
            description: "AI voice agents & chatbots for London businesses. Answer every call 24/7, capture leads & book appointments. Antek Automation UK.",
        },
    ),
    (
        "birmingham",
        RouteMeta {
            title: "AI Automation Agency Birmingham | Antek Automation",
            description: "AI voice agents & chatbots for Birmingham. Never miss a call again. Serve all West Midlands 24/7. Antek Automation UK.",
        },
    ),
    (
        "manchester",
        RouteMeta {
            title: "AI Automation Agency Manchester | Antek Automation",
            description: "AI voice agents & chatbots for Manchester. Handle calls from Greater Manchester 24/7. Capture every lead. Antek Automation UK.",
        },
    ),
    (
        "leeds",
        RouteMeta {
            title: "AI Automation Agency Leeds | Antek Automation",
            description: "AI voice agents & chatbots for Leeds. Answer calls 24/7. Serve all West Yorkshire. Antek Automation UK.",
        },
    ),
    (
        "liverpool",
        RouteMeta {
            title: "AI Automation Agency Liverpool | Antek Automation",
            description: "AI voice agents & chatbots for Liverpool. Handle calls across Merseyside 24/7. Never miss business again. Antek Automation UK.",
        },
    ),
    (
        "glasgow",
        RouteMeta {
            title: "AI Automation Agency Glasgow | Antek Automation",
            description: "AI voice agents & chatbots for Glasgow. Answer calls 24/7 across Scotland. Capture every customer. Antek Automation UK.",
        },
    ),
    (
        "newcastle",
        RouteMeta {
            title: "AI Automation Agency Newcastle | Antek Automation",
            description: "AI voice agents & chatbots for Newcastle. Handle calls across the Northeast 24/7. Book appointments automatically. Antek Automation UK.",
        },
    ),
    (
        "hampshire",
        RouteMeta {
            title: "AI Automation Agency Hampshire | Antek Automation",
            description: "AI voice agents & chatbots for Hampshire businesses. Answer every call 24/7, capture leads & book appointments. Antek Automation UK.",
        },
    ),
];

static ROUTE_META: LazyLock<HashMap<&'static str, RouteMeta>> =
    LazyLock::new(|| ROUTES.iter().copied().collect());

static LOCATION_META: LazyLock<HashMap<&'static str, RouteMeta>> =
    LazyLock::new(|| LOCATIONS.iter().copied().collect());

/// Strips a single trailing slash; the empty path is the home path.
pub fn normalize_path(path: &str) -> &str {
    let trimmed = path.strip_suffix('/').unwrap_or(path);
    if trimmed.is_empty() { HOME_PATH } else { trimmed }
}

/// Exact lookup in the static route table.
pub fn route_meta(path: &str) -> Option<&'static RouteMeta> {
    ROUTE_META.get(path)
}

/// Exact lookup of location metadata by slug.
pub fn location_meta(slug: &str) -> Option<&'static RouteMeta> {
    LOCATION_META.get(slug)
}

pub fn home_meta() -> &'static RouteMeta {
    &ROUTES[0].1
}

/// Resolves the metadata published for a request path.
///
/// Static routes win, then `/locations/<slug>` (a trailing slash after the
/// slug is ignored), and anything else gets the home page record.
pub fn meta_for_path(path: &str) -> &'static RouteMeta {
    if let Some(meta) = route_meta(path) {
        return meta;
    }

    if let Some(rest) = path.strip_prefix(LOCATIONS_PREFIX) {
        let slug = rest.strip_suffix('/').unwrap_or(rest);
        if let Some(meta) = location_meta(slug) {
            return meta;
        }
        tracing::debug!("No location metadata for slug '{}', using home", slug);
    }

    home_meta()
}
