//! Path routing for the site's pages.
//!
//! `Page::resolve` mirrors the client router's dispatch: a fixed set of
//! route strings, `/locations/<slug>` for city pages, and the home page for
//! everything else. Paths are matched exactly as given, so `/about/` is not
//! `/about`.

use serde::Serialize;

use crate::content::meta::LOCATIONS_PREFIX;
use crate::content::{city_by_slug, City};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Contact,
    AiChatbots,
    AiVoiceAgents,
    AiVoiceAssistants,
    WorkflowAutomation,
    Tradespeople,
    Lawyers,
    Dentists,
    Consultants,
    About,
    CaseStudies,
    PrivacyPolicy,
    TermsOfBusiness,
    Location(String),
}

/// Fixed routes, excluding the home page and locations.
const STATIC_ROUTES: &[(&str, Page)] = &[
    ("/contact", Page::Contact),
    ("/services/ai-chatbots", Page::AiChatbots),
    ("/services/ai-voice-agents", Page::AiVoiceAgents),
    ("/services/ai-voice-assistants", Page::AiVoiceAssistants),
    ("/services/workflow-automation", Page::WorkflowAutomation),
    ("/who-we-help/tradespeople", Page::Tradespeople),
    ("/who-we-help/lawyers", Page::Lawyers),
    ("/who-we-help/dentists", Page::Dentists),
    ("/who-we-help/consultants", Page::Consultants),
    ("/about", Page::About),
    ("/case-studies", Page::CaseStudies),
    ("/privacy-policy", Page::PrivacyPolicy),
    ("/terms-of-business", Page::TermsOfBusiness),
];

impl Page {
    /// Resolves a request path. Unknown paths render the home page.
    pub fn resolve(path: &str) -> Page {
        if let Some(slug) = path.strip_prefix(LOCATIONS_PREFIX) {
            return Page::Location(slug.to_string());
        }

        STATIC_ROUTES
            .iter()
            .find(|(route, _)| *route == path)
            .map(|(_, page)| page.clone())
            .unwrap_or(Page::Home)
    }

    /// Canonical path of the page.
    pub fn path(&self) -> String {
        match self {
            Page::Home => "/".to_string(),
            Page::Location(slug) => format!("{}{}", LOCATIONS_PREFIX, slug),
            other => STATIC_ROUTES
                .iter()
                .find(|(_, page)| page == other)
                .map(|(route, _)| route.to_string())
                .unwrap_or_else(|| "/".to_string()),
        }
    }

    /// Stable identifier used in API responses and logs.
    pub fn name(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Contact => "contact",
            Page::AiChatbots => "ai-chatbots",
            Page::AiVoiceAgents => "ai-voice-agents",
            Page::AiVoiceAssistants => "ai-voice-assistants",
            Page::WorkflowAutomation => "workflow-automation",
            Page::Tradespeople => "tradespeople",
            Page::Lawyers => "lawyers",
            Page::Dentists => "dentists",
            Page::Consultants => "consultants",
            Page::About => "about",
            Page::CaseStudies => "case-studies",
            Page::PrivacyPolicy => "privacy-policy",
            Page::TermsOfBusiness => "terms-of-business",
            Page::Location(_) => "location",
        }
    }

    /// Looks up the content a page renders.
    pub fn view(&self) -> PageView {
        match self {
            Page::Location(slug) => match city_by_slug(slug) {
                Some(city) => PageView::Location(city),
                None => PageView::LocationNotFound { slug: slug.clone() },
            },
            _ => PageView::Static,
        }
    }

    /// Every page with a fixed route, plus one page per known city.
    pub fn all() -> impl Iterator<Item = Page> {
        std::iter::once(Page::Home)
            .chain(STATIC_ROUTES.iter().map(|(_, page)| page.clone()))
            .chain(crate::content::all_cities().iter().map(|city| Page::Location(city.slug.to_string())))
    }
}

/// What a resolved page renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageView {
    Static,
    Location(&'static City),
    LocationNotFound { slug: String },
}

/// Copy shown in place of a location page for an unknown slug.
pub const LOCATION_NOT_FOUND_HEADING: &str = "Location Not Found";
pub const LOCATION_NOT_FOUND_MESSAGE: &str = "We couldn't find information for this location.";

/// A navigation link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const SERVICE_LINKS: &[NavLink] = &[
    NavLink { label: "AI Chatbots", href: "/services/ai-chatbots" },
    NavLink { label: "AI Voice Agents", href: "/services/ai-voice-agents" },
    NavLink { label: "Workflow Automation", href: "/services/workflow-automation" },
];

pub const WHO_WE_HELP_LINKS: &[NavLink] = &[
    NavLink { label: "Tradespeople", href: "/who-we-help/tradespeople" },
    NavLink { label: "Lawyers & Solicitors", href: "/who-we-help/lawyers" },
    NavLink { label: "Dental Practices", href: "/who-we-help/dentists" },
    NavLink { label: "Consultants & Freelancers", href: "/who-we-help/consultants" },
];

pub const PRIMARY_LINKS: &[NavLink] = &[
    NavLink { label: "Home", href: "/" },
    NavLink { label: "About", href: "/about" },
    NavLink { label: "Case Studies", href: "/case-studies" },
    NavLink { label: "Contact", href: "/contact" },
];

pub const FOOTER_SERVICE_LINKS: &[NavLink] = &[
    NavLink { label: "AI Chatbots", href: "/services/ai-chatbots" },
    NavLink { label: "AI Voice Assistants", href: "/services/ai-voice-assistants" },
    NavLink { label: "Workflow Automation", href: "/services/workflow-automation" },
];

pub const LEGAL_LINKS: &[NavLink] = &[
    NavLink { label: "Terms of Business", href: "/terms-of-business" },
    NavLink { label: "Privacy Policy", href: "/privacy-policy" },
];

pub const CALL_TO_ACTION: NavLink = NavLink { label: "Book Free Call →", href: "/contact" };
