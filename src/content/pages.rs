//! Per-page SEO content: breadcrumbs, schema.org blocks and FAQs.

use serde_json::{json, Value};

use super::cities::City;
use super::meta::RouteMeta;
use super::site;

/// Navigation section a page sits under; becomes the middle breadcrumb.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Services,
    WhoWeHelp,
    Locations,
}

impl Section {
    pub fn label(self) -> &'static str {
        match self {
            Section::Services => "Services",
            Section::WhoWeHelp => "Who We Help",
            Section::Locations => "Locations",
        }
    }

    /// In-page anchor on the home page.
    pub fn anchor(self) -> &'static str {
        match self {
            Section::Services => "/#services",
            Section::WhoWeHelp => "/#who-we-help",
            Section::Locations => "/#locations",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub audience: Option<&'static str>,
}

/// Static SEO content for one routed page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageContent {
    pub path: &'static str,
    pub meta: RouteMeta,
    /// Last breadcrumb label. `None` for the home page, which has no trail.
    pub crumb: Option<&'static str>,
    pub section: Option<Section>,
    pub service: Option<ServiceInfo>,
    pub faqs: &'static [Faq],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breadcrumb {
    pub name: String,
    pub url: String,
}

impl Breadcrumb {
    fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Breadcrumb { name: name.into(), url: url.into() }
    }
}

impl PageContent {
    pub fn breadcrumbs(&self) -> Vec<Breadcrumb> {
        let Some(crumb) = self.crumb else {
            return Vec::new();
        };
        let mut trail = vec![Breadcrumb::new("Home", "/")];
        if let Some(section) = self.section {
            trail.push(Breadcrumb::new(section.label(), section.anchor()));
        }
        trail.push(Breadcrumb::new(crumb, self.path));
        trail
    }

    /// Schema.org blocks for the page, in publication order.
    pub fn schemas(&self, base_url: &str) -> Vec<Value> {
        let mut schemas = Vec::new();
        if self.path == "/" {
            schemas.push(home_schema(base_url));
        }
        if let Some(service) = &self.service {
            schemas.push(service_schema(service, base_url));
        }
        if !self.faqs.is_empty() {
            schemas.push(faq_schema(self.faqs));
        }
        schemas
    }
}

pub fn location_breadcrumbs(city: &City) -> Vec<Breadcrumb> {
    vec![
        Breadcrumb::new("Home", "/"),
        Breadcrumb::new(Section::Locations.label(), Section::Locations.anchor()),
        Breadcrumb::new(city.name, city.path()),
    ]
}

pub fn location_title(city: &City) -> String {
    format!("AI Automation Agency Serving {} | Antek Automation", city.name)
}

pub fn location_description(city: &City) -> String {
    format!(
        "We work with businesses in {} — voice agents, chatbots and workflow automation. UK-wide agency. Book a call.",
        city.name
    )
}

pub fn local_business_schema(city: &City, base_url: &str) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "LocalBusiness",
        "name": site::SITE_NAME,
        "description": format!(
            "AI automation agency serving businesses in {} — voice agents, chatbots and workflow automation.",
            city.name
        ),
        "url": base_url,
        "telephone": site::TELEPHONE,
        "email": site::CONTACT_EMAIL,
        "areaServed": [city.name, city.region],
        "address": {
            "@type": "PostalAddress",
            "addressCountry": "GB",
        },
        "serviceType": ["AI Voice Agents", "AI Chatbots", "Workflow Automation"],
    })
}

fn home_schema(base_url: &str) -> Value {
    let area_served: Vec<Value> = super::cities::all_cities()
        .iter()
        .map(|city| {
            // Hampshire is a county, not a city.
            let kind = if city.slug == "hampshire" { "AdministrativeArea" } else { "City" };
            json!({
                "@type": kind,
                "name": city.name,
                "containedInPlace": { "@type": "Country", "name": "United Kingdom" },
            })
        })
        .collect();

    json!({
        "@context": "https://schema.org",
        "@type": "ProfessionalService",
        "@id": format!("{}/#organization", base_url),
        "name": site::SITE_NAME,
        "url": base_url,
        "telephone": site::TELEPHONE,
        "email": site::CONTACT_EMAIL,
        "priceRange": "£500+",
        "areaServed": area_served,
        "contactPoint": [{
            "@type": "ContactPoint",
            "contactType": "sales",
            "telephone": site::TELEPHONE,
            "email": site::CONTACT_EMAIL,
            "availableLanguage": ["en-GB"],
            "areaServed": "GB",
        }],
        "openingHoursSpecification": [{
            "@type": "OpeningHoursSpecification",
            "dayOfWeek": ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"],
            "opens": "09:00",
            "closes": "18:00",
        }],
        "potentialAction": {
            "@type": "ScheduleAction",
            "name": "Book a 30-Minute AI Automation Strategy Call",
            "target": {
                "@type": "EntryPoint",
                "urlTemplate": site::BOOKING_URL,
            },
        },
        "knowsAbout": [
            "AI chatbots",
            "Voice AI",
            "Conversational AI",
            "Lead qualification",
            "Appointment booking",
            "Workflow automation",
            "Business process automation",
        ],
    })
}

fn service_schema(service: &ServiceInfo, base_url: &str) -> Value {
    let mut schema = json!({
        "@context": "https://schema.org",
        "@type": "Service",
        "name": service.name,
        "provider": {
            "@type": "Organization",
            "name": site::SITE_NAME,
            "url": base_url,
        },
        "description": service.description,
        "areaServed": "GB",
    });
    if let Some(audience) = service.audience {
        schema["audience"] = json!({
            "@type": "Audience",
            "audienceType": audience,
        });
    }
    schema
}

fn faq_schema(faqs: &[Faq]) -> Value {
    let entities: Vec<Value> = faqs
        .iter()
        .map(|faq| {
            json!({
                "@type": "Question",
                "name": faq.question,
                "acceptedAnswer": {
                    "@type": "Answer",
                    "text": faq.answer,
                },
            })
        })
        .collect();

    json!({
        "@context": "https://schema.org",
        "@type": "FAQPage",
        "mainEntity": entities,
    })
}

pub fn page_content(path: &str) -> Option<&'static PageContent> {
    PAGES.iter().find(|page| page.path == path)
}

const HOME_FAQS: &[Faq] = &[
    Faq {
        question: "What is an AI automation agency?",
        answer: "An AI automation agency builds systems that handle repetitive business tasks automatically — answering calls, responding to enquiries, booking appointments, processing information. We handle the technical build so you get the results without the complexity.",
    },
    Faq {
        question: "Will customers know they're talking to AI?",
        answer: "Depends on your preference. Some clients want it fully transparent. Others prefer it to sound like a member of staff. We build it however works for your business.",
    },
    Faq {
        question: "How long does setup take?",
        answer: "Voice agents and chatbots are usually live in 5–10 working days. Workflow automation takes 1–3 weeks depending on complexity.",
    },
    Faq {
        question: "Is there a contract?",
        answer: "Monthly rolling. We'd rather you stay because it's working than because you're locked in.",
    },
];

const CHATBOT_FAQS: &[Faq] = &[
    Faq {
        question: "Where does the chatbot actually live?",
        answer: "On your website, embedded as a chat widget. We can also set it up on WhatsApp if that's where most of your enquiries come from. Some clients use both.",
    },
    Faq {
        question: "What can it actually answer?",
        answer: "Whatever you train it on. Typically: what services you offer, which areas you cover, how pricing works, how to book, what happens next. The questions you answer every day.",
    },
    Faq {
        question: "What happens when someone asks something it can't answer?",
        answer: "It captures their contact details and flags it for you to follow up. It won't make something up or give wrong information — it'll say it doesn't have that answer and take a message.",
    },
    Faq {
        question: "Can it replace my contact form?",
        answer: "For most purposes, yes. It captures the same information but in a conversational way, which tends to get higher completion rates. You still get the details you need; the visitor gets a better experience.",
    },
    Faq {
        question: "How long does it take to build?",
        answer: "Usually 5–10 working days. We need to understand your business, what questions to answer and how, and then there's a testing phase before it goes live on your site.",
    },
];

const VOICE_AGENT_FAQS: &[Faq] = &[
    Faq {
        question: "What does a voice agent actually do?",
        answer: "It answers your phone and has a real conversation with the caller. It can take messages, book appointments, answer questions about your services, and escalate anything urgent directly to your mobile. It works the same at 2am as it does at 2pm.",
    },
    Faq {
        question: "Will callers know they're speaking to AI?",
        answer: "That depends on your preference. We can build it to be transparent or to sound like a member of your team — whichever fits your business. Most clients are surprised at how natural it sounds either way.",
    },
    Faq {
        question: "What happens with calls that are too complex to handle?",
        answer: "Calls that fall outside what the agent is trained to handle can be escalated straight to you, or the agent takes a message and flags it for follow-up. You define the boundaries — we build to them.",
    },
    Faq {
        question: "How quickly can we be up and running?",
        answer: "Usually 5–10 working days from the discovery call to going live. Depends on how complex the brief is and how quickly we can get the information we need from you.",
    },
    Faq {
        question: "What platform do you build on?",
        answer: "We use Retell AI — one of the better platforms available for natural-sounding voice agents. We are a certified Gold Partner, one of a small number in the UK.",
    },
];

const WORKFLOW_FAQS: &[Faq] = &[
    Faq {
        question: "What is n8n?",
        answer: "n8n is a workflow automation tool — the thing that connects your apps and makes them work together automatically. When something happens in one system, n8n triggers the right response in another. We use it because it's flexible, self-hostable, and doesn't charge per task.",
    },
    Faq {
        question: "Do I need technical knowledge to use it?",
        answer: "No. We build the workflows, test them, and run them. You just see the output — the notifications, the updated records, the automated messages. You don't need to touch the system at all unless you want to.",
    },
    Faq {
        question: "What tools does it connect to?",
        answer: "Most things with an API — which covers the vast majority of business software. Gmail, Outlook, Google Calendar, WhatsApp, Xero, QuickBooks, Stripe, GoCardless, Jobber, Tradify, WordPress, Airtable, Notion, Slack. If your tools can send or receive data, n8n can usually connect them.",
    },
    Faq {
        question: "How long does setup take?",
        answer: "Simple workflows can be built and live within a week. More complex setups — multiple tools, conditional logic, custom integrations — take 2–3 weeks. We'll tell you what to expect before we start.",
    },
    Faq {
        question: "What happens if something breaks?",
        answer: "We monitor workflows and fix anything that stops working. Tools update, APIs change, things break occasionally — that's part of what the ongoing retainer covers.",
    },
];

const TRADESPEOPLE_FAQS: &[Faq] = &[
    Faq {
        question: "Can a voice agent book jobs into my existing calendar?",
        answer: "Yes. We connect it to whatever you already use — Google Calendar, Outlook, or a booking system. When a caller wants to book a job, the agent checks availability and confirms the slot.",
    },
    Faq {
        question: "Will it work with my existing phone number?",
        answer: "Yes. Nothing changes on your end. Calls come in as normal — the AI picks up instead of voicemail when you can't answer.",
    },
    Faq {
        question: "What happens with emergency calls?",
        answer: "You set the rules. The agent can be configured to transfer urgent calls straight through to you, or to take a detailed message and send it to you immediately.",
    },
];

const LAWYER_FAQS: &[Faq] = &[
    Faq {
        question: "Will a voice agent handle confidential information?",
        answer: "No. Voice agents handle the administrative layer only — scheduling, initial enquiry capture, basic FAQs. Nothing involving privileged information or legal advice. That stays with you.",
    },
    Faq {
        question: "Can it handle new client intake calls?",
        answer: "Yes. The agent can ask the right opening questions, collect contact details and the nature of the matter, and book a proper consultation for you to assess the case. You decide what information it collects.",
    },
    Faq {
        question: "What if someone calls with an urgent legal matter?",
        answer: "You configure how it handles urgency. It can transfer the call directly to you, or take a detailed message and alert you immediately. The agent doesn't make judgements about legal merit — it just captures what it needs to and escalates appropriately.",
    },
];

const DENTIST_FAQS: &[Faq] = &[
    Faq {
        question: "Can the voice agent book into our practice management software?",
        answer: "We connect to most practice management systems. We confirm compatibility before building anything — no surprises. If your system isn't supported, we'll tell you upfront.",
    },
    Faq {
        question: "What happens if a patient is calling in pain or distress?",
        answer: "The agent is configured to recognise distress signals and escalate immediately to a human — either transferring the call or alerting your team. This is set up carefully during the build, not left to chance.",
    },
    Faq {
        question: "Will it handle appointment cancellations and rescheduling?",
        answer: "Yes. Cancellations and rescheduling are some of the most common calls dental practices receive. The agent handles both, updates the calendar, and can attempt to fill the cancelled slot from a waiting list if you have one.",
    },
];

const CONSULTANT_FAQS: &[Faq] = &[
    Faq {
        question: "Will an automated response make me look less personal?",
        answer: "In practice, a well-built chatbot that responds quickly and asks the right questions makes you look more organised, not less personal. Slow responses do more damage to perception than automation does.",
    },
    Faq {
        question: "Can the chatbot qualify leads before I speak to them?",
        answer: "Yes. We build the qualifying questions you'd ask yourself into the chatbot. By the time you follow up, you know the budget, the timeline, the specific need. You're not going into the call blind.",
    },
    Faq {
        question: "What if most of my work comes through referrals?",
        answer: "If all your work comes through referrals and you have no public-facing enquiry flow, most of this won't apply. Worth a conversation first — we'd rather tell you it doesn't make sense than have you spend money on something that won't move the needle.",
    },
];

// Page titles follow the page components, which differ from the shell
// metadata for a few audience pages.
pub static PAGES: &[PageContent] = &[
    PageContent {
        path: "/",
        meta: RouteMeta {
            title: "AI Automation Agency UK | Antek Automation",
            description: "We build AI voice agents, chatbots and automated workflows for UK service businesses and professionals. Less admin. More of the work you're actually good at.",
        },
        crumb: None,
        section: None,
        service: None,
        faqs: HOME_FAQS,
    },
    PageContent {
        path: "/contact",
        meta: RouteMeta {
            title: "Contact Us | Antek Automation | AI Agency UK",
            description: "Talk to us about AI automation | Capture every customer call 24/7 | Expert setup & support for UK service businesses | Free consultation",
        },
        crumb: Some("Contact"),
        section: None,
        service: None,
        faqs: &[],
    },
    PageContent {
        path: "/services/ai-chatbots",
        meta: RouteMeta {
            title: "AI Chatbots for UK Businesses | Antek Automation",
            description: "AI chatbots for websites and WhatsApp. Captures enquiries, qualifies leads, answers common questions — while you're working. Built for UK service businesses.",
        },
        crumb: Some("AI Chatbots"),
        section: Some(Section::Services),
        service: Some(ServiceInfo {
            name: "AI Chatbots for UK Businesses",
            description: "AI chatbots for websites and WhatsApp. Captures enquiries, qualifies leads, answers common questions — while you're working. Built for UK service businesses.",
            audience: None,
        }),
        faqs: CHATBOT_FAQS,
    },
    PageContent {
        path: "/services/ai-voice-agents",
        meta: RouteMeta {
            title: "AI Voice Agents for UK Businesses | Antek Automation",
            description: "AI voice agents that answer your calls 24/7. Books appointments, handles enquiries, sounds human. Certified Retell AI Gold Partner. UK businesses.",
        },
        crumb: Some("AI Voice Agents"),
        section: Some(Section::Services),
        service: Some(ServiceInfo {
            name: "AI Voice Agents for UK Businesses",
            description: "AI voice agents that answer your calls 24/7. Books appointments, handles enquiries, sounds human. Certified Retell AI Gold Partner. Built for UK service businesses.",
            audience: None,
        }),
        faqs: VOICE_AGENT_FAQS,
    },
    PageContent {
        path: "/services/ai-voice-assistants",
        meta: RouteMeta {
            title: "AI Voice Assistants | Antek Automation UK",
            description: "AI voice agents that answer calls 24/7 | Book appointments automatically | Never miss a call again | Boost revenue for UK service businesses",
        },
        crumb: Some("AI Voice Assistants"),
        section: Some(Section::Services),
        service: None,
        faqs: &[],
    },
    PageContent {
        path: "/services/workflow-automation",
        meta: RouteMeta {
            title: "Workflow Automation for UK Businesses | Antek Automation",
            description: "Workflow automation built on n8n. Connects your tools, removes repetitive admin, and runs in the background. Built for UK service businesses.",
        },
        crumb: Some("Workflow Automation"),
        section: Some(Section::Services),
        service: Some(ServiceInfo {
            name: "Workflow Automation for UK Businesses",
            description: "Workflow automation built on n8n. Connects your tools, removes repetitive admin, and runs in the background without you touching it. Built for UK service businesses.",
            audience: None,
        }),
        faqs: WORKFLOW_FAQS,
    },
    PageContent {
        path: "/who-we-help/tradespeople",
        meta: RouteMeta {
            title: "AI Automation for Tradespeople UK | Voice Agents & Chatbots",
            description: "You can't answer your phone mid-job. AI voice agents and chatbots built for UK tradespeople — plumbers, electricians, HVAC and more.",
        },
        crumb: Some("Tradespeople"),
        section: Some(Section::WhoWeHelp),
        service: Some(ServiceInfo {
            name: "AI Automation for Tradespeople",
            description: "AI voice agents and chatbots for UK tradespeople — answers calls, books jobs, handles enquiries while you work.",
            audience: Some("Tradespeople, plumbers, electricians, HVAC engineers"),
        }),
        faqs: TRADESPEOPLE_FAQS,
    },
    PageContent {
        path: "/who-we-help/lawyers",
        meta: RouteMeta {
            title: "AI Automation for Law Firms & Solicitors UK",
            description: "AI voice agents and chatbots for small law firms and solicitors. Client intake, appointment booking and enquiries handled automatically.",
        },
        crumb: Some("Lawyers"),
        section: Some(Section::WhoWeHelp),
        service: Some(ServiceInfo {
            name: "AI Automation for Law Firms and Solicitors",
            description: "AI voice agents and chatbots for small law firms and solicitors. Client intake, appointment booking and enquiries handled automatically.",
            audience: Some("Solicitors, law firms, legal consultants"),
        }),
        faqs: LAWYER_FAQS,
    },
    PageContent {
        path: "/who-we-help/dentists",
        meta: RouteMeta {
            title: "AI Automation for Dental Practices UK | Bookings & Enquiries",
            description: "AI voice agents and chatbots for dental practices. Appointment bookings, cancellations, new patient enquiries — handled automatically.",
        },
        crumb: Some("Dentists"),
        section: Some(Section::WhoWeHelp),
        service: Some(ServiceInfo {
            name: "AI Automation for Dental Practices",
            description: "AI voice agents and chatbots for dental practices. Appointment bookings, cancellations, new patient enquiries handled automatically.",
            audience: Some("Dental practices, dentists, dental surgeries"),
        }),
        faqs: DENTIST_FAQS,
    },
    PageContent {
        path: "/who-we-help/consultants",
        meta: RouteMeta {
            title: "AI Automation for Consultants & Freelancers UK",
            description: "AI automation for consultants and freelancers. Stop losing enquiries to slow responses. Chatbots, voice agents and workflows built around how you work.",
        },
        crumb: Some("Consultants"),
        section: Some(Section::WhoWeHelp),
        service: Some(ServiceInfo {
            name: "AI Automation for Independent Consultants and Freelancers",
            description: "AI automation for independent consultants and freelancers. Stop losing enquiries to slow response times. Chatbots, voice agents and workflows built around how you work.",
            audience: Some("Consultants, freelancers, independent professionals"),
        }),
        faqs: CONSULTANT_FAQS,
    },
    PageContent {
        path: "/about",
        meta: RouteMeta {
            title: "About Antek Automation | UK AI Automation Agency",
            description: "Small UK agency building AI voice agents, chatbots and workflow automation for service businesses. Retell AI Gold Partner. Based in Hampshire.",
        },
        crumb: Some("About"),
        section: None,
        service: None,
        faqs: &[],
    },
    PageContent {
        path: "/case-studies",
        meta: RouteMeta {
            title: "Case Studies | AI Automation Results | Antek Automation",
            description: "How UK service businesses use AI voice agents, chatbots and workflow automation to stop losing enquiries. Real examples from trades, legal and dental.",
        },
        crumb: Some("Case Studies"),
        section: None,
        service: None,
        faqs: &[],
    },
    PageContent {
        path: "/privacy-policy",
        meta: RouteMeta {
            title: "Privacy Policy | Antek Automation",
            description: "Privacy Policy for Antek Automation. Learn how we collect, process, and protect your personal data.",
        },
        crumb: Some("Privacy Policy"),
        section: None,
        service: None,
        faqs: &[],
    },
    PageContent {
        path: "/terms-of-business",
        meta: RouteMeta {
            title: "Terms of Business | Antek Automation",
            description: "Terms of Business for Antek Automation. Read our terms and conditions for AI automation services.",
        },
        crumb: Some("Terms of Business"),
        section: None,
        service: None,
        faqs: &[],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{cities, meta};

    #[test]
    fn test_every_page_has_route_metadata() {
        assert_eq!(PAGES.len(), meta::ROUTES.len());
        for page in PAGES {
            assert!(meta::route_meta(page.path).is_some(), "no route meta for {}", page.path);
        }
    }

    #[test]
    fn test_home_has_no_breadcrumbs() {
        let home = page_content("/").unwrap();
        assert!(home.breadcrumbs().is_empty());
    }

    #[test]
    fn test_service_breadcrumb_trail() {
        let page = page_content("/services/ai-chatbots").unwrap();
        let crumbs = page.breadcrumbs();
        let names: Vec<_> = crumbs.iter().map(|c| c.name.as_str()).collect();
        let urls: Vec<_> = crumbs.iter().map(|c| c.url.as_str()).collect();
        assert_eq!(names, ["Home", "Services", "AI Chatbots"]);
        assert_eq!(urls, ["/", "/#services", "/services/ai-chatbots"]);
    }

    #[test]
    fn test_audience_page_schemas() {
        let page = page_content("/who-we-help/dentists").unwrap();
        let schemas = page.schemas(site::BASE_URL);
        assert_eq!(schemas.len(), 2);
        assert_eq!(schemas[0]["@type"], "Service");
        assert_eq!(schemas[0]["audience"]["audienceType"], "Dental practices, dentists, dental surgeries");
        assert_eq!(schemas[1]["@type"], "FAQPage");
        assert_eq!(schemas[1]["mainEntity"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_home_schemas() {
        let schemas = page_content("/").unwrap().schemas("http://localhost:3000");
        assert_eq!(schemas[0]["@type"], "ProfessionalService");
        assert_eq!(schemas[0]["@id"], "http://localhost:3000/#organization");
        assert_eq!(schemas[0]["areaServed"].as_array().unwrap().len(), cities::all_cities().len());
        assert_eq!(schemas[1]["@type"], "FAQPage");
    }

    #[test]
    fn test_pages_without_schema() {
        assert!(page_content("/about").unwrap().schemas(site::BASE_URL).is_empty());
    }

    #[test]
    fn test_location_descriptor() {
        let city = cities::city_by_slug("leeds").unwrap();
        assert_eq!(location_title(city), "AI Automation Agency Serving Leeds | Antek Automation");
        let crumbs = location_breadcrumbs(city);
        assert_eq!(crumbs[1].url, "/#locations");
        assert_eq!(crumbs[2].url, "/locations/leeds");

        let schema = local_business_schema(city, site::BASE_URL);
        assert_eq!(schema["areaServed"], serde_json::json!(["Leeds", "West Yorkshire"]));
    }
}
