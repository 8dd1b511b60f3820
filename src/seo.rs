//! Document head tags for a page: title, robots, canonical, Open Graph,
//! Twitter cards and JSON-LD.

use serde_json::{json, Value};

use crate::content::pages::{self, Breadcrumb};
use crate::content::{page_content, site, City};
use crate::html::escape_html;
use crate::router::{Page, PageView};

const OG_IMAGE_WIDTH: &str = "1200";
const OG_IMAGE_HEIGHT: &str = "630";

/// Head tags for one page.
#[derive(Debug, Clone, PartialEq)]
pub struct SeoHead {
    pub title: String,
    pub description: String,
    pub path: String,
    pub breadcrumbs: Vec<Breadcrumb>,
    pub schemas: Vec<Value>,
    pub og_image: Option<String>,
    pub keywords: Option<String>,
    pub no_index: bool,
    base_url: String,
}

impl SeoHead {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        path: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        SeoHead {
            title: title.into(),
            description: description.into(),
            path: path.into(),
            breadcrumbs: Vec::new(),
            schemas: Vec::new(),
            og_image: None,
            keywords: None,
            no_index: false,
            base_url: base_url.into(),
        }
    }

    pub fn with_breadcrumbs(mut self, breadcrumbs: Vec<Breadcrumb>) -> Self {
        self.breadcrumbs = breadcrumbs;
        self
    }

    pub fn with_schemas(mut self, schemas: Vec<Value>) -> Self {
        self.schemas = schemas;
        self
    }

    /// Head for a routed page. `None` when a location slug has no city.
    pub fn for_page(page: &Page, base_url: &str) -> Option<SeoHead> {
        match page.view() {
            PageView::Location(city) => Some(Self::for_city(city, base_url)),
            PageView::LocationNotFound { slug } => {
                tracing::debug!("No SEO head for unknown location '{}'", slug);
                None
            }
            PageView::Static => {
                let content = page_content(&page.path())?;
                Some(
                    SeoHead::new(content.meta.title, content.meta.description, content.path, base_url)
                        .with_breadcrumbs(content.breadcrumbs())
                        .with_schemas(content.schemas(base_url)),
                )
            }
        }
    }

    pub fn for_city(city: &City, base_url: &str) -> SeoHead {
        SeoHead::new(
            pages::location_title(city),
            pages::location_description(city),
            city.path(),
            base_url,
        )
        .with_breadcrumbs(pages::location_breadcrumbs(city))
        .with_schemas(vec![pages::local_business_schema(city, base_url)])
    }

    /// Base URL plus path; the home page keeps its trailing slash.
    pub fn canonical_url(&self) -> String {
        format!("{}{}", self.base_url, self.path)
    }

    pub fn robots(&self) -> &'static str {
        if self.no_index { "noindex, nofollow" } else { "index, follow" }
    }

    pub fn open_graph(&self) -> Vec<(&'static str, String)> {
        let mut tags = vec![
            ("og:title", self.title.clone()),
            ("og:description", self.description.clone()),
            ("og:url", self.canonical_url()),
            ("og:type", "website".to_string()),
            ("og:site_name", site::SITE_NAME.to_string()),
            ("og:locale", site::LOCALE.to_string()),
        ];
        if let Some(image) = &self.og_image {
            tags.push(("og:image", image.clone()));
            tags.push(("og:image:width", OG_IMAGE_WIDTH.to_string()));
            tags.push(("og:image:height", OG_IMAGE_HEIGHT.to_string()));
            tags.push(("og:image:alt", self.title.clone()));
        }
        tags
    }

    pub fn twitter(&self) -> Vec<(&'static str, String)> {
        let mut tags = vec![
            ("twitter:card", "summary_large_image".to_string()),
            ("twitter:site", site::TWITTER_HANDLE.to_string()),
            ("twitter:title", self.title.clone()),
            ("twitter:description", self.description.clone()),
        ];
        if let Some(image) = &self.og_image {
            tags.push(("twitter:image", image.clone()));
            tags.push(("twitter:image:alt", self.title.clone()));
        }
        tags
    }

    /// `BreadcrumbList` with absolute item URLs, or `None` without a trail.
    pub fn breadcrumb_schema(&self) -> Option<Value> {
        if self.breadcrumbs.is_empty() {
            return None;
        }
        let items: Vec<Value> = self
            .breadcrumbs
            .iter()
            .enumerate()
            .map(|(index, crumb)| {
                json!({
                    "@type": "ListItem",
                    "position": index + 1,
                    "name": crumb.name,
                    "item": format!("{}{}", self.base_url, crumb.url),
                })
            })
            .collect();

        Some(json!({
            "@context": "https://schema.org",
            "@type": "BreadcrumbList",
            "itemListElement": items,
        }))
    }

    /// One schema is published as-is; several share a `@graph`.
    pub fn page_schema(&self) -> Option<Value> {
        match self.schemas.as_slice() {
            [] => None,
            [single] => Some(single.clone()),
            many => Some(json!({
                "@context": "https://schema.org",
                "@graph": many,
            })),
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("<title>{}</title>\n", escape_html(&self.title)));
        push_meta(&mut out, "name", "description", &self.description);
        if let Some(keywords) = &self.keywords {
            push_meta(&mut out, "name", "keywords", keywords);
        }
        push_meta(&mut out, "name", "robots", self.robots());
        out.push_str(&format!(
            "<link rel=\"canonical\" href=\"{}\" />\n",
            escape_html(&self.canonical_url())
        ));
        for (property, content) in self.open_graph() {
            push_meta(&mut out, "property", property, &content);
        }
        for (name, content) in self.twitter() {
            push_meta(&mut out, "name", name, &content);
        }
        if let Some(schema) = self.breadcrumb_schema() {
            push_json_ld(&mut out, "breadcrumb-schema", &schema);
        }
        if let Some(schema) = self.page_schema() {
            push_json_ld(&mut out, "page-schema", &schema);
        }
        out
    }
}

fn push_meta(out: &mut String, attr: &str, key: &str, content: &str) {
    out.push_str(&format!(
        "<meta {}=\"{}\" content=\"{}\" />\n",
        attr,
        key,
        escape_html(content)
    ));
}

fn push_json_ld(out: &mut String, id: &str, schema: &Value) {
    // A literal "</" would close the script element early.
    let json = schema.to_string().replace("</", "<\\/");
    out.push_str(&format!(
        "<script id=\"{}\" type=\"application/ld+json\">{}</script>\n",
        id, json
    ));
}
