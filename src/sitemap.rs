//! `sitemap.xml` and `robots.txt` for crawlers.
//!
//! The sitemap lists every routed page, including one landing page per city,
//! as absolute canonical URLs.

use std::borrow::Cow;

use chrono::NaiveDate;

use crate::content::site;
use crate::router::Page;

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

pub struct Sitemap {
    urls: Vec<UrlEntry>,
}

struct UrlEntry {
    loc: String,
    lastmod: NaiveDate,
}

impl Sitemap {
    pub fn build(base_url: &str, lastmod: NaiveDate) -> Self {
        let urls = Page::all()
            .map(|page| UrlEntry {
                loc: site::absolute_url(base_url, &page.path()),
                lastmod,
            })
            .collect();

        Self { urls }
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn into_xml(self) -> String {
        let mut xml = String::with_capacity(4096);

        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str("<urlset xmlns=\"");
        xml.push_str(SITEMAP_NS);
        xml.push_str("\">\n");

        for entry in self.urls {
            xml.push_str("  <url>\n    <loc>");
            xml.push_str(&escape_xml(&entry.loc));
            xml.push_str("</loc>\n    <lastmod>");
            xml.push_str(&entry.lastmod.format("%Y-%m-%d").to_string());
            xml.push_str("</lastmod>\n  </url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }
}

pub fn robots_txt(base_url: &str) -> String {
    format!("User-agent: *\nAllow: /\n\nSitemap: {}/sitemap.xml\n", base_url)
}

fn escape_xml(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }

    Cow::Owned(
        s.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&apos;"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::meta::{LOCATIONS, ROUTES};

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
    }

    #[test]
    fn test_sitemap_lists_routes_and_locations() {
        let sitemap = Sitemap::build(site::BASE_URL, date());
        assert_eq!(sitemap.len(), ROUTES.len() + LOCATIONS.len());

        let xml = sitemap.into_xml();
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n"));
        assert!(xml.contains("<loc>https://www.aiautomationagencyuk.com</loc>"));
        assert!(xml.contains("<loc>https://www.aiautomationagencyuk.com/who-we-help/consultants</loc>"));
        assert!(xml.contains("<loc>https://www.aiautomationagencyuk.com/locations/glasgow</loc>"));
        assert_eq!(xml.matches("<lastmod>2025-03-14</lastmod>").count(), ROUTES.len() + LOCATIONS.len());
        assert!(xml.ends_with("</urlset>\n"));
    }

    #[test]
    fn test_sitemap_escapes_locations() {
        let xml = Sitemap::build("http://localhost:3000?a=1&b=2", date()).into_xml();
        assert!(xml.contains("<loc>http://localhost:3000?a=1&amp;b=2/contact</loc>"));
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("hello"), "hello");
        assert_eq!(escape_xml("it's <a & b>"), "it&apos;s &lt;a &amp; b&gt;");
    }

    #[test]
    fn test_robots_txt() {
        assert_eq!(
            robots_txt("http://localhost:3000"),
            "User-agent: *\nAllow: /\n\nSitemap: http://localhost:3000/sitemap.xml\n"
        );
    }
}
