//! Brand-wide constants shared by the metadata, SEO and sitemap code.

/// Public origin used for canonical and Open Graph URLs unless
/// `SITE_BASE_URL` overrides it.
pub const BASE_URL: &str = "https://www.aiautomationagencyuk.com";

pub const SITE_NAME: &str = "Antek Automation";
pub const LOCALE: &str = "en_GB";
pub const TWITTER_HANDLE: &str = "@antekautomation";

pub const TELEPHONE: &str = "+443330389960";
pub const TELEPHONE_DISPLAY: &str = "0333 038 9960";
pub const CONTACT_EMAIL: &str = "hello@antekautomation.com";
pub const BOOKING_URL: &str = "https://cal.com/antek-automation/30min";

/// Builds an absolute URL for a site path. The home path maps to the bare
/// origin, matching how canonical URLs are published.
pub fn absolute_url(base_url: &str, path: &str) -> String {
    if path == "/" {
        base_url.to_string()
    } else {
        format!("{}{}", base_url, path)
    }
}
