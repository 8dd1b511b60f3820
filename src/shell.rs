//! The SPA shell: `index.html` with per-route head tags filled in.
//!
//! Every document request that no other route claims is answered with the
//! shell, so crawlers and link unfurlers see the right title, description
//! and canonical URL without running the client bundle.

use std::borrow::Cow;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::config::Config;
use crate::content::{meta_for_path, normalize_path, site, RouteMeta};
use crate::html::{self, HeadValues};

/// Shell document compiled into the binary.
pub const EMBEDDED_SHELL: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/static/index.html"));

/// Where the shell document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellTemplate {
    Embedded,
    /// Read on every request so a redeployed bundle is picked up without a restart.
    File(PathBuf),
}

impl ShellTemplate {
    pub fn from_config(config: &Config) -> Self {
        match &config.shell_template_path {
            Some(path) => ShellTemplate::File(path.clone()),
            None => ShellTemplate::Embedded,
        }
    }

    pub async fn load(&self) -> Result<Cow<'static, str>> {
        match self {
            ShellTemplate::Embedded => Ok(Cow::Borrowed(EMBEDDED_SHELL)),
            ShellTemplate::File(path) => {
                let html = tokio::fs::read_to_string(path)
                    .await
                    .with_context(|| format!("Failed to read shell template {}", path.display()))?;
                Ok(Cow::Owned(html))
            }
        }
    }
}

/// Result of rendering the shell for one request path.
#[derive(Debug, Clone)]
pub struct RenderedShell {
    pub path: String,
    pub meta: &'static RouteMeta,
    pub canonical_url: String,
    pub html: String,
}

/// Fills the shell's head placeholders for `request_path`.
pub fn render(template: &str, request_path: &str, base_url: &str) -> RenderedShell {
    let path = normalize_path(request_path);
    let meta = meta_for_path(path);
    let canonical_url = site::absolute_url(base_url, path);

    let html = html::substitute(template, &HeadValues {
        title: meta.title,
        description: meta.description,
        canonical_url: &canonical_url,
    });
    if let Some(token) = html::find_placeholder(&html) {
        tracing::warn!("Shell template token {} has no value for {}", token, path);
    }

    RenderedShell {
        path: path.to_string(),
        meta,
        canonical_url,
        html,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::meta::{LOCATIONS, ROUTES};
    use crate::html::{has_placeholders, Placeholder};

    #[test]
    fn test_embedded_shell_carries_every_placeholder() {
        for placeholder in Placeholder::ALL {
            assert!(EMBEDDED_SHELL.contains(placeholder.token()), "missing {}", placeholder.token());
        }
    }

    #[test]
    fn test_no_placeholders_remain_for_any_route() {
        let paths = ROUTES
            .iter()
            .map(|(path, _)| path.to_string())
            .chain(LOCATIONS.iter().map(|(slug, _)| format!("/locations/{}", slug)))
            .chain(["/unknown".to_string(), "/locations/atlantis".to_string()]);

        for path in paths {
            let rendered = render(EMBEDDED_SHELL, &path, site::BASE_URL);
            assert!(!has_placeholders(&rendered.html), "placeholder left for {}", path);
        }
    }

    #[test]
    fn test_render_leaves_unknown_tokens() {
        let rendered = render("<title>__PAGE_TITLE__</title><p>__BUILD_ID__</p>", "/about", site::BASE_URL);
        assert!(rendered.html.starts_with("<title>About Antek Automation"));
        assert_eq!(html::find_placeholder(&rendered.html), Some("__BUILD_ID__"));
    }

    #[test]
    fn test_render_home() {
        let rendered = render(EMBEDDED_SHELL, "/", site::BASE_URL);
        assert_eq!(rendered.path, "/");
        assert_eq!(rendered.canonical_url, "https://www.aiautomationagencyuk.com");
        assert!(rendered.html.contains("<title>AI Automation Agency UK | Antek Automation</title>"));
        assert!(rendered.html.contains("More of the work you're actually good at."));
    }

    #[test]
    fn test_render_strips_trailing_slash() {
        let rendered = render(EMBEDDED_SHELL, "/case-studies/", "http://localhost:3000");
        assert_eq!(rendered.path, "/case-studies");
        assert_eq!(rendered.canonical_url, "http://localhost:3000/case-studies");
        assert!(rendered.html.contains(r#"<link rel="canonical" href="http://localhost:3000/case-studies" />"#));
        assert!(rendered.html.contains(r#"<meta property="og:url" content="http://localhost:3000/case-studies" />"#));
    }

    #[test]
    fn test_render_escapes_metadata() {
        let rendered = render(EMBEDDED_SHELL, "/who-we-help/lawyers", site::BASE_URL);
        assert!(rendered.html.contains("<title>AI Automation for Law Firms &amp; Solicitors UK</title>"));
        assert!(rendered.html.contains(r#"<meta property="og:title" content="AI Automation for Law Firms &amp; Solicitors UK" />"#));
    }

    #[test]
    fn test_render_unknown_path_uses_home_meta_with_own_canonical() {
        let rendered = render(EMBEDDED_SHELL, "/no-such-page", site::BASE_URL);
        assert_eq!(rendered.meta.title, "AI Automation Agency UK | Antek Automation");
        assert_eq!(rendered.canonical_url, "https://www.aiautomationagencyuk.com/no-such-page");
    }

    #[test]
    fn test_render_location() {
        let rendered = render(EMBEDDED_SHELL, "/locations/manchester", site::BASE_URL);
        assert!(rendered.html.contains("<title>AI Automation Agency Manchester | Antek Automation</title>"));
    }

    #[tokio::test]
    async fn test_load_embedded() {
        let html = ShellTemplate::Embedded.load().await.unwrap();
        assert!(html.contains("<div id=\"root\"></div>"));
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("shell-{}.html", uuid::Uuid::new_v4()));
        tokio::fs::write(&path, "<title>__PAGE_TITLE__</title>").await.unwrap();

        let template = ShellTemplate::File(path.clone());
        let html = template.load().await.unwrap();
        assert_eq!(html, "<title>__PAGE_TITLE__</title>");

        tokio::fs::remove_file(&path).await.unwrap();
    }

    #[tokio::test]
    async fn test_load_missing_file_errors() {
        let path = std::env::temp_dir().join(format!("missing-{}.html", uuid::Uuid::new_v4()));
        let err = ShellTemplate::File(path).load().await.unwrap_err();
        assert!(err.to_string().contains("Failed to read shell template"));
    }

    #[test]
    fn test_from_config() {
        let mut config = Config::default();
        assert_eq!(ShellTemplate::from_config(&config), ShellTemplate::Embedded);

        config.shell_template_path = Some(PathBuf::from("dist/index.html"));
        assert_eq!(ShellTemplate::from_config(&config), ShellTemplate::File(PathBuf::from("dist/index.html")));
    }
}
