//! HTML escaping and shell placeholder substitution.

use std::borrow::Cow;

const ESCAPE_CHARS: [char; 4] = ['&', '<', '>', '"'];

#[inline]
fn escape_char(c: char) -> Option<&'static str> {
    match c {
        '&' => Some("&amp;"),
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '"' => Some("&quot;"),
        _ => None,
    }
}

/// Escapes text for use in element content or a double-quoted attribute.
///
/// Borrows when nothing needs escaping.
pub fn escape_html(s: &str) -> Cow<'_, str> {
    if !s.contains(ESCAPE_CHARS) {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len() + 16);
    for c in s.chars() {
        match escape_char(c) {
            Some(entity) => out.push_str(entity),
            None => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Tokens the SPA shell carries in its `<head>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    OgTitle,
    OgDescription,
    OgUrl,
    CanonicalUrl,
    PageTitle,
    MetaDescription,
}

impl Placeholder {
    /// Substitution order.
    pub const ALL: [Placeholder; 6] = [
        Placeholder::OgTitle,
        Placeholder::OgDescription,
        Placeholder::OgUrl,
        Placeholder::CanonicalUrl,
        Placeholder::PageTitle,
        Placeholder::MetaDescription,
    ];

    pub fn token(self) -> &'static str {
        match self {
            Placeholder::OgTitle => "__OG_TITLE__",
            Placeholder::OgDescription => "__OG_DESCRIPTION__",
            Placeholder::OgUrl => "__OG_URL__",
            Placeholder::CanonicalUrl => "__CANONICAL_URL__",
            Placeholder::PageTitle => "__PAGE_TITLE__",
            Placeholder::MetaDescription => "__META_DESCRIPTION__",
        }
    }
}

/// Values for one substitution pass.
#[derive(Debug, Clone, Copy)]
pub struct HeadValues<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub canonical_url: &'a str,
}

impl HeadValues<'_> {
    fn value_for(&self, placeholder: Placeholder) -> Cow<'_, str> {
        match placeholder {
            Placeholder::OgTitle | Placeholder::PageTitle => escape_html(self.title),
            Placeholder::OgDescription | Placeholder::MetaDescription => {
                escape_html(self.description)
            }
            // The path comes from the request line and may carry quotes.
            Placeholder::OgUrl | Placeholder::CanonicalUrl => escape_html(self.canonical_url),
        }
    }
}

/// Replaces every occurrence of each placeholder, in [`Placeholder::ALL`] order.
pub fn substitute(template: &str, values: &HeadValues<'_>) -> String {
    let mut html = template.to_string();
    for placeholder in Placeholder::ALL {
        let token = placeholder.token();
        if html.contains(token) {
            html = html.replace(token, &values.value_for(placeholder));
        } else {
            tracing::trace!("Shell template has no {} token", token);
        }
    }
    html
}

/// Finds the first `__NAME__` token (uppercase letters, digits, underscores)
/// left in a document.
pub fn find_placeholder(html: &str) -> Option<&str> {
    let bytes = html.as_bytes();
    let mut start = 0;
    while let Some(offset) = html[start..].find("__") {
        let open = start + offset;
        let name_start = open + 2;
        let mut end = name_start;
        while end < bytes.len()
            && (bytes[end].is_ascii_uppercase() || bytes[end].is_ascii_digit() || bytes[end] == b'_')
        {
            end += 1;
        }
        // The run must end in the closing "__" and carry a name in between.
        let run = &html[name_start..end];
        let name = run.trim_end_matches('_');
        if run.len() >= name.len() + 2 && !name.is_empty() && name.starts_with(|c: char| c.is_ascii_uppercase()) {
            return Some(&html[open..name_start + name.len() + 2]);
        }
        start = name_start;
    }
    None
}

#[cfg(test)]
pub fn has_placeholders(html: &str) -> bool {
    find_placeholder(html).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHELL: &str = r#"<head><title>__PAGE_TITLE__</title><meta name="description" content="__META_DESCRIPTION__"><meta property="og:title" content="__OG_TITLE__"><meta property="og:description" content="__OG_DESCRIPTION__"><meta property="og:url" content="__OG_URL__"><link rel="canonical" href="__CANONICAL_URL__"></head>"#;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a & b"), "a &amp; b");
        assert_eq!(escape_html("<b>\"hi\"</b>"), "&lt;b&gt;&quot;hi&quot;&lt;/b&gt;");
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
        assert_eq!(escape_html("you're"), "you're");
    }

    #[test]
    fn test_escape_html_borrows_clean_input() {
        assert!(matches!(escape_html("plain text"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_substitute_fills_every_token() {
        let values = HeadValues {
            title: "Contact Us | Antek Automation | AI Agency UK",
            description: "Expert setup & support",
            canonical_url: "https://www.aiautomationagencyuk.com/contact",
        };
        let html = substitute(SHELL, &values);

        assert!(!has_placeholders(&html), "left over: {:?}", find_placeholder(&html));
        assert!(html.contains("<title>Contact Us | Antek Automation | AI Agency UK</title>"));
        assert!(html.contains(r#"content="Expert setup &amp; support""#));
        assert!(html.contains(r#"href="https://www.aiautomationagencyuk.com/contact""#));
        assert!(html.contains(r#"<meta property="og:url" content="https://www.aiautomationagencyuk.com/contact">"#));
    }

    #[test]
    fn test_substitute_replaces_repeated_tokens() {
        let html = substitute("__PAGE_TITLE__|__PAGE_TITLE__", &HeadValues {
            title: "T",
            description: "D",
            canonical_url: "U",
        });
        assert_eq!(html, "T|T");
    }

    #[test]
    fn test_substitute_escapes_urls() {
        let html = substitute(r#"<link rel="canonical" href="__CANONICAL_URL__">"#, &HeadValues {
            title: "T",
            description: "D",
            canonical_url: "https://example.com/x\"onmouseover=alert(1)&y",
        });
        assert_eq!(
            html,
            r#"<link rel="canonical" href="https://example.com/x&quot;onmouseover=alert(1)&amp;y">"#
        );
    }

    #[test]
    fn test_find_placeholder() {
        assert_eq!(find_placeholder("<p>__FOO_BAR__</p>"), Some("__FOO_BAR__"));
        assert_eq!(find_placeholder("snake_case and __init"), None);
        assert_eq!(find_placeholder("a ____ b"), None);
        assert_eq!(find_placeholder("x__OG_URL__y"), Some("__OG_URL__"));
        assert!(!has_placeholders("<html></html>"));
    }
}
