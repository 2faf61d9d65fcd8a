//! HTML parser for extracting the page title and anchor links
//!
//! Links are resolved against the page URL, stripped of fragments and
//! de-duplicated within the page, in document order.

use scraper::{Html, Selector};
use std::collections::HashSet;
use url::Url;

/// Extracted information from an HTML page
#[derive(Debug, Clone)]
pub struct ParsedPage {
    /// The page title (from the first <title> tag), whitespace-collapsed
    pub title: Option<String>,

    /// Unique absolute links found in `<a href>` tags
    pub links: Vec<Url>,
}

/// Parses HTML content and extracts the title and links
///
/// # Link Extraction Rules
///
/// **Include:** every `<a href="...">` that resolves to an http(s) URL
///
/// **Exclude:**
/// - `javascript:`, `mailto:`, `tel:` and `data:` links
/// - Fragment-only links (`#section`)
/// - Hrefs that do not resolve against the base URL
///
/// # Example
///
/// ```
/// use frontier_crawl::crawler::parse_html;
/// use url::Url;
///
/// let html = r#"<html><head><title>Test</title></head><body><a href="/1.html">Link</a></body></html>"#;
/// let base_url = Url::parse("http://example.test/").unwrap();
/// let parsed = parse_html(html, &base_url);
/// assert_eq!(parsed.title.as_deref(), Some("Test"));
/// assert_eq!(parsed.links[0].as_str(), "http://example.test/1.html");
/// ```
pub fn parse_html(html: &str, base_url: &Url) -> ParsedPage {
    let document = Html::parse_document(html);

    ParsedPage {
        title: extract_title(&document),
        links: extract_links(&document, base_url),
    }
}

/// Extracts the page title from the HTML document
///
/// Interior whitespace (including newlines) collapses to single spaces so the
/// title fits on one log line. An empty title counts as missing.
fn extract_title(document: &Html) -> Option<String> {
    let title_selector = Selector::parse("title").ok()?;

    document
        .select(&title_selector)
        .next()
        .map(|element| {
            element
                .text()
                .flat_map(str::split_whitespace)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .filter(|s| !s.is_empty())
}

/// Extracts unique, resolvable anchor links from the HTML document
fn extract_links(document: &Html, base_url: &Url) -> Vec<Url> {
    let Ok(a_selector) = Selector::parse("a[href]") else {
        return Vec::new();
    };

    let mut seen = HashSet::new();
    document
        .select(&a_selector)
        .filter_map(|element| element.value().attr("href"))
        .filter_map(|href| resolve_link(href, base_url))
        .filter(|url| seen.insert(url.as_str().to_string()))
        .collect()
}

/// Resolves a link href to an absolute http(s) URL without fragment
fn resolve_link(href: &str, base_url: &Url) -> Option<Url> {
    let href = href.trim();

    if href.is_empty() || href.starts_with('#') {
        return None;
    }

    if href.starts_with("javascript:")
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
        || href.starts_with("data:")
    {
        return None;
    }

    let mut absolute_url = base_url.join(href).ok()?;
    if absolute_url.scheme() != "http" && absolute_url.scheme() != "https" {
        return None;
    }

    absolute_url.set_fragment(None);
    Some(absolute_url)
}
