use ::url::Url;

/// Extracts the lowercase host from a URL
///
/// Ports are not part of the result. Returns `None` for URLs without a host
/// (`mailto:`, `data:` and the like).
///
/// # Examples
///
/// ```
/// use url::Url;
/// use frontier_crawl::url::extract_domain;
///
/// let url = Url::parse("http://WWW.CrazyAnt.net:8080/1.html").unwrap();
/// assert_eq!(extract_domain(&url), Some("www.crazyant.net".to_string()));
/// ```
pub fn extract_domain(url: &Url) -> Option<String> {
    url.host_str().map(|h| h.to_lowercase())
}
