/// Checks if a host matches a domain pattern
///
/// Two pattern forms are supported:
/// 1. Exact: "example.com" matches only "example.com"
/// 2. Wildcard: "*.example.com" matches "example.com" and any subdomain of it
///
/// Comparison ignores ASCII case and a trailing root dot on either side.
///
/// # Examples
///
/// ```
/// use frontier_crawl::url::matches_wildcard;
///
/// assert!(matches_wildcard("crazyant.net", "CrazyAnt.net"));
/// assert!(matches_wildcard("*.crazyant.net", "www.crazyant.net"));
/// assert!(!matches_wildcard("*.crazyant.net", "notcrazyant.net"));
/// ```
pub fn matches_wildcard(pattern: &str, candidate: &str) -> bool {
    let pattern = pattern.trim_end_matches('.').to_ascii_lowercase();
    let candidate = candidate.trim_end_matches('.').to_ascii_lowercase();

    match pattern.strip_prefix("*.") {
        Some(base) => {
            candidate == base
                || candidate
                    .strip_suffix(base)
                    .is_some_and(|prefix| prefix.ends_with('.'))
        }
        None => candidate == pattern,
    }
}
