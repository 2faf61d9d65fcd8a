//! Link predicates
//!
//! A crawl only follows links that its predicate accepts. The predicate is
//! handed to the [`Coordinator`](crate::crawler::Coordinator) when it is
//! built, so one crawl loop can serve any target site.

use super::{extract_domain, matches_wildcard};
use ::url::Url;
use regex::Regex;

/// Decides whether a discovered link is eligible for traversal
pub trait LinkPredicate {
    /// Returns true if the absolute URL should be added to the frontier
    fn accepts(&self, url: &Url) -> bool;
}

impl<F> LinkPredicate for F
where
    F: Fn(&Url) -> bool,
{
    fn accepts(&self, url: &Url) -> bool {
        self(url)
    }
}

/// Built-in link filters
#[derive(Debug, Clone)]
pub enum LinkFilter {
    /// Regex over the full serialized URL, e.g. `^http://example\.test/\d+\.html$`
    Pattern(Regex),

    /// Host matched against a domain pattern, path against an anchored regex
    ///
    /// Scheme and port are not compared: `http` and `https` links on any
    /// port of a matching host are accepted. Use [`LinkFilter::Pattern`] to
    /// pin either.
    SameDomain {
        /// Domain pattern, see [`matches_wildcard`]
        domain: String,
        /// Anchored regex over the path without its leading slash
        path: Regex,
    },
}

impl LinkFilter {
    /// Builds a full-URL pattern filter
    pub fn pattern(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self::Pattern(Regex::new(pattern)?))
    }

    /// Builds a same-domain filter
    ///
    /// `path_pattern` is anchored at both ends, so `\d+\.html` accepts
    /// `/42.html` but not `/archive/42.html`.
    ///
    /// # Example
    ///
    /// ```
    /// use frontier_crawl::url::{LinkFilter, LinkPredicate};
    /// use url::Url;
    ///
    /// let filter = LinkFilter::same_domain("www.crazyant.net", r"\d+\.html").unwrap();
    /// assert!(filter.accepts(&Url::parse("http://www.crazyant.net/2104.html").unwrap()));
    /// assert!(!filter.accepts(&Url::parse("http://www.crazyant.net/about").unwrap()));
    /// ```
    pub fn same_domain(domain: &str, path_pattern: &str) -> Result<Self, regex::Error> {
        let path = Regex::new(&format!("^(?:{})$", path_pattern))?;
        Ok(Self::SameDomain {
            domain: domain.to_ascii_lowercase(),
            path,
        })
    }
}

impl LinkPredicate for LinkFilter {
    fn accepts(&self, url: &Url) -> bool {
        match self {
            Self::Pattern(regex) => regex.is_match(url.as_str()),
            Self::SameDomain { domain, path } => {
                if url.scheme() != "http" && url.scheme() != "https" {
                    return false;
                }
                let Some(host) = extract_domain(url) else {
                    return false;
                };
                matches_wildcard(domain, &host) && path.is_match(url.path().trim_start_matches('/'))
            }
        }
    }
}

impl std::fmt::Display for LinkFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pattern(regex) => write!(f, "pattern {}", regex.as_str()),
            Self::SameDomain { domain, path } => {
                write!(f, "domain {} with path {}", domain, path.as_str())
            }
        }
    }
}
