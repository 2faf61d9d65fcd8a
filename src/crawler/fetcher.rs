//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler:
//! - Building the HTTP client with user agent and timeout
//! - GET requests to fetch page content
//! - Error classification into transport and status failures
//!
//! Nothing here retries. A failed fetch is reported once and the crawl
//! moves on to the next URL.

use crate::config::HttpConfig;
use crate::PageError;
use reqwest::{redirect::Policy, Client};
use std::time::Duration;

/// Maximum number of redirects followed per request
const MAX_REDIRECTS: usize = 10;

/// Result of a fetch operation
#[derive(Debug)]
pub enum FetchResult {
    /// Successfully fetched the page
    Success {
        /// Final URL after redirects
        final_url: String,
        /// HTTP status code
        status_code: u16,
        /// Page body content
        body: String,
    },

    /// Server answered with a non-success status
    HttpError {
        /// The HTTP status code
        status_code: u16,
    },

    /// Network error (connection refused, timeout, body read failure)
    NetworkError {
        /// Error description
        error: String,
        /// Whether the request hit the timeout
        timed_out: bool,
    },
}

/// A successfully fetched page
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// Final URL after redirects
    pub final_url: String,
    /// HTTP status code
    pub status_code: u16,
    /// Page body content
    pub body: String,
}

impl FetchResult {
    /// Splits the outcome into the fetched page or the page error it represents
    pub fn into_page(self, url: &str) -> Result<FetchedPage, PageError> {
        match self {
            Self::Success {
                final_url,
                status_code,
                body,
            } => Ok(FetchedPage {
                final_url,
                status_code,
                body,
            }),
            Self::HttpError { status_code } => Err(PageError::HttpStatus {
                url: url.to_string(),
                status: status_code,
            }),
            Self::NetworkError {
                timed_out: true, ..
            } => Err(PageError::Timeout {
                url: url.to_string(),
            }),
            Self::NetworkError { error, .. } => Err(PageError::Transport {
                url: url.to_string(),
                message: error,
            }),
        }
    }
}

/// Builds an HTTP client with proper configuration
///
/// # Example
///
/// ```no_run
/// use frontier_crawl::config::HttpConfig;
/// use frontier_crawl::crawler::build_http_client;
///
/// let client = build_http_client(&HttpConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &HttpConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(Duration::from_secs(config.timeout_secs))
        .redirect(Policy::limited(MAX_REDIRECTS))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL with a single GET request
///
/// # Outcomes
///
/// | Condition | Result |
/// |-----------|--------|
/// | 2xx with readable body | `Success` |
/// | Any other status | `HttpError` |
/// | Timeout (connect or total) | `NetworkError { timed_out: true }` |
/// | Connection refused, DNS, TLS, redirect limit | `NetworkError` |
/// | Body read failure | `NetworkError` |
pub async fn fetch_url(client: &Client, url: &str) -> FetchResult {
    let response = match client.get(url).send().await {
        Ok(response) => response,
        Err(e) => return classify_error(&e),
    };

    let status = response.status();
    if !status.is_success() {
        return FetchResult::HttpError {
            status_code: status.as_u16(),
        };
    }

    let final_url = response.url().to_string();

    match response.text().await {
        Ok(body) => FetchResult::Success {
            final_url,
            status_code: status.as_u16(),
            body,
        },
        Err(e) => classify_error(&e),
    }
}

/// Maps a reqwest error onto a network failure
fn classify_error(e: &reqwest::Error) -> FetchResult {
    if e.is_timeout() {
        FetchResult::NetworkError {
            error: "Request timeout".to_string(),
            timed_out: true,
        }
    } else if e.is_connect() {
        FetchResult::NetworkError {
            error: format!("Connection failed: {}", e),
            timed_out: false,
        }
    } else {
        FetchResult::NetworkError {
            error: e.to_string(),
            timed_out: false,
        }
    }
}
