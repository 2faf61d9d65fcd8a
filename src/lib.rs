//! Frontier-Crawl: a breadth-first, single-site page crawler
//!
//! This crate walks a link graph from one seed URL, fetching each page once,
//! recording `<url> <title>` for every page it visits, and following only the
//! links a configurable predicate accepts.

pub mod config;
pub mod crawler;
pub mod output;
pub mod url;

use thiserror::Error;

/// Main error type for Frontier-Crawl operations
///
/// These errors end a crawl. Problems with an individual page are
/// reported through [`PageError`] instead and never stop the loop.
#[derive(Debug, Error)]
pub enum CrawlError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("Frontier error: {0}")]
    Frontier(#[from] FrontierError),

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors for a single page; logged and skipped by the crawl loop
#[derive(Debug, Error)]
pub enum PageError {
    #[error("Transport error for {url}: {message}")]
    Transport { url: String, message: String },

    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("HTTP {status} for {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("Parse error for {url}: {message}")]
    Parse { url: String, message: String },
}

impl PageError {
    /// Returns true for connection failures and timeouts
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. } | Self::Timeout { .. })
    }
}

/// Frontier errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrontierError {
    #[error("Frontier has no pending URLs")]
    Empty,
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),

    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),
}

/// Result type alias for Frontier-Crawl operations
pub type Result<T> = std::result::Result<T, CrawlError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{Coordinator, Frontier};
pub use output::{CrawlStats, PageRecord};
pub use crate::url::{LinkFilter, LinkPredicate};
