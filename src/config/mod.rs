//! Configuration module for Frontier-Crawl
//!
//! This module handles loading, parsing, and validating TOML configuration
//! files, and turning the filter section into a [`LinkFilter`](crate::url::LinkFilter).
//!
//! # Example
//!
//! ```no_run
//! use frontier_crawl::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("crawl.toml")).unwrap();
//! println!("Request timeout: {}s", config.http.timeout_secs);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, CrawlerConfig, FilterConfig, HttpConfig, OutputConfig, DEFAULT_LOG_PATH,
    DEFAULT_PATH_PATTERN, DEFAULT_TIMEOUT_SECS,
};

// Re-export parser functions
pub use parser::{build_filter, compute_config_hash, load_config, load_config_with_hash};
pub use validation::{validate, validate_seed};
