//! URL handling module for Frontier-Crawl
//!
//! This module provides the link predicates that decide which discovered
//! links are eligible for traversal, plus the domain helpers they rely on.

mod domain;
mod filter;
mod matcher;

// Re-export main items
pub use domain::extract_domain;
pub use filter::{LinkFilter, LinkPredicate};
pub use matcher::matches_wildcard;
