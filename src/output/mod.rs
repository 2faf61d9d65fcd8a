//! Output module for the page log and crawl statistics
//!
//! This module handles:
//! - Writing one `<url> <title>` line per visited page
//! - Collecting and printing crawl statistics

pub mod stats;
mod text_log;
mod traits;

pub use stats::{print_statistics, CrawlStats};
pub use text_log::TextLog;
pub use traits::{MemoryOutput, OutputError, OutputHandler, OutputResult, PageRecord};
