//! Crawler module for web page fetching and processing
//!
//! This module contains the core crawling logic, including:
//! - The URL frontier (pending queue plus visited set)
//! - HTTP fetching with a bounded timeout
//! - HTML parsing and link extraction
//! - The crawl loop tying them together

mod coordinator;
mod fetcher;
mod frontier;
mod parser;

pub use coordinator::{enqueue_links, Coordinator};
pub use fetcher::{build_http_client, fetch_url, FetchResult, FetchedPage};
pub use frontier::Frontier;
pub use parser::{parse_html, ParsedPage};

use crate::config::Config;
use crate::output::CrawlStats;
use crate::CrawlError;
use url::Url;

/// Runs a complete crawl from a single seed
///
/// This is the main entry point for starting a crawl. It will:
/// 1. Build the link filter and open the page log
/// 2. Seed a fresh frontier
/// 3. Fetch, record and follow links until the frontier is drained
///
/// Every call starts from an empty frontier; nothing carries over between
/// runs. The seed's fragment is dropped before it is enqueued.
///
/// # Example
///
/// ```no_run
/// use frontier_crawl::config::Config;
/// use frontier_crawl::crawler::crawl;
/// use url::Url;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let seed = Url::parse("http://www.crazyant.net/")?;
/// let stats = crawl(&Config::default(), &seed).await?;
/// println!("{} pages recorded", stats.pages_recorded);
/// # Ok(())
/// # }
/// ```
pub async fn crawl(config: &Config, seed: &Url) -> Result<CrawlStats, CrawlError> {
    let mut seed = seed.clone();
    seed.set_fragment(None);

    let mut coordinator = Coordinator::from_config(config, &seed)?;
    let mut frontier = Frontier::with_seed(seed.as_str());
    coordinator.run(&mut frontier).await
}
