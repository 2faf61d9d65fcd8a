//! Crawler coordinator - main crawl loop
//!
//! The coordinator owns the HTTP client, the link predicate and the page log.
//! The frontier belongs to the caller and is lent to [`Coordinator::run`],
//! which drains it one URL at a time:
//! - Fetch the page (single GET, bounded timeout, no retry)
//! - Parse the title and links
//! - Write `<url> <title>` to the log
//! - Add links accepted by the predicate to the frontier

use crate::config::{build_filter, Config, HttpConfig};
use crate::crawler::fetcher::{build_http_client, fetch_url};
use crate::crawler::frontier::Frontier;
use crate::crawler::parser::parse_html;
use crate::output::{CrawlStats, OutputHandler, PageRecord, TextLog};
use crate::url::LinkPredicate;
use crate::{CrawlError, PageError};
use reqwest::Client;
use std::path::Path;
use url::Url;

/// Main crawler coordinator structure
pub struct Coordinator<O: OutputHandler = TextLog> {
    client: Client,
    filter: Box<dyn LinkPredicate>,
    output: O,
    max_pages: Option<u64>,
    stats: CrawlStats,
}

impl<O: OutputHandler> Coordinator<O> {
    /// Creates a new coordinator instance
    ///
    /// # Arguments
    ///
    /// * `http` - Timeout and user agent for the HTTP client
    /// * `filter` - Predicate deciding which discovered links are followed
    /// * `output` - Where page records are written
    pub fn new(
        http: &HttpConfig,
        filter: impl LinkPredicate + 'static,
        output: O,
    ) -> Result<Self, CrawlError> {
        let client = build_http_client(http)?;

        Ok(Self {
            client,
            filter: Box::new(filter),
            output,
            max_pages: None,
            stats: CrawlStats::new(),
        })
    }

    /// Limits the number of fetch attempts per run
    pub fn with_max_pages(mut self, max_pages: Option<u64>) -> Self {
        self.max_pages = max_pages;
        self
    }

    /// Runs the crawl loop until the frontier is drained
    ///
    /// Page-level failures (transport, HTTP status, parse) are logged and
    /// skipped. Only a failure to write the page log ends the run early.
    ///
    /// # Returns
    ///
    /// * `Ok(CrawlStats)` - Counters for this run
    /// * `Err(CrawlError)` - The page log could not be written
    pub async fn run(&mut self, frontier: &mut Frontier) -> Result<CrawlStats, CrawlError> {
        self.stats = CrawlStats::new();
        tracing::info!(
            "Starting crawl with {} pending URL(s)",
            frontier.pending_len()
        );

        while frontier.has_work() {
            if let Some(max_pages) = self.max_pages {
                if self.stats.pages_fetched >= max_pages {
                    tracing::warn!(
                        "Page budget of {} reached, {} URL(s) left pending",
                        max_pages,
                        frontier.pending_len()
                    );
                    break;
                }
            }

            let url = frontier.next_url()?;
            tracing::debug!("Processing URL: {}", url);
            self.stats.pages_fetched += 1;

            match self.visit(&url).await {
                Ok((record, links)) => {
                    self.output.record_page(&record)?;
                    self.stats.pages_recorded += 1;

                    let added = enqueue_links(frontier, &*self.filter, &links);
                    self.stats.links_seen += links.len() as u64;
                    self.stats.links_enqueued += added as u64;

                    tracing::info!(
                        "Recorded {} (+{} new, {} pending)",
                        record,
                        added,
                        frontier.pending_len()
                    );
                }
                Err(e) => {
                    tracing::warn!("{}", e);
                    self.stats.record_error(&e);
                }
            }
        }

        self.output.finalize()?;
        self.stats.finish(frontier.pending_len());

        tracing::info!(
            "Crawl finished: {} page(s) recorded, {} error(s), {} fetch attempt(s)",
            self.output.records_written(),
            self.stats.total_errors(),
            self.stats.pages_fetched
        );

        Ok(self.stats.clone())
    }

    /// Fetches and parses one page
    ///
    /// Links are resolved against the final URL after redirects; the record
    /// keeps the URL that was dequeued.
    async fn visit(&self, url: &str) -> Result<(PageRecord, Vec<Url>), PageError> {
        let page = fetch_url(&self.client, url).await.into_page(url)?;
        tracing::trace!(
            "Fetched {} (HTTP {}, {} bytes)",
            page.final_url,
            page.status_code,
            page.body.len()
        );

        let base_url = Url::parse(&page.final_url).map_err(|e| PageError::Parse {
            url: url.to_string(),
            message: format!("Unusable final URL {}: {}", page.final_url, e),
        })?;

        let parsed = parse_html(&page.body, &base_url);
        let title = parsed.title.ok_or_else(|| PageError::Parse {
            url: url.to_string(),
            message: "Document has no <title>".to_string(),
        })?;

        Ok((PageRecord::new(url, title), parsed.links))
    }

    /// The page log
    pub fn output(&self) -> &O {
        &self.output
    }

    /// Consumes the coordinator, returning the page log
    pub fn into_output(self) -> O {
        self.output
    }
}

impl Coordinator<TextLog> {
    /// Builds a coordinator writing to the configured log file
    ///
    /// The link filter comes from the `[filter]` section, falling back to the
    /// seed's host when no pattern or domain is configured.
    pub fn from_config(config: &Config, seed: &Url) -> Result<Self, CrawlError> {
        let filter = build_filter(config, seed)?;
        tracing::info!("Following links matching {}", filter);

        let output = TextLog::open(Path::new(&config.output.log_path), config.output.append)?;
        tracing::info!("Writing page log to {}", output.path().display());

        Ok(Self::new(&config.http, filter, output)?.with_max_pages(config.crawler.max_pages))
    }
}

/// Adds every link the predicate accepts to the frontier
///
/// Returns how many links were newly enqueued; links already visited or
/// pending are left alone.
pub fn enqueue_links(frontier: &mut Frontier, filter: &dyn LinkPredicate, links: &[Url]) -> usize {
    links
        .iter()
        .filter(|link| filter.accepts(link))
        .filter(|link| frontier.add_candidate(link.as_str()))
        .count()
}
