//! Crawl statistics
//!
//! Counters collected by the crawl loop and the end-of-run report.

use crate::PageError;
use chrono::{DateTime, Utc};

/// Crawl statistics summary
#[derive(Debug, Clone)]
pub struct CrawlStats {
    /// When the crawl loop started
    pub started_at: DateTime<Utc>,

    /// When the crawl loop stopped; `None` while running
    pub finished_at: Option<DateTime<Utc>>,

    /// Fetch attempts, successful or not
    pub pages_fetched: u64,

    /// Pages written to the output log
    pub pages_recorded: u64,

    /// Connection failures and timeouts
    pub transport_errors: u64,

    /// Non-success HTTP responses
    pub status_errors: u64,

    /// Documents without a usable title
    pub parse_errors: u64,

    /// Links found on recorded pages, deduplicated per page
    pub links_seen: u64,

    /// Links accepted by the filter and newly added to the frontier
    pub links_enqueued: u64,

    /// URLs left in the frontier when the loop stopped
    pub pending_at_exit: u64,
}

impl Default for CrawlStats {
    fn default() -> Self {
        Self::new()
    }
}

impl CrawlStats {
    /// Creates counters stamped with the current time
    pub fn new() -> Self {
        Self {
            started_at: Utc::now(),
            finished_at: None,
            pages_fetched: 0,
            pages_recorded: 0,
            transport_errors: 0,
            status_errors: 0,
            parse_errors: 0,
            links_seen: 0,
            links_enqueued: 0,
            pending_at_exit: 0,
        }
    }

    /// Counts a page error under its kind
    pub fn record_error(&mut self, error: &PageError) {
        if error.is_transport() {
            self.transport_errors += 1;
        } else if matches!(error, PageError::HttpStatus { .. }) {
            self.status_errors += 1;
        } else {
            self.parse_errors += 1;
        }
    }

    /// Total page errors of every kind
    pub fn total_errors(&self) -> u64 {
        self.transport_errors + self.status_errors + self.parse_errors
    }

    /// Marks the crawl as finished
    pub fn finish(&mut self, pending: usize) {
        self.finished_at = Some(Utc::now());
        self.pending_at_exit = pending as u64;
    }

    /// Wall-clock duration, if finished
    pub fn duration(&self) -> Option<chrono::Duration> {
        self.finished_at.map(|finished| finished - self.started_at)
    }

    /// Share of fetch attempts that ended in the log, as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.pages_fetched == 0 {
            return 0.0;
        }
        (self.pages_recorded as f64 / self.pages_fetched as f64) * 100.0
    }
}

/// Prints statistics to stdout in a formatted manner
pub fn print_statistics(stats: &CrawlStats) {
    println!("=== Crawl Statistics ===\n");

    println!("Run:");
    println!("  Started: {}", stats.started_at.to_rfc3339());
    if let Some(finished) = stats.finished_at {
        println!("  Finished: {}", finished.to_rfc3339());
    }
    if let Some(duration) = stats.duration() {
        println!(
            "  Duration: {:.1}s",
            duration.num_milliseconds() as f64 / 1000.0
        );
    }
    println!();

    println!("Pages:");
    println!("  Fetched: {}", stats.pages_fetched);
    println!(
        "  Recorded: {} ({:.1}%)",
        stats.pages_recorded,
        stats.success_rate()
    );
    println!("  Left pending: {}", stats.pending_at_exit);
    println!();

    println!("Links:");
    println!("  Seen: {}", stats.links_seen);
    println!("  Enqueued: {}", stats.links_enqueued);
    println!();

    if stats.total_errors() > 0 {
        println!("Errors:");
        println!("  Transport: {}", stats.transport_errors);
        println!("  HTTP status: {}", stats.status_errors);
        println!("  Parse: {}", stats.parse_errors);
    }
}
