//! Output handler traits and types
//!
//! This module defines the trait interface for page log writers and the
//! record they write.

use std::fmt;
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to write output: {0}")]
    Write(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// One visited page: the URL as dequeued and its title
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRecord {
    pub url: String,
    pub title: String,
}

impl PageRecord {
    pub fn new(url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
        }
    }
}

/// Log line format: `<url> <title>`
impl fmt::Display for PageRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.url, self.title)
    }
}

/// Trait for page log writers
///
/// Records are written in fetch order. An implementation must make each
/// record durable before `record_page` returns, so a log cut short by a
/// crash still holds only complete lines.
pub trait OutputHandler {
    /// Appends one page record
    fn record_page(&mut self, record: &PageRecord) -> OutputResult<()>;

    /// Number of records written by this handler
    fn records_written(&self) -> u64;

    /// Finalizes the output, performing any cleanup or final writes
    fn finalize(&mut self) -> OutputResult<()> {
        Ok(())
    }
}

/// In-memory handler, useful for embedding the crawler and for tests
#[derive(Debug, Default, Clone)]
pub struct MemoryOutput {
    pub records: Vec<PageRecord>,
}

impl MemoryOutput {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OutputHandler for MemoryOutput {
    fn record_page(&mut self, record: &PageRecord) -> OutputResult<()> {
        self.records.push(record.clone());
        Ok(())
    }

    fn records_written(&self) -> u64 {
        self.records.len() as u64
    }
}
