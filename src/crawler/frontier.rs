//! URL frontier for breadth-first crawling
//!
//! The frontier holds two collections:
//! - `pending`: URLs waiting to be fetched, in discovery order
//! - `visited`: every URL ever enqueued, fetched or not
//!
//! A URL enters `visited` the moment it is enqueued, so it can never be
//! queued twice and never comes back after it has been dequeued.

use crate::FrontierError;
use std::collections::{HashSet, VecDeque};

/// Breadth-first URL frontier
#[derive(Debug, Default, Clone)]
pub struct Frontier {
    /// URLs not yet fetched (FIFO)
    pending: VecDeque<String>,

    /// URLs already enqueued or fetched
    visited: HashSet<String>,
}

impl Frontier {
    /// Creates an empty frontier
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a frontier seeded with a single root URL
    pub fn with_seed(seed: impl Into<String>) -> Self {
        let mut frontier = Self::new();
        frontier.add_candidate(seed);
        frontier
    }

    /// Adds a URL to the tail of the pending queue unless it was seen before
    ///
    /// # Returns
    ///
    /// * `true` - The URL was new and has been enqueued
    /// * `false` - The URL was already visited or pending; nothing changed
    pub fn add_candidate(&mut self, url: impl Into<String>) -> bool {
        let url = url.into();
        if self.visited.contains(&url) {
            return false;
        }

        self.visited.insert(url.clone());
        self.pending.push_back(url);
        true
    }

    /// Returns whether any URL is waiting to be fetched
    pub fn has_work(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Dequeues the earliest-added pending URL
    ///
    /// # Errors
    ///
    /// Returns `FrontierError::Empty` when nothing is pending.
    pub fn next_url(&mut self) -> Result<String, FrontierError> {
        self.pending.pop_front().ok_or(FrontierError::Empty)
    }

    /// Number of URLs waiting to be fetched
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Number of URLs ever enqueued
    pub fn visited_len(&self) -> usize {
        self.visited.len()
    }

    /// Returns whether the URL has been enqueued at some point
    pub fn is_visited(&self, url: &str) -> bool {
        self.visited.contains(url)
    }

    /// Iterates over pending URLs in dequeue order
    pub fn pending(&self) -> impl Iterator<Item = &str> {
        self.pending.iter().map(String::as_str)
    }
}
