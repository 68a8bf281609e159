//! Crawl frontier and politeness throttle
//!
//! This module handles:
//! - The FIFO queue of discovered-but-not-yet-fetched URLs
//! - The visited set (every URL a fetch was attempted for)
//! - Deduplication against both sets
//! - The fixed delay between fetch attempts

use std::collections::{HashSet, VecDeque};
use std::time::Duration;
use url::Url;

/// Frontier owned exclusively by the crawl loop
///
/// URLs are handed out in the order they were enqueued, so a crawl is a
/// breadth-first traversal in document link order and is reproducible.
#[derive(Debug, Clone)]
pub struct Frontier {
    /// URLs waiting to be fetched, oldest first
    pending: VecDeque<Url>,

    /// Membership index for `pending`
    queued: HashSet<String>,

    /// URLs already taken from the frontier
    visited: HashSet<String>,

    /// Pause between fetch attempts
    delay: Duration,
}

impl Frontier {
    /// Creates a frontier seeded with one URL
    pub fn new(seed: Url, delay: Duration) -> Self {
        let mut frontier = Self {
            pending: VecDeque::new(),
            queued: HashSet::new(),
            visited: HashSet::new(),
            delay,
        };
        frontier.enqueue(seed);
        frontier
    }

    /// Takes the next unvisited URL and marks it visited
    ///
    /// Returns None once the queue is exhausted.
    pub fn next_url(&mut self) -> Option<Url> {
        while let Some(url) = self.pending.pop_front() {
            self.queued.remove(url.as_str());
            if self.visited.insert(url.to_string()) {
                return Some(url);
            }
        }
        None
    }

    /// Adds a URL unless it was already visited or is already pending
    ///
    /// Returns true if the URL was added.
    pub fn enqueue(&mut self, url: Url) -> bool {
        let key = url.as_str();
        if self.visited.contains(key) || self.queued.contains(key) {
            return false;
        }
        self.queued.insert(key.to_string());
        self.pending.push_back(url);
        true
    }

    /// Enqueues every URL, returning how many were new
    pub fn enqueue_all<I: IntoIterator<Item = Url>>(&mut self, urls: I) -> usize {
        urls.into_iter().filter(|url| self.enqueue(url.clone())).count()
    }

    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Sleeps for the politeness delay; a zero delay returns immediately
    pub async fn wait_politely(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }
}
