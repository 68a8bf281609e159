use crate::state::PageError;
use std::collections::BTreeMap;

/// Counters for one crawl run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrawlTally {
    /// Number of fetch attempts made
    pub attempted: usize,

    /// Number of pages recorded in the knowledge base
    pub recorded: usize,

    /// Dropped pages per failure kind
    pub failures: BTreeMap<String, usize>,
}

impl CrawlTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a successfully extracted page
    pub fn record_success(&mut self) {
        self.attempted += 1;
        self.recorded += 1;
    }

    /// Records a dropped page under its failure kind
    pub fn record_failure(&mut self, error: &PageError) {
        self.attempted += 1;
        *self.failures.entry(error.kind().to_string()).or_insert(0) += 1;
    }

    /// Total number of dropped pages
    pub fn failed(&self) -> usize {
        self.failures.values().sum()
    }
}
