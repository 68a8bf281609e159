//! Knowledge-base records produced by the crawler
//!
//! - `PageRecord`: structured content extracted from one page
//! - `KnowledgeBase`: the ordered collection of page records for one crawl
//! - `CrawlMetadata`: limits and counters describing how the crawl went
//!
//! Field names serialize in camelCase, which is the layout of the persisted
//! knowledge-base document.

mod base;
mod page;

pub use base::{CrawlMetadata, KnowledgeBase};
pub use page::PageRecord;
