//! State module for tracking crawl progress
//!
//! # Components
//!
//! - `PageError`: why a single page was dropped (transport, content type, markup)
//! - `CrawlTally`: attempt/record/failure counters for one crawl run

mod page_error;
mod tally;

pub use page_error::{PageError, PageResult};
pub use tally::CrawlTally;
