//! Integration tests driving the crawler against mock HTTP servers

mod crawl_tests;
mod pipeline_tests;
