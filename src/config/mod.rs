//! Configuration module for Sitelore
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Every table and key has a default, so a missing file yields [`Config::default`].
//!
//! # Example
//!
//! ```no_run
//! use sitelore::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("sitelore.toml")).unwrap();
//! println!("Crawler will record at most {} pages", config.crawler.max_pages);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, CrawlerConfig, EnrichmentConfig, LinguisticsConfig, OutputConfig, UserAgentConfig,
};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash};
pub use validation::validate;
