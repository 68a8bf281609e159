//! URL handling module for Sitelore
//!
//! This module provides URL normalization, link resolution, domain extraction
//! and the apex-domain crawl scope.

mod domain;
mod normalize;
mod scope;

pub use domain::{apex_domain, extract_domain};
pub use normalize::{normalize_url, resolve_link};
pub use scope::DomainScope;
