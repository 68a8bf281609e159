//! Storage module for persisting knowledge bases
//!
//! This module handles all file operations for the pipeline, including:
//! - Writing knowledge bases and enhanced knowledge bases as pretty JSON
//! - Writing the plain-text report next to them
//! - Loading either JSON document back as a searchable corpus

mod json;
mod traits;

pub use json::{load_corpus, load_knowledge_base, safe_domain, JsonStore};
pub use traits::{KnowledgeStore, StorageError, StorageResult};
