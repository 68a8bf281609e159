//! Storage traits and error types
//!
//! This module defines the trait interface for knowledge-base stores and
//! associated error types.

use crate::enrich::EnhancedKnowledgeBase;
use crate::knowledge::KnowledgeBase;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Output error: {0}")]
    Output(#[from] crate::output::OutputError),

    #[error("{0} is neither a knowledge base nor an enhanced knowledge base")]
    UnrecognizedDocument(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Trait for knowledge-base store implementations
///
/// Every save returns the path of the artifact it wrote.
pub trait KnowledgeStore {
    /// Persists a crawled knowledge base
    fn save_knowledge_base(&self, kb: &KnowledgeBase) -> StorageResult<PathBuf>;

    /// Persists the human-readable report of a knowledge base
    fn save_text_summary(&self, kb: &KnowledgeBase) -> StorageResult<PathBuf>;

    /// Persists an enhanced knowledge base
    fn save_enhanced(&self, ekb: &EnhancedKnowledgeBase) -> StorageResult<PathBuf>;
}
