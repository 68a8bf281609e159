use crate::config::OutputConfig;
use crate::enrich::EnhancedKnowledgeBase;
use crate::knowledge::KnowledgeBase;
use crate::output::write_text_report;
use crate::search::Corpus;
use crate::storage::traits::{KnowledgeStore, StorageError, StorageResult};
use chrono::Local;
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Writes knowledge-base artifacts as files in one directory
#[derive(Debug, Clone)]
pub struct JsonStore {
    directory: PathBuf,
    preview_chars: usize,
}

impl JsonStore {
    /// Creates a store writing into `directory`
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            preview_chars: OutputConfig::default().preview_chars,
        }
    }

    /// Creates a store from the `[output]` configuration table
    pub fn from_config(config: &OutputConfig) -> Self {
        Self {
            directory: PathBuf::from(&config.directory),
            preview_chars: config.preview_chars,
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Builds `{safe_domain}_{kind}_{timestamp}.{extension}` inside the store directory
    fn artifact_path(&self, domain: &str, kind: &str, extension: &str) -> StorageResult<PathBuf> {
        fs::create_dir_all(&self.directory)?;
        let timestamp = Local::now().format("%Y%m%d_%H%M%S");
        Ok(self.directory.join(format!(
            "{}_{}_{}.{}",
            safe_domain(domain),
            kind,
            timestamp,
            extension
        )))
    }
}

impl KnowledgeStore for JsonStore {
    fn save_knowledge_base(&self, kb: &KnowledgeBase) -> StorageResult<PathBuf> {
        let path = self.artifact_path(&kb.domain, "knowledge_base", "json")?;
        write_json(&path, kb)?;
        tracing::info!("Knowledge base saved to {}", path.display());
        Ok(path)
    }

    fn save_text_summary(&self, kb: &KnowledgeBase) -> StorageResult<PathBuf> {
        let path = self.artifact_path(&kb.domain, "summary", "txt")?;
        write_text_report(kb, &path, self.preview_chars)?;
        tracing::info!("Text summary saved to {}", path.display());
        Ok(path)
    }

    fn save_enhanced(&self, ekb: &EnhancedKnowledgeBase) -> StorageResult<PathBuf> {
        let path = self.artifact_path(&ekb.source.domain, "enhanced_kb", "json")?;
        write_json(&path, ekb)?;
        tracing::info!("Enhanced knowledge base saved to {}", path.display());
        Ok(path)
    }
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> StorageResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.flush()?;
    Ok(())
}

/// Replaces every character outside `[A-Za-z0-9_.-]` with `_`
///
/// # Examples
///
/// ```
/// use sitelore::storage::safe_domain;
///
/// assert_eq!(safe_domain("docs.example.com"), "docs.example.com");
/// assert_eq!(safe_domain("127.0.0.1:8080"), "127.0.0.1_8080");
/// ```
pub fn safe_domain(domain: &str) -> String {
    domain
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Loads a persisted knowledge base
pub fn load_knowledge_base(path: &Path) -> StorageResult<KnowledgeBase> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}

/// Loads either persisted document as a searchable corpus
///
/// A document with `processedContent` is an enhanced knowledge base; one with
/// `scrapedPages` is a raw knowledge base.
pub fn load_corpus(path: &Path) -> StorageResult<Corpus> {
    let reader = BufReader::new(File::open(path)?);
    let document: serde_json::Value = serde_json::from_reader(reader)?;

    if document.get("processedContent").is_some() {
        let ekb: EnhancedKnowledgeBase = serde_json::from_value(document)?;
        tracing::debug!("Loaded enhanced knowledge base with {} pages", ekb.len());
        Ok(Corpus::Enriched(ekb))
    } else if document.get("scrapedPages").is_some() {
        let kb: KnowledgeBase = serde_json::from_value(document)?;
        tracing::debug!("Loaded knowledge base with {} pages", kb.len());
        Ok(Corpus::Raw(kb))
    } else {
        Err(StorageError::UnrecognizedDocument(
            path.display().to_string(),
        ))
    }
}
