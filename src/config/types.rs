use serde::Deserialize;

/// Main configuration structure for Sitelore
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub crawler: CrawlerConfig,
    #[serde(rename = "user-agent")]
    pub user_agent: UserAgentConfig,
    pub output: OutputConfig,
    pub enrichment: EnrichmentConfig,
    pub linguistics: LinguisticsConfig,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CrawlerConfig {
    /// Maximum number of pages to record
    #[serde(rename = "max-pages")]
    pub max_pages: usize,

    /// Politeness delay between fetch attempts (seconds, 0 disables)
    #[serde(rename = "delay-seconds")]
    pub delay_seconds: f64,

    /// Network timeout for a single page fetch (seconds)
    #[serde(rename = "request-timeout-secs")]
    pub request_timeout_secs: u64,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            max_pages: 50,
            delay_seconds: 1.0,
            request_timeout_secs: 30,
        }
    }
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UserAgentConfig {
    /// Name of the crawler
    #[serde(rename = "crawler-name")]
    pub crawler_name: String,

    /// Version of the crawler
    #[serde(rename = "crawler-version")]
    pub crawler_version: String,

    /// URL with information about the crawler
    #[serde(rename = "contact-url")]
    pub contact_url: String,

    /// Email address for crawler-related contact
    #[serde(rename = "contact-email")]
    pub contact_email: String,
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            crawler_name: "Sitelore".to_string(),
            crawler_version: env!("CARGO_PKG_VERSION").to_string(),
            contact_url: "https://example.com/sitelore".to_string(),
            contact_email: "crawler@example.com".to_string(),
        }
    }
}

impl UserAgentConfig {
    /// Formats the `User-Agent` header value: `Name/Version (+ContactURL; ContactEmail)`
    pub fn header_value(&self) -> String {
        format!(
            "{}/{} (+{}; {})",
            self.crawler_name, self.crawler_version, self.contact_url, self.contact_email
        )
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory receiving knowledge-base documents and text reports
    pub directory: String,

    /// Number of characters of body text shown per page in the text report
    #[serde(rename = "preview-chars")]
    pub preview_chars: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: "knowledge_base".to_string(),
            preview_chars: 500,
        }
    }
}

/// Limits used by the enrichment pipeline
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EnrichmentConfig {
    #[serde(rename = "max-keywords")]
    pub max_keywords: usize,

    #[serde(rename = "max-key-phrases")]
    pub max_key_phrases: usize,

    /// Sentence cap for extractive summaries
    #[serde(rename = "summary-sentences")]
    pub summary_sentences: usize,

    #[serde(rename = "global-keywords")]
    pub global_keywords: usize,

    #[serde(rename = "word-frequencies")]
    pub word_frequencies: usize,
}

impl Default for EnrichmentConfig {
    fn default() -> Self {
        Self {
            max_keywords: 20,
            max_key_phrases: 10,
            summary_sentences: 5,
            global_keywords: 100,
            word_frequencies: 50,
        }
    }
}

/// Linguistic resource provisioning
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LinguisticsConfig {
    /// Optional file of additional stop words, one per line
    #[serde(rename = "stopwords-path")]
    pub stopwords_path: Option<String>,

    /// Additional stop words given inline
    #[serde(rename = "extra-stopwords")]
    pub extra_stopwords: Vec<String>,
}
