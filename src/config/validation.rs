use crate::config::types::{
    Config, CrawlerConfig, EnrichmentConfig, OutputConfig, UserAgentConfig,
};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_crawler_config(&config.crawler)?;
    validate_user_agent_config(&config.user_agent)?;
    validate_output_config(&config.output)?;
    validate_enrichment_config(&config.enrichment)?;
    Ok(())
}

/// Validates crawler configuration
fn validate_crawler_config(config: &CrawlerConfig) -> Result<(), ConfigError> {
    if config.max_pages < 1 {
        return Err(ConfigError::Validation(format!(
            "max_pages must be >= 1, got {}",
            config.max_pages
        )));
    }

    if !config.delay_seconds.is_finite() || config.delay_seconds < 0.0 {
        return Err(ConfigError::Validation(format!(
            "delay_seconds must be a non-negative number, got {}",
            config.delay_seconds
        )));
    }

    if config.request_timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "request_timeout_secs must be >= 1, got {}",
            config.request_timeout_secs
        )));
    }

    Ok(())
}

/// Validates user agent configuration
fn validate_user_agent_config(config: &UserAgentConfig) -> Result<(), ConfigError> {
    if config.crawler_name.is_empty() {
        return Err(ConfigError::Validation(
            "crawler_name cannot be empty".to_string(),
        ));
    }

    if !config
        .crawler_name
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-')
    {
        return Err(ConfigError::Validation(format!(
            "crawler_name must contain only alphanumeric characters and hyphens, got '{}'",
            config.crawler_name
        )));
    }

    Url::parse(&config.contact_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid contact_url: {}", e)))?;

    validate_email(&config.contact_email)?;

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.directory.trim().is_empty() {
        return Err(ConfigError::Validation(
            "output directory cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates enrichment limits
fn validate_enrichment_config(config: &EnrichmentConfig) -> Result<(), ConfigError> {
    let limits = [
        ("max_keywords", config.max_keywords),
        ("max_key_phrases", config.max_key_phrases),
        ("summary_sentences", config.summary_sentences),
        ("global_keywords", config.global_keywords),
        ("word_frequencies", config.word_frequencies),
    ];

    for (name, value) in limits {
        if value < 1 {
            return Err(ConfigError::Validation(format!(
                "{} must be >= 1, got {}",
                name, value
            )));
        }
    }

    Ok(())
}

/// Basic email validation: a local part and a dotted domain
fn validate_email(email: &str) -> Result<(), ConfigError> {
    let (local, domain) = email.split_once('@').ok_or_else(|| {
        ConfigError::Validation(format!("Invalid contact_email '{}': missing '@'", email))
    })?;

    if local.is_empty() || domain.is_empty() || !domain.contains('.') {
        return Err(ConfigError::Validation(format!(
            "Invalid contact_email '{}'",
            email
        )));
    }

    Ok(())
}
