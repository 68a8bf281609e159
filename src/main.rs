//! Sitelore main entry point
//!
//! This is the command-line interface for the Sitelore knowledge-base builder.

use anyhow::{bail, Context};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use sitelore::config::{load_config_with_hash, validate, Config};
use sitelore::enrich::Enricher;
use sitelore::linguistics::EnglishResources;
use sitelore::output::{print_crawl_summary, print_enrichment_statistics, print_search_results};
use sitelore::storage::{load_corpus, JsonStore, KnowledgeStore};
use sitelore::{search, Crawler, HttpFetcher, SiteLoreError};

/// Page cap used by `--all`
const UNLIMITED_PAGES: usize = 100_000;

/// Sitelore: a website knowledge-base builder
///
/// Sitelore crawls a website within its domain, saves the extracted pages as a
/// JSON knowledge base with a readable text report, optionally enriches it with
/// keywords, key phrases, summaries and readability scores, and searches it.
#[derive(Parser, Debug)]
#[command(name = "sitelore")]
#[command(version = "1.0.0")]
#[command(about = "Build a searchable knowledge base from a website", long_about = None)]
struct Cli {
    /// Website URL to crawl
    #[arg(value_name = "URL")]
    url: String,

    /// Path to TOML configuration file
    #[arg(long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Maximum number of pages to record
    #[arg(long, conflicts_with = "all")]
    max_pages: Option<usize>,

    /// Crawl every page on the site (ignores --max-pages)
    #[arg(long)]
    all: bool,

    /// Delay between requests in seconds
    #[arg(long)]
    delay: Option<f64>,

    /// Output directory for knowledge-base files
    #[arg(long)]
    output_dir: Option<String>,

    /// Enrich the knowledge base with keywords, summaries and a search index
    #[arg(long)]
    enhance: bool,

    /// Search an existing knowledge base instead of crawling
    #[arg(long, value_name = "QUERY", requires = "kb_file")]
    search: Option<String>,

    /// Knowledge-base file to search
    #[arg(long, value_name = "PATH")]
    kb_file: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    if !cli.url.starts_with("http://") && !cli.url.starts_with("https://") {
        bail!("URL must start with http:// or https://");
    }

    if let (Some(query), Some(kb_file)) = (&cli.search, &cli.kb_file) {
        return handle_search(kb_file, query);
    }

    let (config, config_hash) = load_configuration(&cli)?;

    match handle_crawl(&cli, &config, config_hash).await {
        Ok(()) => Ok(()),
        Err(e) => {
            tracing::error!("{:#}", e);
            Err(e)
        }
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("sitelore=info,warn"),
            1 => EnvFilter::new("sitelore=debug,info"),
            2 => EnvFilter::new("sitelore=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Loads the config file (if any) and applies command-line overrides
fn load_configuration(cli: &Cli) -> anyhow::Result<(Config, Option<String>)> {
    let (mut config, hash) = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("failed to load {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            (config, Some(hash))
        }
        None => (Config::default(), None),
    };

    if cli.all {
        config.crawler.max_pages = UNLIMITED_PAGES;
    } else if let Some(max_pages) = cli.max_pages {
        config.crawler.max_pages = max_pages;
    }
    if let Some(delay) = cli.delay {
        config.crawler.delay_seconds = delay;
    }
    if let Some(dir) = &cli.output_dir {
        config.output.directory = dir.clone();
    }

    validate(&config).context("invalid settings")?;

    Ok((config, hash))
}

/// Resolves when the operator presses Ctrl-C
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Cannot listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::warn!("Interrupt received, stopping crawl");
}

/// Handles the main crawl operation
async fn handle_crawl(
    cli: &Cli,
    config: &Config,
    config_hash: Option<String>,
) -> anyhow::Result<()> {
    let max_pages = if cli.all {
        "all".to_string()
    } else {
        config.crawler.max_pages.to_string()
    };
    tracing::info!("Starting crawl for: {}", cli.url);
    tracing::info!(
        "Max pages: {}, Delay: {}s",
        max_pages,
        config.crawler.delay_seconds
    );

    let fetcher = HttpFetcher::new(
        &config.user_agent,
        Duration::from_secs(config.crawler.request_timeout_secs),
    )?;
    let mut crawler = Crawler::from_config(fetcher, &config.crawler);
    if let Some(hash) = config_hash {
        crawler = crawler.with_config_hash(hash);
    }

    let kb = crawler.crawl_until(&cli.url, shutdown_signal()).await?;
    print_crawl_summary(&kb)?;

    let store = JsonStore::from_config(&config.output);

    if kb.metadata.interrupted {
        if !kb.is_empty() {
            let path = store.save_knowledge_base(&kb)?;
            println!("Partial knowledge base saved to: {}", path.display());
        }
        return Err(SiteLoreError::Interrupted { pages: kb.len() }.into());
    }

    if kb.is_empty() {
        return Err(SiteLoreError::NoContent {
            url: cli.url.clone(),
        }
        .into());
    }

    let kb_path = store.save_knowledge_base(&kb)?;
    let text_path = store.save_text_summary(&kb)?;

    println!("\nBasic knowledge base created:");
    println!("  JSON: {}", kb_path.display());
    println!("  Text summary: {}", text_path.display());

    if cli.enhance {
        let resources = EnglishResources::from_config(&config.linguistics)?;
        let enricher = Enricher::new(Arc::new(resources), config.enrichment.clone())?;
        let enhanced = enricher.enrich(kb);
        let enhanced_path = store.save_enhanced(&enhanced)?;

        println!("Enhanced knowledge base created: {}", enhanced_path.display());
        print_enrichment_statistics(&enhanced.statistics)?;
    }

    println!("\nKnowledge base saved to: {}/", store.directory().display());

    Ok(())
}

/// Handles the --search mode: ranks a saved knowledge base against a query
fn handle_search(kb_file: &Path, query: &str) -> anyhow::Result<()> {
    let corpus = load_corpus(kb_file)
        .with_context(|| format!("failed to load knowledge base {}", kb_file.display()))?;

    let hits = search(&corpus, query)?;
    print_search_results(&corpus, query, &hits)?;

    Ok(())
}
