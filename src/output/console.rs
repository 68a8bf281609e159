//! Console summaries for crawl, enrichment and search results

use crate::enrich::EnrichmentStatistics;
use crate::knowledge::KnowledgeBase;
use crate::output::report::preview;
use crate::output::OutputResult;
use crate::search::{Corpus, SearchHit};
use std::io::Write;

/// Characters of preview text shown per search result
const RESULT_PREVIEW_CHARS: usize = 200;

/// Writes the crawl totals and per-kind failure counts
pub fn write_crawl_summary<W: Write>(out: &mut W, kb: &KnowledgeBase) -> OutputResult<()> {
    writeln!(out, "=== Crawl Summary ===\n")?;
    writeln!(out, "  Seed URL: {}", kb.seed_url)?;
    writeln!(out, "  Domain: {}", kb.domain)?;
    writeln!(out, "  Pages recorded: {}", kb.pages.len())?;
    writeln!(out, "  URLs visited: {}", kb.metadata.visited_urls)?;
    writeln!(out, "  Total words: {}", kb.total_word_count)?;

    if !kb.metadata.failures.is_empty() {
        writeln!(out, "\nDropped pages:")?;
        for (kind, count) in &kb.metadata.failures {
            writeln!(out, "  {}: {}", kind, count)?;
        }
    }

    if kb.metadata.interrupted {
        writeln!(out, "\nCrawl was interrupted; this is a partial knowledge base.")?;
    }

    Ok(())
}

/// Writes the enrichment statistics block
pub fn write_enrichment_statistics<W: Write>(
    out: &mut W,
    stats: &EnrichmentStatistics,
) -> OutputResult<()> {
    writeln!(out, "\nStatistics:")?;
    writeln!(out, "  Pages processed: {}", stats.total_processed_pages)?;
    writeln!(out, "  Total sentences: {}", stats.total_sentences)?;
    writeln!(out, "  Avg readability: {:.1}", stats.avg_readability_score)?;
    writeln!(out, "  Unique keywords: {}", stats.unique_keywords)?;
    Ok(())
}

/// Writes ranked search results with a short preview per page
pub fn write_search_results<W: Write>(
    out: &mut W,
    corpus: &Corpus,
    query: &str,
    hits: &[SearchHit],
) -> OutputResult<()> {
    if hits.is_empty() {
        writeln!(out, "No results found for query: '{}'", query)?;
        return Ok(());
    }

    writeln!(out, "Search results for '{}':", query)?;
    writeln!(out, "Found {} relevant pages\n", hits.len())?;

    for (rank, hit) in hits.iter().enumerate() {
        let Some(page) = corpus.page(hit.page_index) else {
            continue;
        };
        let text = corpus.preview(hit.page_index).unwrap_or("");

        writeln!(out, "{}. {}", rank + 1, page.title)?;
        writeln!(out, "   URL: {}", page.url)?;
        writeln!(
            out,
            "   Words: {}, Relevance: {:.1}",
            page.word_count, hit.score
        )?;
        writeln!(out, "   Preview: {}\n", preview(text, RESULT_PREVIEW_CHARS))?;
    }

    Ok(())
}

/// Prints the crawl summary to stdout
pub fn print_crawl_summary(kb: &KnowledgeBase) -> OutputResult<()> {
    write_crawl_summary(&mut std::io::stdout().lock(), kb)
}

/// Prints enrichment statistics to stdout
pub fn print_enrichment_statistics(stats: &EnrichmentStatistics) -> OutputResult<()> {
    write_enrichment_statistics(&mut std::io::stdout().lock(), stats)
}

/// Prints search results to stdout
pub fn print_search_results(
    corpus: &Corpus,
    query: &str,
    hits: &[SearchHit],
) -> OutputResult<()> {
    write_search_results(&mut std::io::stdout().lock(), corpus, query, hits)
}
