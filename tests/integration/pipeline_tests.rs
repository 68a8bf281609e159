//! End-to-end tests: crawl a mock site, persist, enrich, reload and search

use sitelore::config::{EnrichmentConfig, UserAgentConfig};
use sitelore::storage::{load_corpus, load_knowledge_base, JsonStore, KnowledgeStore};
use sitelore::{search, Corpus, Crawler, EnglishResources, Enricher, HttpFetcher};
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount(server: &MockServer, route: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(body.as_bytes().to_vec(), "text/html; charset=utf-8"),
        )
        .mount(server)
        .await;
}

/// A small documentation site
async fn mount_docs_site(server: &MockServer) {
    mount(
        server,
        "/",
        r#"<html><head>
            <title>Acme Docs</title>
            <meta name="description" content="Documentation for the Acme toolkit">
        </head><body>
            <nav><a href="/">Home</a></nav>
            <h1>Acme Toolkit</h1>
            <p>The Acme toolkit helps teams build reliable data pipelines quickly.</p>
            <p>Each pipeline reads records from a source and writes them to a sink.</p>
            <a href="/install">Install</a> <a href="/pricing">Pricing</a>
            <footer>Copyright Acme</footer>
        </body></html>"#,
    )
    .await;

    mount(
        server,
        "/install",
        r#"<html><head><title>Installation Guide</title></head><body>
            <h1>Installing the toolkit</h1>
            <p>Download the installer from the releases page before you begin.</p>
            <p>Run the installer and follow the prompts to finish the setup.</p>
            <a href="/">Home</a>
        </body></html>"#,
    )
    .await;

    mount(
        server,
        "/pricing",
        r#"<html><head><title>Subscription Tiers</title></head><body>
            <p>Teams can choose between monthly and yearly billing options.</p>
            <a href="/">Home</a>
        </body></html>"#,
    )
    .await;
}

async fn crawl_docs_site(server: &MockServer) -> sitelore::KnowledgeBase {
    let fetcher = HttpFetcher::new(&UserAgentConfig::default(), Duration::from_secs(5))
        .expect("Failed to build client");
    Crawler::new(fetcher, 10, Duration::ZERO)
        .crawl(&server.uri())
        .await
        .expect("Crawl failed")
}

fn enricher() -> Enricher {
    let resources = EnglishResources::new().expect("Resources unavailable");
    Enricher::new(Arc::new(resources), EnrichmentConfig::default()).expect("Enricher failed")
}

#[tokio::test]
async fn test_crawl_extracts_structured_content() {
    let server = MockServer::start().await;
    mount_docs_site(&server).await;

    let kb = crawl_docs_site(&server).await;
    assert_eq!(kb.pages.len(), 3);

    let home = &kb.pages[0];
    assert_eq!(home.title, "Acme Docs");
    assert_eq!(
        home.metadata.get("description").map(String::as_str),
        Some("Documentation for the Acme toolkit")
    );
    assert_eq!(home.paragraphs.len(), 2);
    assert!(!home.text_content.contains("Copyright"));
    assert_eq!(home.word_count, home.text_content.split_whitespace().count());
}

#[tokio::test]
async fn test_persisted_knowledge_base_round_trip() {
    let server = MockServer::start().await;
    mount_docs_site(&server).await;
    let kb = crawl_docs_site(&server).await;

    let dir = TempDir::new().unwrap();
    let store = JsonStore::new(dir.path());
    let kb_path = store.save_knowledge_base(&kb).unwrap();
    let summary_path = store.save_text_summary(&kb).unwrap();

    let loaded = load_knowledge_base(&kb_path).unwrap();
    assert_eq!(loaded.pages.len(), kb.pages.len());
    assert_eq!(loaded.total_word_count, kb.total_word_count);

    let summary = std::fs::read_to_string(summary_path).unwrap();
    assert!(summary.contains("Page 1: Acme Docs"));
    assert!(summary.contains("Page 2: Installation Guide"));
}

#[tokio::test]
async fn test_enrich_and_search_enhanced_corpus() {
    let server = MockServer::start().await;
    mount_docs_site(&server).await;
    let kb = crawl_docs_site(&server).await;

    let enhanced = enricher().enrich(kb);
    assert_eq!(enhanced.pages.len(), 3);
    assert!(enhanced.statistics.total_sentences >= 5);
    assert!(enhanced.global_keywords.contains(&"toolkit".to_string()));
    assert!(enhanced.search_index.contains_key("installer"));

    let dir = TempDir::new().unwrap();
    let path = JsonStore::new(dir.path()).save_enhanced(&enhanced).unwrap();
    let corpus = load_corpus(&path).unwrap();
    assert!(corpus.is_enriched());

    // "subscription" only appears on the pricing page, in its title
    let hits = search(&corpus, "subscription").unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].page_index, 2);
    assert!(hits[0].score >= 3.0);

    let hits = search(&corpus, "installer").unwrap();
    assert_eq!(hits[0].page_index, 1);
}

#[tokio::test]
async fn test_search_raw_corpus() {
    let server = MockServer::start().await;
    mount_docs_site(&server).await;
    let kb = crawl_docs_site(&server).await;

    let dir = TempDir::new().unwrap();
    let path = JsonStore::new(dir.path()).save_knowledge_base(&kb).unwrap();
    let corpus = load_corpus(&path).unwrap();
    assert!(matches!(corpus, Corpus::Raw(_)));

    // title match plus the title text inside the body
    let hits = search(&corpus, "Installation Guide").unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].page_index, 1);
    assert_eq!(hits[0].score, 4.0);

    let hits = search(&corpus, "toolkit").unwrap();
    let order: Vec<usize> = hits.iter().map(|h| h.page_index).collect();
    assert_eq!(order, vec![0, 1]);
}
