//! Integration tests for the crawler
//!
//! These tests use wiremock to create mock HTTP servers and test
//! the full crawl cycle end-to-end over real HTTP.

use sitelore::config::UserAgentConfig;
use sitelore::{Crawler, HttpFetcher, KnowledgeBase};
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const OFFSITE: &str = "https://offsite.example.org/elsewhere";

/// Creates a crawler with no politeness delay
fn test_crawler(max_pages: usize) -> Crawler<HttpFetcher> {
    let user_agent = UserAgentConfig {
        crawler_name: "TestBot".to_string(),
        crawler_version: "1.0.0".to_string(),
        contact_url: "https://example.com/contact".to_string(),
        contact_email: "test@example.com".to_string(),
    };
    let fetcher =
        HttpFetcher::new(&user_agent, Duration::from_secs(5)).expect("Failed to build client");
    Crawler::new(fetcher, max_pages, Duration::ZERO)
}

fn html(body: String) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body.into_bytes(), "text/html; charset=utf-8")
}

/// Mounts a GET route serving `body` as HTML, expected to be hit `times` times
async fn mount_page(server: &MockServer, route: &str, body: String, times: u64) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(html(body))
        .expect(times)
        .mount(server)
        .await;
}

/// A links to B and C; B and C link back to A and off-domain
async fn mount_three_page_site(server: &MockServer) {
    mount_page(
        server,
        "/",
        r#"<html><head><title>Page A</title></head><body>
            <h1>Welcome to A</h1>
            <p>Page A introduces the whole fixture site.</p>
            <a href="/b">To B</a> <a href="/c#top">To C</a>
        </body></html>"#
            .to_string(),
        1,
    )
    .await;

    for name in ["b", "c"] {
        mount_page(
            server,
            &format!("/{}", name),
            format!(
                r#"<html><head><title>Page {upper}</title></head><body>
                    <p>Page {upper} has a paragraph of its own text.</p>
                    <a href="/">Back to A</a>
                    <a href="{offsite}">Elsewhere</a>
                </body></html>"#,
                upper = name.to_uppercase(),
                offsite = OFFSITE
            ),
            1,
        )
        .await;
    }
}

fn urls(kb: &KnowledgeBase) -> Vec<String> {
    kb.pages.iter().map(|p| p.url.clone()).collect()
}

#[tokio::test]
async fn test_three_page_site() {
    let server = MockServer::start().await;
    mount_three_page_site(&server).await;
    let base = server.uri();

    let kb = test_crawler(10).crawl(&base).await.expect("Crawl failed");

    assert_eq!(
        urls(&kb),
        vec![
            format!("{}/", base),
            format!("{}/b", base),
            format!("{}/c", base)
        ]
    );
    assert_eq!(kb.metadata.visited_urls, 3);
    assert!(kb.metadata.failures.is_empty());
    assert!(!kb.metadata.interrupted);

    for page in &kb.pages {
        assert!(
            page.links.iter().all(|l| l != OFFSITE),
            "off-domain link kept on {}",
            page.url
        );
    }

    let a = &kb.pages[0];
    assert_eq!(a.title, "Page A");
    assert_eq!(a.headings, vec!["Welcome to A"]);
    assert_eq!(a.links, vec![format!("{}/b", base), format!("{}/c", base)]);
    assert_eq!(
        kb.total_word_count,
        kb.pages.iter().map(|p| p.word_count).sum::<usize>()
    );
}

#[tokio::test]
async fn test_page_cap_limits_recorded_pages() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "/",
        r#"<html><body>
            <a href="/one">1</a> <a href="/two">2</a> <a href="/three">3</a>
        </body></html>"#
            .to_string(),
        1,
    )
    .await;
    mount_page(&server, "/one", "<html><body>one</body></html>".to_string(), 1).await;
    mount_page(&server, "/two", "<html><body>two</body></html>".to_string(), 0).await;
    mount_page(&server, "/three", "<html><body>three</body></html>".to_string(), 0).await;

    let kb = test_crawler(2).crawl(&server.uri()).await.expect("Crawl failed");

    assert_eq!(kb.pages.len(), 2);
    assert_eq!(kb.metadata.max_pages_limit, 2);
}

#[tokio::test]
async fn test_non_html_and_missing_pages_dropped() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "/",
        r#"<html><body>
            <a href="/report.pdf">PDF</a>
            <a href="/missing">Missing</a>
            <a href="/ok">OK</a>
        </body></html>"#
            .to_string(),
        1,
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/report.pdf"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(b"%PDF-1.4".to_vec(), "application/pdf"),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;
    mount_page(&server, "/ok", "<html><body>fine</body></html>".to_string(), 1).await;

    let kb = test_crawler(10).crawl(&server.uri()).await.expect("Crawl failed");

    assert_eq!(
        urls(&kb),
        vec![format!("{}/", server.uri()), format!("{}/ok", server.uri())]
    );
    assert_eq!(kb.metadata.visited_urls, 4);
    assert_eq!(kb.metadata.failures.get("unsupported_content_type"), Some(&1));
    assert_eq!(kb.metadata.failures.get("transport_failure"), Some(&1));
}

#[tokio::test]
async fn test_unreachable_seed_yields_empty_knowledge_base() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let kb = test_crawler(10).crawl(&server.uri()).await.expect("Crawl failed");

    assert!(kb.is_empty());
    assert_eq!(kb.total_word_count, 0);
    assert_eq!(kb.metadata.failures.get("transport_failure"), Some(&1));
}

#[tokio::test]
async fn test_politeness_delay_between_requests() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "/",
        r#"<html><body><a href="/next">next</a></body></html>"#.to_string(),
        1,
    )
    .await;
    mount_page(&server, "/next", "<html><body>done</body></html>".to_string(), 1).await;

    let fetcher = HttpFetcher::new(&UserAgentConfig::default(), Duration::from_secs(5))
        .expect("Failed to build client");
    let crawler = Crawler::new(fetcher, 10, Duration::from_millis(200));

    let started = std::time::Instant::now();
    let kb = crawler.crawl(&server.uri()).await.expect("Crawl failed");

    assert_eq!(kb.pages.len(), 2);
    assert!(started.elapsed() >= Duration::from_millis(200));
    assert_eq!(kb.metadata.delay_between_requests, 0.2);
}

#[tokio::test]
async fn test_politeness_delay_after_failed_request() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "/",
        r#"<html><body><a href="/gone">gone</a> <a href="/next">next</a></body></html>"#
            .to_string(),
        1,
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/gone"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;
    mount_page(&server, "/next", "<html><body>done</body></html>".to_string(), 1).await;

    let fetcher = HttpFetcher::new(&UserAgentConfig::default(), Duration::from_secs(5))
        .expect("Failed to build client");
    let crawler = Crawler::new(fetcher, 10, Duration::from_millis(150));

    let started = std::time::Instant::now();
    let kb = crawler.crawl(&server.uri()).await.expect("Crawl failed");

    assert!(started.elapsed() >= Duration::from_millis(300));
    assert_eq!(kb.pages.len(), 2);
    assert_eq!(kb.metadata.visited_urls, 3);
    assert_eq!(kb.metadata.failures.get("transport_failure"), Some(&1));
}

#[tokio::test]
async fn test_latin1_page_is_recorded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            b"<html><head><title>Caf\xe9 Central</title></head>\
              <body><p>Fresh bread every morning.</p></body></html>"
                .to_vec(),
            "text/html; charset=iso-8859-1",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let kb = test_crawler(10).crawl(&server.uri()).await.expect("Crawl failed");

    assert_eq!(kb.pages.len(), 1);
    assert!(kb.metadata.failures.is_empty());
    assert_eq!(kb.pages[0].paragraphs, vec!["Fresh bread every morning."]);
}

#[tokio::test]
async fn test_interrupt_keeps_partial_knowledge_base() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "/",
        r#"<html><body><p>The first page is recorded.</p><a href="/later">later</a></body></html>"#
            .to_string(),
        1,
    )
    .await;
    mount_page(&server, "/later", "<html><body>never</body></html>".to_string(), 0).await;

    let fetcher = HttpFetcher::new(&UserAgentConfig::default(), Duration::from_secs(5))
        .expect("Failed to build client");
    let crawler = Crawler::new(fetcher, 10, Duration::from_secs(30));

    let shutdown = tokio::time::sleep(Duration::from_millis(300));
    let kb = crawler
        .crawl_until(&server.uri(), shutdown)
        .await
        .expect("Crawl failed");

    assert!(kb.metadata.interrupted);
    assert_eq!(kb.pages.len(), 1);
    assert_eq!(kb.pages[0].paragraphs, vec!["The first page is recorded."]);
}
