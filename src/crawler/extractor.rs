//! Content extractor
//!
//! Converts one fetched page's markup into a [`PageRecord`]:
//! - title (or a placeholder naming the URL)
//! - headings h1..h6 and paragraphs, in document order
//! - same-domain outbound links, resolved and deduplicated
//! - `<meta>` name/property → content pairs
//! - boilerplate-stripped plain text and its word count

use crate::knowledge::PageRecord;
use crate::url::{resolve_link, DomainScope};
use scraper::{ElementRef, Html, Selector};
use std::collections::{BTreeMap, HashSet};
use url::Url;

/// Subtrees dropped before the plain text is collected
const BOILERPLATE_TAGS: &[&str] = &["script", "style", "nav", "footer", "aside", "header"];

/// Paragraphs must be longer than this many characters after cleaning
const MIN_PARAGRAPH_CHARS: usize = 10;

/// Extracts a structured record from a page's markup
///
/// Links are resolved against `page_url` and kept only when they fall inside `scope`.
///
/// # Example
///
/// ```
/// use sitelore::crawler::extract;
/// use sitelore::url::DomainScope;
/// use url::Url;
///
/// let html = r#"<html><head><title>Test</title></head>
///     <body><p>A paragraph long enough to keep.</p><a href="/next">Next</a></body></html>"#;
/// let url = Url::parse("https://example.com/").unwrap();
/// let page = extract(html, &url, &DomainScope::from_seed(&url).unwrap());
///
/// assert_eq!(page.title, "Test");
/// assert_eq!(page.links, vec!["https://example.com/next".to_string()]);
/// ```
pub fn extract(markup: &str, page_url: &Url, scope: &DomainScope) -> PageRecord {
    let document = Html::parse_document(markup);

    let title =
        extract_title(&document).unwrap_or_else(|| format!("Page from {}", page_url.as_str()));
    let headings = extract_headings(&document);
    let paragraphs = extract_paragraphs(&document);
    let links = extract_links(&document, page_url, scope);
    let metadata = extract_metadata(&document);
    let text_content = extract_text_content(&document);

    PageRecord::new(
        page_url.as_str(),
        title,
        headings,
        paragraphs,
        links,
        metadata,
        text_content,
    )
}

/// Normalizes whitespace runs to single spaces and strips non-printable characters
///
/// Characters outside printable ASCII (plus newline, carriage return and tab) are
/// removed first, then whitespace is collapsed, so the result never contains
/// doubled spaces.
pub fn clean_text(text: &str) -> String {
    let printable: String = text
        .chars()
        .filter(|c| matches!(c, ' '..='~' | '\n' | '\r' | '\t'))
        .collect();

    printable.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn selector(css: &str) -> Option<Selector> {
    Selector::parse(css).ok()
}

fn element_text(element: ElementRef) -> String {
    clean_text(&element.text().collect::<String>())
}

fn extract_title(document: &Html) -> Option<String> {
    let title_selector = selector("title")?;

    document
        .select(&title_selector)
        .next()
        .map(element_text)
        .filter(|s| !s.is_empty())
}

fn extract_headings(document: &Html) -> Vec<String> {
    let Some(heading_selector) = selector("h1, h2, h3, h4, h5, h6") else {
        return Vec::new();
    };

    document
        .select(&heading_selector)
        .map(element_text)
        .filter(|s| !s.is_empty())
        .collect()
}

fn extract_paragraphs(document: &Html) -> Vec<String> {
    let Some(paragraph_selector) = selector("p") else {
        return Vec::new();
    };

    document
        .select(&paragraph_selector)
        .map(element_text)
        .filter(|s| s.chars().count() > MIN_PARAGRAPH_CHARS)
        .collect()
}

fn extract_links(document: &Html, page_url: &Url, scope: &DomainScope) -> Vec<String> {
    let Some(anchor_selector) = selector("a[href]") else {
        return Vec::new();
    };

    let mut seen = HashSet::new();
    let mut links = Vec::new();

    for element in document.select(&anchor_selector) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };

        let Some(absolute) = resolve_link(href, page_url) else {
            continue;
        };

        if !scope.contains(&absolute) {
            continue;
        }

        let link = absolute.to_string();
        if seen.insert(link.clone()) {
            links.push(link);
        }
    }

    links
}

fn extract_metadata(document: &Html) -> BTreeMap<String, String> {
    let mut metadata = BTreeMap::new();
    let Some(meta_selector) = selector("meta") else {
        return metadata;
    };

    for element in document.select(&meta_selector) {
        let attrs = element.value();
        let name = attrs
            .attr("name")
            .filter(|n| !n.is_empty())
            .or_else(|| attrs.attr("property"))
            .filter(|n| !n.is_empty());
        let content = attrs.attr("content").filter(|c| !c.is_empty());

        if let (Some(name), Some(content)) = (name, content) {
            metadata.insert(name.to_string(), content.to_string());
        }
    }

    metadata
}

fn extract_text_content(document: &Html) -> String {
    let mut blocks = Vec::new();
    collect_text(document.root_element(), &mut blocks);
    clean_text(&blocks.join("\n"))
}

fn collect_text(element: ElementRef, blocks: &mut Vec<String>) {
    for child in element.children() {
        if let Some(child_element) = ElementRef::wrap(child) {
            if BOILERPLATE_TAGS.contains(&child_element.value().name()) {
                continue;
            }
            collect_text(child_element, blocks);
        } else if let Some(text) = child.value().as_text() {
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                blocks.push(trimmed.to_string());
            }
        }
    }
}
