//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler, including:
//! - The `PageFetcher` capability the crawl loop is written against
//! - Building HTTP clients with proper user agent strings
//! - GET requests returning raw bytes, content type and status
//! - Decoding bodies with the charset declared in Content-Type
//! - Classifying transport errors

use crate::config::UserAgentConfig;
use crate::state::PageError;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Content types the extractor accepts
const HTML_CONTENT_TYPES: &[&str] = &["text/html", "application/xhtml+xml"];

/// A successfully fetched response
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// Final URL after redirects
    pub final_url: String,
    /// HTTP status code
    pub status: u16,
    /// Content-Type header value (empty if absent)
    pub content_type: String,
    /// Raw response body
    pub body: Vec<u8>,
}

impl FetchedPage {
    /// Returns true if the response declares an HTML content type
    pub fn is_html(&self) -> bool {
        is_html_content_type(&self.content_type)
    }

    /// Decodes the body into markup using the declared charset
    ///
    /// Single-byte Latin charsets are mapped byte by byte. Anything else is
    /// read as UTF-8, replacing invalid sequences. A body containing NUL bytes
    /// is binary data mislabelled as HTML and fails to parse.
    pub fn into_markup(self, url: &Url) -> Result<String, PageError> {
        if self.body.contains(&0) {
            return Err(PageError::ParseFailure {
                url: url.to_string(),
                reason: "body contains NUL bytes".to_string(),
            });
        }

        let markup: String = match declared_charset(&self.content_type).as_deref() {
            Some("iso-8859-1" | "latin1" | "l1" | "us-ascii" | "ascii") => {
                self.body.iter().map(|&b| b as char).collect()
            }
            Some("windows-1252" | "cp1252" | "x-cp1252") => decode_windows_1252(&self.body),
            _ => match String::from_utf8(self.body) {
                Ok(text) => text,
                Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
            },
        };
        Ok(markup)
    }
}

/// Returns the lowercased `charset` parameter of a Content-Type value
pub fn declared_charset(content_type: &str) -> Option<String> {
    content_type.split(';').skip(1).find_map(|param| {
        let (name, value) = param.split_once('=')?;
        name.trim()
            .eq_ignore_ascii_case("charset")
            .then(|| value.trim().trim_matches('"').to_ascii_lowercase())
    })
}

/// Code points for bytes 0x80..=0x9F; the rest of windows-1252 matches Latin-1
const WINDOWS_1252_HIGH: [char; 32] = [
    '\u{20AC}', '\u{0081}', '\u{201A}', '\u{0192}', '\u{201E}', '\u{2026}', '\u{2020}', '\u{2021}',
    '\u{02C6}', '\u{2030}', '\u{0160}', '\u{2039}', '\u{0152}', '\u{008D}', '\u{017D}', '\u{008F}',
    '\u{0090}', '\u{2018}', '\u{2019}', '\u{201C}', '\u{201D}', '\u{2022}', '\u{2013}', '\u{2014}',
    '\u{02DC}', '\u{2122}', '\u{0161}', '\u{203A}', '\u{0153}', '\u{009D}', '\u{017E}', '\u{0178}',
];

fn decode_windows_1252(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&b| match b {
            0x80..=0x9F => WINDOWS_1252_HIGH[usize::from(b - 0x80)],
            _ => b as char,
        })
        .collect()
}

/// Checks a Content-Type header value against the accepted HTML types
///
/// Parameters such as `charset` are ignored and the comparison is case-insensitive.
pub fn is_html_content_type(content_type: &str) -> bool {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_ascii_lowercase();
    HTML_CONTENT_TYPES.contains(&essence.as_str())
}

/// Capability that turns a URL into raw page bytes
///
/// Implementations own the transport: redirects, TLS and network timeouts.
/// Any failure to obtain a 2xx response is reported as
/// [`PageError::TransportFailure`].
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &Url) -> Result<FetchedPage, PageError>;
}

/// `PageFetcher` backed by a reqwest client
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Creates a fetcher identifying itself with the configured user agent
    pub fn new(config: &UserAgentConfig, timeout: Duration) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: build_http_client(config, timeout)?,
        })
    }
}

/// Builds an HTTP client with proper configuration
///
/// # Example
///
/// ```no_run
/// use sitelore::config::UserAgentConfig;
/// use sitelore::crawler::build_http_client;
/// use std::time::Duration;
///
/// let client = build_http_client(&UserAgentConfig::default(), Duration::from_secs(30)).unwrap();
/// ```
pub fn build_http_client(
    config: &UserAgentConfig,
    timeout: Duration,
) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.header_value())
        .timeout(timeout)
        .connect_timeout(timeout.min(Duration::from_secs(10)))
        .gzip(true)
        .brotli(true)
        .build()
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &Url) -> Result<FetchedPage, PageError> {
        let transport_failure = |reason: String| PageError::TransportFailure {
            url: url.to_string(),
            reason,
        };

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| transport_failure(classify_error(&e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(transport_failure(format!("HTTP {}", status.as_u16())));
        }

        let final_url = response.url().to_string();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();

        let body = response
            .bytes()
            .await
            .map_err(|e| transport_failure(classify_error(&e)))?;

        Ok(FetchedPage {
            final_url,
            status: status.as_u16(),
            content_type,
            body: body.to_vec(),
        })
    }
}

fn classify_error(error: &reqwest::Error) -> String {
    if error.is_timeout() {
        "Request timeout".to_string()
    } else if error.is_connect() {
        "Connection refused".to_string()
    } else {
        error.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_http_client() {
        let client = build_http_client(&UserAgentConfig::default(), Duration::from_secs(5));
        assert!(client.is_ok());
    }

    #[test]
    fn test_html_content_types() {
        assert!(is_html_content_type("text/html"));
        assert!(is_html_content_type("text/html; charset=utf-8"));
        assert!(is_html_content_type("TEXT/HTML"));
        assert!(is_html_content_type("application/xhtml+xml"));
    }

    #[test]
    fn test_non_html_content_types() {
        assert!(!is_html_content_type("application/pdf"));
        assert!(!is_html_content_type("application/json"));
        assert!(!is_html_content_type("text/plain"));
        assert!(!is_html_content_type(""));
    }

    fn page(content_type: &str, body: &[u8]) -> FetchedPage {
        FetchedPage {
            final_url: "https://example.com/".to_string(),
            status: 200,
            content_type: content_type.to_string(),
            body: body.to_vec(),
        }
    }

    #[test]
    fn test_into_markup_rejects_binary_body() {
        let url = Url::parse("https://example.com/").unwrap();
        let png = page("text/html", b"\x89PNG\r\n\x1a\n\x00\x00\x00\rIHDR");

        let err = png.into_markup(&url).unwrap_err();
        assert_eq!(err.kind(), "parse_failure");
    }

    #[test]
    fn test_into_markup_decodes_latin1() {
        let url = Url::parse("https://example.com/").unwrap();
        let latin1 = page("text/html; charset=ISO-8859-1", b"<p>Caf\xe9</p>");

        assert_eq!(latin1.into_markup(&url).unwrap(), "<p>Caf\u{e9}</p>");
    }

    #[test]
    fn test_into_markup_decodes_windows_1252() {
        let url = Url::parse("https://example.com/").unwrap();
        let cp1252 = page("text/html; charset=\"windows-1252\"", b"\x93quoted\x94 \x80");

        assert_eq!(
            cp1252.into_markup(&url).unwrap(),
            "\u{201C}quoted\u{201D} \u{20AC}"
        );
    }

    #[test]
    fn test_into_markup_replaces_invalid_utf8() {
        let url = Url::parse("https://example.com/").unwrap();
        let mislabelled = page("text/html", b"<p>caf\xe9 ok</p>");

        assert_eq!(mislabelled.into_markup(&url).unwrap(), "<p>caf\u{FFFD} ok</p>");
    }

    #[test]
    fn test_declared_charset() {
        assert_eq!(
            declared_charset("text/html; charset=UTF-8").as_deref(),
            Some("utf-8")
        );
        assert_eq!(
            declared_charset("text/html;Charset=\"iso-8859-1\"").as_deref(),
            Some("iso-8859-1")
        );
        assert_eq!(declared_charset("text/html"), None);
    }

    #[test]
    fn test_into_markup_decodes_utf8() {
        let page = FetchedPage {
            final_url: "https://example.com/".to_string(),
            status: 200,
            content_type: "text/html".to_string(),
            body: b"<html></html>".to_vec(),
        };
        let url = Url::parse("https://example.com/").unwrap();

        assert_eq!(page.into_markup(&url).unwrap(), "<html></html>");
    }
}
