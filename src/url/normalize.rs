use crate::UrlError;
use url::Url;

/// Schemes whose links never lead to a fetchable page
const SKIPPED_SCHEMES: &[&str] = &["mailto:", "javascript:", "tel:", "data:"];

/// Normalizes a URL for frontier bookkeeping
///
/// # Normalization Steps
///
/// 1. Parse the URL; reject if malformed
/// 2. Accept only HTTP and HTTPS
/// 3. Require a host (lowercased by the parser)
/// 4. Remove the fragment (everything after #)
///
/// Paths and query strings are kept verbatim so the normalized URL always
/// addresses the same resource the page linked to.
///
/// # Examples
///
/// ```
/// use sitelore::url::normalize_url;
///
/// let url = normalize_url("https://EXAMPLE.com/guide#install").unwrap();
/// assert_eq!(url.as_str(), "https://example.com/guide");
/// ```
pub fn normalize_url(url_str: &str) -> Result<Url, UrlError> {
    let url = Url::parse(url_str.trim()).map_err(|e| UrlError::Parse(e.to_string()))?;
    normalize_parsed(url)
}

fn normalize_parsed(mut url: Url) -> Result<Url, UrlError> {
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::InvalidScheme(format!(
            "Only HTTP and HTTPS schemes are supported, got: {}",
            url.scheme()
        )));
    }

    if url.host_str().map_or(true, str::is_empty) {
        return Err(UrlError::MissingDomain);
    }

    url.set_fragment(None);

    Ok(url)
}

/// Resolves a link href against the page it appeared on
///
/// Returns None if the link should be excluded:
/// - empty or fragment-only hrefs (same page anchors)
/// - mailto:, javascript:, tel: and data: links
/// - hrefs that do not resolve to an HTTP(S) URL with a host
///
/// # Examples
///
/// ```
/// use sitelore::url::resolve_link;
/// use url::Url;
///
/// let base = Url::parse("https://example.com/docs/intro").unwrap();
/// let link = resolve_link("setup#linux", &base).unwrap();
/// assert_eq!(link.as_str(), "https://example.com/docs/setup");
/// assert!(resolve_link("#top", &base).is_none());
/// ```
pub fn resolve_link(href: &str, base_url: &Url) -> Option<Url> {
    let href = href.trim();

    if href.is_empty() || href.starts_with('#') {
        return None;
    }

    let lowered = href.to_ascii_lowercase();
    if SKIPPED_SCHEMES
        .iter()
        .any(|scheme| lowered.starts_with(scheme))
    {
        return None;
    }

    let absolute = base_url.join(href).ok()?;
    normalize_parsed(absolute).ok()
}
