use url::Url;

/// Extracts the domain from a URL
///
/// This function retrieves the host portion of a URL and converts it to lowercase.
/// If the URL has no host, it returns None.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use sitelore::url::extract_domain;
///
/// let url = Url::parse("https://EXAMPLE.COM/path").unwrap();
/// assert_eq!(extract_domain(&url), Some("example.com".to_string()));
///
/// let url = Url::parse("https://sub.example.com/path").unwrap();
/// assert_eq!(extract_domain(&url), Some("sub.example.com".to_string()));
/// ```
pub fn extract_domain(url: &Url) -> Option<String> {
    url.host_str().map(|h| h.to_lowercase())
}

/// Returns the apex domain of a hostname: its last two dot-separated labels
///
/// A single trailing dot (fully-qualified form) is ignored. Hostnames with
/// fewer than two labels are returned unchanged (lowercased).
///
/// # Examples
///
/// ```
/// use sitelore::url::apex_domain;
///
/// assert_eq!(apex_domain("docs.Example.com"), "example.com");
/// assert_eq!(apex_domain("example.com"), "example.com");
/// assert_eq!(apex_domain("www.example.com."), "example.com");
/// assert_eq!(apex_domain("localhost"), "localhost");
/// ```
pub fn apex_domain(host: &str) -> String {
    let host = host.trim().to_lowercase();
    let host = host.strip_suffix('.').unwrap_or(&host).to_string();
    let labels: Vec<&str> = host.split('.').collect();
    if labels.len() >= 2 {
        labels[labels.len() - 2..].join(".")
    } else {
        host
    }
}
