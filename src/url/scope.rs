use crate::url::domain::{apex_domain, extract_domain};
use crate::UrlError;
use url::Url;

/// Same-site boundary for a crawl
///
/// A URL belongs to the scope when its host equals the seed's apex domain or is
/// a subdomain of it. The port is ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainScope {
    apex: String,
}

impl DomainScope {
    /// Builds the scope from the seed URL's host
    pub fn from_seed(seed: &Url) -> Result<Self, UrlError> {
        let host = extract_domain(seed).ok_or(UrlError::MissingDomain)?;
        Ok(Self::for_host(&host))
    }

    /// Builds the scope for an arbitrary hostname
    pub fn for_host(host: &str) -> Self {
        Self {
            apex: apex_domain(host),
        }
    }

    /// The apex domain this scope is anchored on
    pub fn apex(&self) -> &str {
        &self.apex
    }

    /// Returns true if the host is the apex domain or one of its subdomains
    ///
    /// # Examples
    ///
    /// ```
    /// use sitelore::url::DomainScope;
    ///
    /// let scope = DomainScope::for_host("www.example.com");
    /// assert!(scope.contains_host("example.com"));
    /// assert!(scope.contains_host("docs.example.com"));
    /// assert!(!scope.contains_host("notexample.com"));
    /// ```
    pub fn contains_host(&self, host: &str) -> bool {
        let host = host.trim().to_lowercase();
        let host = host.strip_suffix('.').unwrap_or(&host);
        if host.is_empty() {
            return false;
        }
        host == self.apex || host.ends_with(&format!(".{}", self.apex))
    }

    /// Returns true if the URL's host lies inside the scope
    pub fn contains(&self, url: &Url) -> bool {
        extract_domain(url).is_some_and(|host| self.contains_host(&host))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scope() -> DomainScope {
        DomainScope::from_seed(&Url::parse("https://www.example.com/start").unwrap()).unwrap()
    }

    #[test]
    fn test_apex_from_seed() {
        assert_eq!(scope().apex(), "example.com");
    }

    #[test]
    fn test_fully_qualified_hosts() {
        let scope = DomainScope::for_host("www.example.com.");
        assert_eq!(scope.apex(), "example.com");
        assert!(scope.contains_host("docs.example.com."));
        assert!(!scope.contains_host("com."));
    }

    #[test]
    fn test_matches_bare_domain() {
        assert!(scope().contains_host("example.com"));
    }

    #[test]
    fn test_matches_nested_subdomains() {
        assert!(scope().contains_host("blog.example.com"));
        assert!(scope().contains_host("api.v2.example.com"));
    }

    #[test]
    fn test_no_match_partial_label() {
        assert!(!scope().contains_host("myexample.com"));
        assert!(!scope().contains_host("example.com.org"));
        assert!(!scope().contains_host("example.org"));
    }

    #[test]
    fn test_empty_host() {
        assert!(!scope().contains_host(""));
    }

    #[test]
    fn test_case_insensitive() {
        assert!(scope().contains_host("Docs.EXAMPLE.com"));
    }

    #[test]
    fn test_contains_url_ignores_port() {
        let url = Url::parse("http://shop.example.com:8443/cart").unwrap();
        assert!(scope().contains(&url));
    }

    #[test]
    fn test_seed_without_host() {
        let url = Url::parse("data:text/plain,hello").unwrap();
        assert!(matches!(
            DomainScope::from_seed(&url),
            Err(UrlError::MissingDomain)
        ));
    }
}
