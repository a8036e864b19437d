//! Target URL validation for upstream fetches.

/// Error type for target URL validation failures.
#[derive(Debug, Clone, thiserror::Error)]
pub enum UrlError {
    #[error("empty URL")]
    Empty,

    #[error("unsupported scheme: {0}")]
    UnsupportedScheme(String),

    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}

/// Validate a query-supplied target URL.
///
/// Steps:
/// 1. Trim leading/trailing whitespace
/// 2. Default scheme to https:// if missing
/// 3. Reject anything that is not http or https
pub fn parse_target(input: &str) -> Result<url::Url, UrlError> {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Err(UrlError::Empty);
    }

    let url_str = if trimmed.contains("://") { trimmed.to_string() } else { format!("https://{trimmed}") };

    let parsed = url::Url::parse(&url_str).map_err(|e| UrlError::InvalidUrl(e.to_string()))?;

    match parsed.scheme() {
        "http" | "https" => {}
        scheme => return Err(UrlError::UnsupportedScheme(scheme.to_string())),
    }

    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_target_basic() {
        let url = parse_target("https://example.com/feed.xml").unwrap();
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_str(), Some("example.com"));
        assert_eq!(url.path(), "/feed.xml");
    }

    #[test]
    fn test_parse_target_default_scheme() {
        let url = parse_target("example.com/feed.xml").unwrap();
        assert_eq!(url.scheme(), "https");
    }

    #[test]
    fn test_parse_target_http_allowed() {
        let url = parse_target("http://example.com").unwrap();
        assert_eq!(url.scheme(), "http");
    }

    #[test]
    fn test_parse_target_trims_whitespace() {
        let url = parse_target("  https://example.com  ").unwrap();
        assert_eq!(url.as_str(), "https://example.com/");
    }

    #[test]
    fn test_parse_target_preserves_query() {
        let url = parse_target("https://example.com/feed?format=rss&page=2").unwrap();
        assert_eq!(url.query(), Some("format=rss&page=2"));
    }

    #[test]
    fn test_parse_target_empty() {
        assert!(matches!(parse_target(""), Err(UrlError::Empty)));
        assert!(matches!(parse_target("   "), Err(UrlError::Empty)));
    }

    #[test]
    fn test_parse_target_unsupported_scheme() {
        let result = parse_target("file:///etc/passwd");
        assert!(matches!(result, Err(UrlError::UnsupportedScheme(_))));
    }

    #[test]
    fn test_parse_target_garbage() {
        let result = parse_target("https://");
        assert!(matches!(result, Err(UrlError::InvalidUrl(_))));
    }
}
