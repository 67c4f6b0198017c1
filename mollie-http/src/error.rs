//! HTTP Client error types.

use thiserror::Error;

/// Result type for HTTP client operations.
pub type Result<T> = std::result::Result<T, HttpClientError>;

/// HTTP client errors.
///
/// These only describe failures to complete a round trip. A response with a
/// 4xx or 5xx status is still a successful round trip at this layer.
#[derive(Debug, Error)]
pub enum HttpClientError {
    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// A path segment that would change which resource is addressed.
    #[error("Invalid path segment: {0:?}")]
    InvalidPathSegment(String),

    /// Request building error.
    #[error("Failed to build request: {0}")]
    RequestBuild(String),

    /// JSON or query-string encoding error.
    #[error("Encoding error: {0}")]
    Encode(String),

    /// Underlying HTTP client error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),
}

impl HttpClientError {
    /// Check if this is a timeout error.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Http(e) if e.is_timeout())
    }

    /// Check if this is a connection error.
    pub fn is_connection(&self) -> bool {
        matches!(self, Self::Http(e) if e.is_connect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = HttpClientError::InvalidUrl("not a url".to_string());
        assert_eq!(err.to_string(), "Invalid URL: not a url");
        assert!(!err.is_timeout());
        assert!(!err.is_connection());
    }

    #[test]
    fn test_from_url_parse_error() {
        let parse_err = url::Url::parse("::").unwrap_err();
        let err: HttpClientError = parse_err.into();
        assert!(matches!(err, HttpClientError::UrlParse(_)));
    }
}
