//! Unified error types for feedtext.
//!
//! Every failure in the fetch-decode-format pipeline maps onto one of these
//! variants; the server crate translates them into HTTP status codes.

/// Unified error types for the feedtext service.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// Invalid request parameter (e.g., missing url, non-integer length).
    #[error("INVALID_PARAM: {0}")]
    InvalidParam(String),

    /// Invalid or unsupported target URL.
    #[error("INVALID_URL: {0}")]
    InvalidUrl(String),

    /// Upstream fetch exceeded its time budget.
    #[error("FETCH_TIMEOUT: {0}")]
    FetchTimeout(String),

    /// Upstream fetch failed (transport error or non-2xx status).
    #[error("HTTP_ERROR: {0}")]
    HttpError(String),

    /// Upstream response body exceeded the configured size limit.
    #[error("FETCH_TOO_LARGE: {0}")]
    FetchTooLarge(String),

    /// The fetched document could not be decoded.
    #[error("PARSE_FAILED: {0}")]
    ParseFailed(String),

    /// HTML extraction produced no content at all.
    #[error("EMPTY_CONTENT: no content matched")]
    EmptyContent,
}

impl Error {
    /// Whether this error is the caller's fault (a bad request parameter).
    pub fn is_client_error(&self) -> bool {
        matches!(self, Error::InvalidParam(_) | Error::InvalidUrl(_))
    }
}
