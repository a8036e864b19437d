//! HTTP error responses.
//!
//! Pipeline errors map onto exactly two status codes: bad request
//! parameters are 400, everything upstream or internal is 500. Bodies are
//! plain text; no partial success body is ever written.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use feedtext_core::Error;

/// Wrapper turning pipeline errors into plain-text HTTP responses.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct ApiError(#[from] pub Error);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            if self.0.is_client_error() { StatusCode::BAD_REQUEST } else { StatusCode::INTERNAL_SERVER_ERROR };

        if status.is_server_error() {
            tracing::error!(error = %self.0, "request failed");
        }

        (status, self.0.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_are_bad_request() {
        let response = ApiError(Error::InvalidParam("missing url parameter".into())).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = ApiError(Error::InvalidUrl("empty URL".into())).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_pipeline_errors_are_internal() {
        for err in [
            Error::FetchTimeout("slow".into()),
            Error::HttpError("status 404".into()),
            Error::FetchTooLarge("too big".into()),
            Error::ParseFailed("bad xml".into()),
            Error::EmptyContent,
        ] {
            let response = ApiError(err).into_response();
            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }
}
