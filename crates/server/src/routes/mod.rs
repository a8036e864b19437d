//! HTTP routing and shared query-parameter helpers.

pub mod html;
pub mod rss;

use axum::Router;
use axum::http::header;
use axum::response::IntoResponse;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use feedtext_core::{Error, unescape_separator};

use crate::state::AppState;

const README: &str = include_str!("../../../../README.md");

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/process-rss", get(rss::process_rss))
        .route("/process-html", get(html::process_html))
        .route("/", get(index))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve the embedded service documentation.
async fn index() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/markdown; charset=utf-8")], README)
}

/// A boolean query flag: anything but the literal `false` is true.
pub(crate) fn flag(value: Option<&str>) -> bool {
    !matches!(value, Some("false"))
}

/// Separator parameter with its default and `\n` escape translation.
pub(crate) fn separator_param(value: Option<&str>) -> String {
    unescape_separator(value.filter(|s| !s.is_empty()).unwrap_or("\n\n"))
}

/// The url parameter is the one input with no usable default.
pub(crate) fn require_url(value: Option<&str>) -> Result<&str, Error> {
    match value {
        Some(url) if !url.is_empty() => Ok(url),
        _ => Err(Error::InvalidParam("missing url parameter".into())),
    }
}
