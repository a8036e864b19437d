//! `/process-html`: fetch a page, extract a CSS selection, return text.

use axum::extract::{Query, State};
use serde::Deserialize;

use feedtext_client::{ExtractOptions, extract_page};

use crate::error::ApiError;
use crate::routes::{flag, require_url, separator_param};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct HtmlQuery {
    pub url: Option<String>,
    pub selector: Option<String>,
    pub separator: Option<String>,
    #[serde(rename = "stripHTML")]
    pub strip_html: Option<String>,
    #[serde(rename = "removeSpace")]
    pub remove_space: Option<String>,
}

pub async fn process_html(State(state): State<AppState>, Query(query): Query<HtmlQuery>) -> Result<String, ApiError> {
    let url = require_url(query.url.as_deref())?;
    let opts = extract_options(&query);

    let response = state.fetch.fetch(url).await?;
    let html = String::from_utf8_lossy(&response.bytes);

    Ok(extract_page(&html, &opts)?)
}

fn extract_options(query: &HtmlQuery) -> ExtractOptions {
    ExtractOptions {
        selector: query
            .selector
            .clone()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "body".to_string()),
        separator: separator_param(query.separator.as_deref()),
        strip_html: flag(query.strip_html.as_deref()),
        collapse_whitespace: flag(query.remove_space.as_deref()),
    }
}
