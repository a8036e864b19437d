//! `/process-rss`: fetch a feed, decode it open-schema, render plain text.

use axum::extract::{Query, State};
use serde::Deserialize;

use feedtext_core::{Error, FormatOptions, decode, render};

use crate::error::ApiError;
use crate::routes::{flag, require_url, separator_param};
use crate::state::AppState;

/// Raw query parameters; defaults and parsing are applied by hand so error
/// messages can name the offending parameter.
#[derive(Debug, Default, Deserialize)]
pub struct RssQuery {
    pub url: Option<String>,
    pub separator: Option<String>,
    #[serde(rename = "stripHTML")]
    pub strip_html: Option<String>,
    #[serde(rename = "removeSpace")]
    pub remove_space: Option<String>,
    pub length: Option<String>,
}

pub async fn process_rss(State(state): State<AppState>, Query(query): Query<RssQuery>) -> Result<String, ApiError> {
    let url = require_url(query.url.as_deref())?;
    let opts = format_options(&query)?;

    let response = state.fetch.fetch(url).await?;
    let body = String::from_utf8_lossy(&response.bytes);
    let feed = decode(&body)?;

    Ok(render(&feed, &opts))
}

fn format_options(query: &RssQuery) -> Result<FormatOptions, Error> {
    let limit = match query.length.as_deref() {
        None | Some("") => 0,
        Some(raw) => raw
            .parse::<usize>()
            .map_err(|_| Error::InvalidParam(format!("length must be a non-negative integer, got {raw:?}")))?,
    };

    Ok(FormatOptions {
        separator: separator_param(query.separator.as_deref()),
        strip_html: flag(query.strip_html.as_deref()),
        collapse_whitespace: flag(query.remove_space.as_deref()),
        limit,
    })
}
