//! Deterministic plain-text rendering of a decoded feed.
//!
//! Item fields live in an unordered map, so the renderer sorts keys before
//! emitting them; output depends only on the feed contents and the options,
//! never on map iteration order.

use crate::feed::Feed;
use crate::text::clean_value;

/// User-selectable rendering knobs, built once per request from query
/// parameters and read-only thereafter.
#[derive(Debug, Clone, PartialEq)]
pub struct FormatOptions {
    /// Separator emitted after the header and between items.
    pub separator: String,
    /// Strip `<...>` tags from field values.
    pub strip_html: bool,
    /// Collapse whitespace runs in field values to single spaces.
    pub collapse_whitespace: bool,
    /// Maximum number of items to emit; 0 means unlimited.
    pub limit: usize,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self { separator: "\n\n".to_string(), strip_html: true, collapse_whitespace: true, limit: 0 }
    }
}

/// Translate the two-character escape sequence `\n` in a query-supplied
/// separator into a real newline.
pub fn unescape_separator(raw: &str) -> String {
    raw.replace("\\n", "\n")
}

/// Render a feed as one plain-text document.
///
/// Layout: `Channel Title: <title>` line, a `Channel Link: <link>` line when
/// the link is non-empty, one separator, then per item a `Channel Item <n>:`
/// header followed by `<key>: <value>` lines in ascending key order. The
/// separator appears between emitted items only; a limit that truncates the
/// item list does not leave a trailing separator.
pub fn render(feed: &Feed, opts: &FormatOptions) -> String {
    let mut out = String::new();

    out.push_str(&format!("Channel Title: {}\n", feed.title));
    if !feed.link.is_empty() {
        out.push_str(&format!("Channel Link: {}", feed.link));
    }
    out.push_str(&opts.separator);

    let emitted = if opts.limit == 0 { feed.items.len() } else { feed.items.len().min(opts.limit) };

    for (i, item) in feed.items.iter().take(emitted).enumerate() {
        out.push_str(&format!("Channel Item {}:\n", i + 1));

        let mut keys: Vec<&String> = item.fields.keys().collect();
        keys.sort();

        for key in keys {
            let value = clean_value(&item.fields[key], opts.strip_html, opts.collapse_whitespace);
            out.push_str(&format!("{key}: {value}\n"));
        }

        if i + 1 < emitted {
            out.push_str(&opts.separator);
        }
    }

    out
}
