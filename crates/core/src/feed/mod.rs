//! Open-schema feed model.
//!
//! Real-world RSS feeds attach arbitrary extension elements to their items
//! (`dc:creator`, `media:content`, tracking fields, ...), so an item is not
//! decoded into a fixed struct. Instead every direct child element of an
//! `<item>` becomes an entry in an open field map keyed by its local
//! (namespace-stripped) name.

use std::collections::HashMap;

mod decode;

pub use decode::decode;

/// Decoded representation of an RSS/Atom channel and its items.
///
/// Built once per request from fetched bytes and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Feed {
    /// Channel title. Empty if the document carries none.
    pub title: String,
    /// Channel link, resolved from an `href` attribute (Atom convention) or
    /// element text (RSS convention). May be empty.
    pub link: String,
    /// Items in document order.
    pub items: Vec<Item>,
}

/// One feed entry: an open mapping from element name to text value.
///
/// If the same element name repeats within one item, the later occurrence
/// overwrites the earlier one. Open schemas cannot predict repetition
/// semantics, so last-write-wins is the documented policy rather than an
/// oversight.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Item {
    /// Field name (local element name) to decoded text content.
    pub fields: HashMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_default_is_empty() {
        let feed = Feed::default();
        assert!(feed.title.is_empty());
        assert!(feed.link.is_empty());
        assert!(feed.items.is_empty());
    }
}
