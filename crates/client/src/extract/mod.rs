//! CSS-selector content extraction from fetched HTML pages.
//!
//! A thin wrapper over scraper's DOM + CSS-selector queries: pick the page
//! title, select text or markup for a configured selector, and assemble the
//! plain-text response body. Field-level normalization reuses the same
//! transforms as the feed path.

use scraper::{Html, Selector};

use feedtext_core::Error;
use feedtext_core::text::collapse_whitespace;

/// Rendering knobs for the HTML extraction path, built once per request
/// from query parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractOptions {
    /// CSS selector to extract (default: "body").
    pub selector: String,
    /// Separator between the title line and the content.
    pub separator: String,
    /// Select text content (true) or inner markup (false).
    pub strip_html: bool,
    /// Collapse whitespace runs in the selected content.
    pub collapse_whitespace: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            selector: "body".to_string(),
            separator: "\n\n".to_string(),
            strip_html: true,
            collapse_whitespace: true,
        }
    }
}

/// Text of the page's first `<title>` element, if present and non-empty.
pub fn page_title(doc: &Html) -> Option<String> {
    let selector = Selector::parse("title").expect("invalid selector");
    let title: String = doc.select(&selector).next()?.text().collect();
    if title.is_empty() { None } else { Some(title) }
}

/// Concatenated text content of every element matching the selector.
///
/// No match yields an empty string, not an error.
pub fn select_text(doc: &Html, css: &str) -> Result<String, Error> {
    let selector = parse_selector(css)?;
    Ok(doc.select(&selector).flat_map(|el| el.text()).collect())
}

/// Inner HTML of the first element matching the selector.
///
/// No match yields an empty string, not an error.
pub fn select_markup(doc: &Html, css: &str) -> Result<String, Error> {
    let selector = parse_selector(css)?;
    Ok(doc.select(&selector).next().map(|el| el.inner_html()).unwrap_or_default())
}

fn parse_selector(css: &str) -> Result<Selector, Error> {
    Selector::parse(css).map_err(|e| Error::InvalidParam(format!("invalid selector: {e}")))
}

/// Assemble the plain-text body for an extracted page.
///
/// Emits a `website title: <title><separator>` prefix when the page has a
/// non-empty title, then the selected text (strip_html) or markup,
/// trimmed and whitespace-collapsed when collapsing is enabled.
///
/// # Errors
///
/// Returns [`Error::EmptyContent`] when the final content is empty, and
/// [`Error::InvalidParam`] for an unparseable selector.
pub fn extract_page(html: &str, opts: &ExtractOptions) -> Result<String, Error> {
    let doc = Html::parse_document(html);

    let mut content = String::new();
    if let Some(title) = page_title(&doc) {
        content.push_str(&format!("website title: {title}{}", opts.separator));
    }

    let selected =
        if opts.strip_html { select_text(&doc, &opts.selector)? } else { select_markup(&doc, &opts.selector)? };
    let selected = if opts.collapse_whitespace { collapse_whitespace(selected.trim()) } else { selected };

    content.push_str(&selected);

    if content.is_empty() {
        return Err(Error::EmptyContent);
    }

    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIMPLE_PAGE: &str = r#"
        <!DOCTYPE html>
        <html>
        <head><title>Test Page</title></head>
        <body>
            <h1>Heading</h1>
            <p>First   paragraph.</p>
            <p>Second paragraph.</p>
        </body>
        </html>
    "#;

    #[test]
    fn test_page_title_present() {
        let doc = Html::parse_document(SIMPLE_PAGE);
        assert_eq!(page_title(&doc), Some("Test Page".to_string()));
    }

    #[test]
    fn test_page_title_absent() {
        let doc = Html::parse_document("<html><body><p>no title</p></body></html>");
        assert_eq!(page_title(&doc), None);
    }

    #[test]
    fn test_select_text_concatenates_matches() {
        let doc = Html::parse_document(SIMPLE_PAGE);
        let text = select_text(&doc, "p").unwrap();
        assert!(text.contains("First"));
        assert!(text.contains("Second paragraph."));
    }

    #[test]
    fn test_select_text_no_match_is_empty() {
        let doc = Html::parse_document(SIMPLE_PAGE);
        assert_eq!(select_text(&doc, "article").unwrap(), "");
    }

    #[test]
    fn test_select_markup_first_match() {
        let doc = Html::parse_document("<html><body><div><em>x</em></div><div>y</div></body></html>");
        assert_eq!(select_markup(&doc, "div").unwrap(), "<em>x</em>");
    }

    #[test]
    fn test_select_invalid_selector() {
        let doc = Html::parse_document(SIMPLE_PAGE);
        let result = select_text(&doc, "p[unclosed");
        assert!(matches!(result, Err(Error::InvalidParam(_))));
    }

    #[test]
    fn test_extract_page_title_line_and_content() {
        let opts = ExtractOptions::default();
        let content = extract_page(SIMPLE_PAGE, &opts).unwrap();
        assert!(content.starts_with("website title: Test Page\n\n"));
        assert!(content.contains("First paragraph."));
    }

    #[test]
    fn test_extract_page_collapses_whitespace() {
        let opts = ExtractOptions::default();
        let content = extract_page(SIMPLE_PAGE, &opts).unwrap();
        assert!(content.contains("First paragraph. Second paragraph."));
        assert!(!content.contains("   "));
    }

    #[test]
    fn test_extract_page_markup_when_strip_disabled() {
        let opts = ExtractOptions { strip_html: false, collapse_whitespace: false, ..Default::default() };
        let content = extract_page("<html><body><div><b>kept</b></div></body></html>", &opts).unwrap();
        assert!(content.contains("<b>kept</b>"));
    }

    #[test]
    fn test_extract_page_custom_selector() {
        let opts = ExtractOptions { selector: "h1".to_string(), ..Default::default() };
        let content = extract_page(SIMPLE_PAGE, &opts).unwrap();
        assert!(content.contains("Heading"));
        assert!(!content.contains("First paragraph"));
    }

    #[test]
    fn test_extract_page_title_only_is_not_empty() {
        // Selector matches nothing but the page has a title: not an error.
        let opts = ExtractOptions { selector: "h2".to_string(), ..Default::default() };
        let content = extract_page(SIMPLE_PAGE, &opts).unwrap();
        assert_eq!(content, "website title: Test Page\n\n");
    }

    #[test]
    fn test_extract_page_empty_content_fails() {
        let opts = ExtractOptions { selector: "h1".to_string(), ..Default::default() };
        let result = extract_page("<html><body><p>only paragraphs</p></body></html>", &opts);
        assert!(matches!(result, Err(Error::EmptyContent)));
    }

    #[test]
    fn test_extract_page_custom_separator() {
        let opts = ExtractOptions { selector: "h1".to_string(), separator: "---".to_string(), ..Default::default() };
        let content = extract_page(SIMPLE_PAGE, &opts).unwrap();
        assert_eq!(content, "website title: Test Page---Heading");
    }
}
