//! Network and DOM collaborators for feedtext.
//!
//! This crate provides the HTTP fetch pipeline and CSS-selector content
//! extraction consumed by the server.

pub mod extract;
pub mod fetch;

pub use extract::{ExtractOptions, extract_page, page_title, select_markup, select_text};
pub use fetch::{FetchClient, FetchConfig, FetchResponse};
