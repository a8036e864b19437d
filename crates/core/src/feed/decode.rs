//! Open-schema feed decoding.
//!
//! Decoding walks the raw XML event stream (start/end/text/CDATA) by hand
//! instead of using schema-driven deserialization, because the item schema
//! is not known ahead of time. The walk is permissive about structure the
//! way real feeds require:
//!
//! - Only `channel`, `title`, `link` and `item` are recognized; everything
//!   else is scanned through without being skipped as a subtree, so a later
//!   occurrence of a recognized element still wins (last-write-wins).
//! - End of input is a normal terminator at every nesting level.
//! - Mismatched close tags and invalid tokens fail the whole decode; no
//!   partial feed is ever returned.

use std::collections::HashMap;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::Error;
use crate::feed::{Feed, Item};

/// Decode an RSS/Atom-style XML document into a [`Feed`].
///
/// A document without a `channel` element decodes to an empty feed; that is
/// not an error.
///
/// # Errors
///
/// Returns [`Error::ParseFailed`] on malformed XML (mismatched close tags,
/// invalid token stream, undecodable entity references).
pub fn decode(xml: &str) -> Result<Feed, Error> {
    let mut reader = Reader::from_str(xml);
    let mut feed = Feed::default();

    loop {
        match next_event(&mut reader)? {
            Event::Start(e) if e.local_name().as_ref() == b"channel" => {
                read_channel(&mut reader, &mut feed)?;
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(feed)
}

/// Scan the channel subtree for `title`, link-bearing elements and `item`s.
fn read_channel(reader: &mut Reader<&[u8]>, feed: &mut Feed) -> Result<(), Error> {
    loop {
        match next_event(reader)? {
            Event::Start(e) => match local_name(&e).as_str() {
                "title" => feed.title = read_element_text(reader, "title")?,
                "link" => feed.link = resolve_link(reader, &e)?,
                "item" => feed.items.push(read_item(reader)?),
                _ => {}
            },
            Event::Empty(e) => match local_name(&e).as_str() {
                "title" => feed.title = String::new(),
                "link" => feed.link = attr_href(&e)?.unwrap_or_default(),
                "item" => feed.items.push(Item::default()),
                _ => {}
            },
            Event::End(e) if e.local_name().as_ref() == b"channel" => return Ok(()),
            Event::Eof => return Ok(()),
            _ => {}
        }
    }
}

/// Resolve the channel link from a non-self-closing link element.
///
/// An `href` attribute with a non-empty value wins (Atom convention);
/// otherwise the element's text content is used (RSS convention). The
/// element subtree is consumed either way to keep the stream aligned.
fn resolve_link(reader: &mut Reader<&[u8]>, start: &BytesStart) -> Result<String, Error> {
    let href = attr_href(start)?;
    let name = local_name(start);
    let text = read_element_text(reader, &name)?;
    Ok(href.unwrap_or(text))
}

/// First non-empty `href` attribute value, matched by local name so that
/// namespaced attributes qualify too.
fn attr_href(start: &BytesStart) -> Result<Option<String>, Error> {
    for attr in start.attributes() {
        let attr = attr.map_err(|e| Error::ParseFailed(e.to_string()))?;
        if attr.key.local_name().as_ref() == b"href" {
            let value = attr
                .unescape_value()
                .map_err(|e| Error::ParseFailed(e.to_string()))?;
            if !value.is_empty() {
                return Ok(Some(value.into_owned()));
            }
        }
    }
    Ok(None)
}

/// Decode one `<item>`: every direct child element becomes a field keyed by
/// its local name, whatever that name is. Duplicate names overwrite.
fn read_item(reader: &mut Reader<&[u8]>) -> Result<Item, Error> {
    let mut fields = HashMap::new();

    loop {
        match next_event(reader)? {
            Event::Start(e) => {
                let key = local_name(&e);
                let value = read_element_text(reader, &key)?;
                fields.insert(key, value);
            }
            Event::Empty(e) => {
                fields.insert(local_name(&e), String::new());
            }
            Event::End(e) if e.local_name().as_ref() == b"item" => break,
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(Item { fields })
}

/// Accumulate the decoded text and CDATA content of an element's subtree
/// until its matching close tag (or end of input).
fn read_element_text(reader: &mut Reader<&[u8]>, name: &str) -> Result<String, Error> {
    let mut value = String::new();
    let mut depth = 0usize;

    loop {
        match next_event(reader)? {
            Event::Start(_) => depth += 1,
            Event::End(e) => {
                if depth == 0 {
                    if e.local_name().as_ref() == name.as_bytes() {
                        break;
                    }
                } else {
                    depth -= 1;
                }
            }
            Event::Text(t) => {
                value.push_str(&t.unescape().map_err(|e| Error::ParseFailed(e.to_string()))?);
            }
            Event::CData(c) => value.push_str(&String::from_utf8_lossy(&c)),
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(value)
}

fn next_event<'a>(reader: &mut Reader<&'a [u8]>) -> Result<Event<'a>, Error> {
    reader.read_event().map_err(|e| Error::ParseFailed(e.to_string()))
}

fn local_name(e: &BytesStart) -> String {
    String::from_utf8_lossy(e.local_name().as_ref()).into_owned()
}
