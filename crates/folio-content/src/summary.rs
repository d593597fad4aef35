//! Plain-text summaries of HTML-bearing bodies.
//!
//! Listing pages show a short excerpt of each document. The body is parsed as
//! an HTML fragment, the text of every text node is concatenated in document
//! order, and the result is cut to [`SUMMARY_LIMIT`] characters.
//!
//! As in HTML, a `<` that cannot open markup (`1 < 2`, `<3`) is text.
//!
//! Only fragment-level content is accepted. Comments, doctypes, XML
//! declarations, processing instructions and unparseable markup make the
//! whole summary fail; callers keep the original body in that case.

use std::borrow::Cow;

use quick_xml::events::Event;
use quick_xml::reader::Reader;

use crate::entities::decode_entity;
use crate::error::SummaryError;

/// Maximum summary length in characters, excluding the ellipsis.
pub const SUMMARY_LIMIT: usize = 500;

/// Marker appended to truncated summaries.
const ELLIPSIS: &str = "...";

const CDATA_OPEN: &str = "<![CDATA[";
const CDATA_CLOSE: &str = "]]>";

/// True if a `<` followed by `next` starts a tag, comment, doctype or
/// processing instruction.
fn opens_markup(next: Option<char>) -> bool {
    next.is_some_and(|c| c.is_ascii_alphabetic() || matches!(c, '/' | '!' | '?'))
}

/// Rewrite every `<` that cannot open markup as `&lt;`.
///
/// CDATA sections are copied unchanged.
fn escape_stray_lt(html: &str) -> Cow<'_, str> {
    let mut out = String::new();
    let mut rest = html;
    let mut changed = false;

    while let Some(pos) = rest.find('<') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];
        if tail.starts_with(CDATA_OPEN) {
            let end = tail
                .find(CDATA_CLOSE)
                .map_or(tail.len(), |i| i + CDATA_CLOSE.len());
            out.push_str(&tail[..end]);
            rest = &tail[end..];
            continue;
        }
        if opens_markup(tail[1..].chars().next()) {
            out.push('<');
        } else {
            out.push_str("&lt;");
            changed = true;
        }
        rest = &tail[1..];
    }

    if !changed {
        return Cow::Borrowed(html);
    }
    out.push_str(rest);
    Cow::Owned(out)
}

/// Concatenate the text content of an HTML fragment.
///
/// Text is joined as-is: no whitespace normalization, no separators between
/// elements. Character references are decoded.
///
/// # Errors
///
/// Returns [`SummaryError`] if the fragment contains a comment, a
/// document-level construct, or markup that cannot be tokenized.
pub fn to_text(html: &str) -> Result<String, SummaryError> {
    let html = escape_stray_lt(html);
    let mut reader = Reader::from_str(&html);
    let config = reader.config_mut();
    config.trim_text(false);
    // HTML leaves void and optional end tags unclosed
    config.check_end_names = false;
    config.allow_unmatched_ends = true;
    config.allow_dangling_amp = true;

    let mut text = String::with_capacity(html.len());
    loop {
        match reader.read_event()? {
            Event::Start(_) | Event::End(_) | Event::Empty(_) => {}
            Event::Text(e) => text.push_str(&reader.decoder().decode(&e)?),
            Event::GeneralRef(e) => {
                let entity = reader.decoder().decode(&e)?;
                text.push_str(&decode_entity(&entity));
            }
            Event::CData(e) => text.push_str(&reader.decoder().decode(&e)?),
            Event::Comment(_) => return Err(SummaryError::Comment),
            Event::DocType(_) => return Err(SummaryError::DocumentNode("doctype")),
            Event::Decl(_) => return Err(SummaryError::DocumentNode("XML declaration")),
            Event::PI(_) => {
                return Err(SummaryError::DocumentNode("processing instruction"));
            }
            Event::Eof => break,
        }
    }
    Ok(text)
}

/// Cut `text` to [`SUMMARY_LIMIT`] characters, appending `...` if anything
/// was removed.
pub fn truncate_summary(mut text: String) -> String {
    if let Some((cut, _)) = text.char_indices().nth(SUMMARY_LIMIT) {
        text.truncate(cut);
        text.push_str(ELLIPSIS);
    }
    text
}

/// Build the summary of an HTML body.
///
/// # Errors
///
/// Returns [`SummaryError`] under the same conditions as [`to_text`].
pub fn summarize(body: &str) -> Result<String, SummaryError> {
    to_text(body).map(truncate_summary)
}
