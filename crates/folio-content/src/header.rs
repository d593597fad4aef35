//! Header/body splitting for a single source file.
//!
//! The first line of a file is its title. Following lines up to the first
//! blank line form the header block, where `meta-<name>: <value>` lines set
//! metadata. Everything after the blank line is body text.
//!
//! Lines in the header block that are not `meta-` headers are already part
//! of the body; only a blank line ends the header block.

use std::path::Path;
use std::sync::LazyLock;
use std::time::SystemTime;

use folio_storage::Storage;
use regex::Regex;

use crate::document::{Document, Tag};
use crate::error::ContentError;

/// Pattern for `meta-<name>: <value>` header lines.
static HEADER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^meta-([a-zA-Z]+):\s*(.*)$").expect("invalid header regex"));

/// Compile the header pattern now rather than on the first parsed file.
pub(crate) fn init() {
    LazyLock::force(&HEADER_PATTERN);
}

/// A recognized `meta-` header line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Header<'a> {
    /// `meta-tags: a, b, c`
    Tags(Vec<&'a str>),
    /// `meta-author: Jane`
    Author(&'a str),
    /// Any other `meta-<name>:` header. Parsed but ignored.
    Other {
        /// Header name.
        name: &'a str,
        /// Raw value.
        value: &'a str,
    },
}

impl<'a> Header<'a> {
    /// Parse a trimmed line as a header.
    ///
    /// Returns `None` for lines that are not `meta-` headers, including
    /// header-like lines whose name contains anything but ASCII letters.
    pub fn parse(line: &'a str) -> Option<Self> {
        let caps = HEADER_PATTERN.captures(line)?;
        let name = caps.get(1)?.as_str();
        let value = caps.get(2).map_or("", |m| m.as_str());

        Some(match name {
            "tags" => Self::Tags(value.split(',').map(str::trim).collect()),
            "author" => Self::Author(value),
            _ => Self::Other { name, value },
        })
    }

    fn apply(self, document: &mut Document) {
        match self {
            Self::Tags(names) => {
                document.tags = names.into_iter().map(Tag::new).collect();
            }
            Self::Author(author) => document.author = Some(author.to_owned()),
            Self::Other { .. } => {}
        }
    }
}

/// Parse the raw text of one file into a [`Document`].
///
/// # Arguments
///
/// * `source_path` - Path recorded on the document
/// * `text` - Full file content
/// * `created` - File creation time
///
/// # Errors
///
/// Returns [`ContentError::InvalidDocument`] if `text` has no lines at all.
pub fn parse_document(
    source_path: &Path,
    text: &str,
    created: SystemTime,
) -> Result<Document, ContentError> {
    let mut lines = text
        .split_terminator('\n')
        .map(|line| line.trim_end_matches('\r'));

    let Some(title) = lines.next() else {
        return Err(ContentError::InvalidDocument(source_path.to_path_buf()));
    };
    let mut document = Document::new(source_path, title.trim(), created);

    let mut in_body = false;
    for line in lines {
        if !in_body {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                in_body = true;
                continue;
            }
            if let Some(header) = Header::parse(trimmed) {
                header.apply(&mut document);
                continue;
            }
        }
        document.body.push_str(line);
        document.body.push('\n');
    }

    Ok(document)
}

/// Stat, read and parse one file through `storage`.
///
/// Non-UTF-8 bytes are replaced rather than rejected.
pub(crate) fn read_document(storage: &dyn Storage, path: &Path) -> Result<Document, ContentError> {
    let stat = storage.stat(path)?;
    let bytes = storage.read(path)?;
    let text = String::from_utf8_lossy(&bytes);
    parse_document(path, &text, stat.created)
}
