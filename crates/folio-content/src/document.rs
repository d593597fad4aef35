//! Parsed document record.

use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use serde::{Serialize, Serializer};

/// A single tag declared in a `meta-tags:` header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tag {
    /// Tag name, trimmed.
    pub name: String,
}

impl Tag {
    /// Create a tag from a name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// One parsed text file.
///
/// Serializes to the shape consumed by page templates; `created_at` is
/// emitted as whole seconds since the Unix epoch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    /// Path relative to the collection root with `.txt` replaced by `.html`.
    ///
    /// `None` until the document has been placed in a [`Collection`](crate::Collection).
    pub identifier: Option<String>,
    /// Cleaned path of the source file.
    pub source_path: PathBuf,
    /// First line of the file, trimmed.
    pub title: String,
    /// Body text, newline-terminated lines. Replaced by a summary in listings.
    pub body: String,
    /// File creation time at parse time, truncated to seconds.
    #[serde(serialize_with = "serialize_unix_secs")]
    pub created_at: SystemTime,
    /// Value of the `meta-author:` header, if any.
    pub author: Option<String>,
    /// Tags in declaration order.
    pub tags: Vec<Tag>,
}

impl Document {
    /// Create an empty document with a title.
    pub(crate) fn new(source_path: &Path, title: &str, created_at: SystemTime) -> Self {
        Self {
            identifier: None,
            source_path: source_path.to_path_buf(),
            title: title.to_owned(),
            body: String::new(),
            created_at: truncate_to_secs(created_at),
            author: None,
            tags: Vec::new(),
        }
    }

    /// Tag names in declaration order.
    pub fn tag_names(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(|t| t.name.as_str())
    }

    /// Creation time as seconds since the Unix epoch.
    #[must_use]
    pub fn created_secs(&self) -> u64 {
        unix_secs(self.created_at)
    }
}

fn unix_secs(time: SystemTime) -> u64 {
    time.duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_secs())
}

fn truncate_to_secs(time: SystemTime) -> SystemTime {
    UNIX_EPOCH + Duration::from_secs(unix_secs(time))
}

#[allow(clippy::trivially_copy_pass_by_ref)] // serde's serialize_with passes a reference
fn serialize_unix_secs<S: Serializer>(time: &SystemTime, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u64(unix_secs(*time))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_new_document_defaults() {
        let doc = Document::new(Path::new("/content/a.txt"), "Hello", UNIX_EPOCH);

        assert_eq!(doc.title, "Hello");
        assert!(doc.identifier.is_none());
        assert!(doc.author.is_none());
        assert!(doc.tags.is_empty());
        assert!(doc.body.is_empty());
    }

    #[test]
    fn test_created_at_truncated_to_seconds() {
        let created = UNIX_EPOCH + Duration::from_millis(1_700_000_000_750);
        let doc = Document::new(Path::new("/content/a.txt"), "Hello", created);

        assert_eq!(doc.created_secs(), 1_700_000_000);
        assert_eq!(doc.created_at, UNIX_EPOCH + Duration::from_secs(1_700_000_000));
    }

    #[test]
    fn test_serialize_shape() {
        let mut doc = Document::new(
            Path::new("/content/a.txt"),
            "Hello",
            UNIX_EPOCH + Duration::from_secs(42),
        );
        doc.identifier = Some("a.html".to_owned());
        doc.tags = vec![Tag::new("rust")];

        let json = serde_json::to_value(&doc).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "identifier": "a.html",
                "source_path": "/content/a.txt",
                "title": "Hello",
                "body": "",
                "created_at": 42,
                "author": null,
                "tags": [{"name": "rust"}],
            })
        );
    }
}
