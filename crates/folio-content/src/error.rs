//! Error types for the content pipeline.

use std::path::PathBuf;

use folio_storage::StorageError;

/// Error from parsing a single document or scanning a tree.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ContentError {
    /// Source file or directory does not exist.
    #[error("not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Read or stat failure other than absence.
    #[error("I/O failure: {0}")]
    Io(#[source] StorageError),

    /// File exists but has no first line to use as a title.
    #[error("invalid document: {}", .0.display())]
    InvalidDocument(PathBuf),
}

impl ContentError {
    /// True if this error reports a missing file or directory.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

impl From<StorageError> for ContentError {
    fn from(err: StorageError) -> Self {
        if err.is_not_found() {
            Self::NotFound(err.path.unwrap_or_default())
        } else {
            Self::Io(err)
        }
    }
}

/// Error while flattening an HTML body into a summary.
///
/// Never surfaced by [`ContentLoader::parse_tree`](crate::ContentLoader::parse_tree):
/// the assembler keeps the unsummarized body instead.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum SummaryError {
    /// Markup could not be tokenized.
    #[error("HTML parse error")]
    Parse(#[from] quick_xml::Error),

    /// Text could not be decoded.
    #[error("encoding error")]
    Encoding(#[from] quick_xml::encoding::EncodingError),

    /// Fragment contains a comment node.
    #[error("unexpected comment node")]
    Comment,

    /// Fragment contains a full-document construct (doctype, declaration,
    /// processing instruction).
    #[error("unexpected document node: {0}")]
    DocumentNode(&'static str),
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use folio_storage::StorageErrorKind;

    use super::*;

    #[test]
    fn test_not_found_storage_error_maps_to_not_found() {
        let err: ContentError = StorageError::not_found("/content/missing.txt").into();

        assert!(err.is_not_found());
        assert!(
            matches!(&err, ContentError::NotFound(p) if p == Path::new("/content/missing.txt"))
        );
    }

    #[test]
    fn test_other_storage_error_maps_to_io() {
        let err: ContentError = StorageError::new(StorageErrorKind::PermissionDenied)
            .with_path("/content/secret.txt")
            .into();

        assert!(matches!(err, ContentError::Io(_)));
        assert_eq!(
            err.to_string(),
            "I/O failure: Permission denied (path: /content/secret.txt)"
        );
    }

    #[test]
    fn test_invalid_document_display() {
        let err = ContentError::InvalidDocument(PathBuf::from("/content/empty.txt"));

        assert_eq!(err.to_string(), "invalid document: /content/empty.txt");
    }
}
