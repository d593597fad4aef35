//! Entry point tying the pipeline to a storage backend.

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use folio_storage::{FsStorage, Storage};

use crate::collection::{self, Collection};
use crate::document::Document;
use crate::error::ContentError;
use crate::header::{self, read_document};
use crate::identifier::{clean_path, source_path_for};

/// Convert Duration to milliseconds as f64.
fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}

/// Parses documents and collections from a [`Storage`] backend.
///
/// Holds no state besides the storage handle, so every call re-reads the
/// tree. Safe to share between threads.
///
/// # Example
///
/// ```ignore
/// use std::path::Path;
/// use folio_content::ContentLoader;
///
/// let loader = ContentLoader::new();
/// let doc = loader.parse_one(Path::new("content/hello.txt"))?;
/// let listing = loader.parse_tree(Path::new("content"), true)?;
/// ```
pub struct ContentLoader {
    storage: Arc<dyn Storage>,
}

impl ContentLoader {
    /// Create a loader reading from the local filesystem.
    #[must_use]
    pub fn new() -> Self {
        Self::with_storage(Arc::new(FsStorage::new()))
    }

    /// Create a loader with a custom storage backend.
    #[must_use]
    pub fn with_storage(storage: Arc<dyn Storage>) -> Self {
        header::init();
        Self { storage }
    }

    /// Parse a single document.
    ///
    /// The returned document has no identifier; identifiers only exist
    /// relative to a collection root.
    ///
    /// # Errors
    ///
    /// - [`ContentError::NotFound`] if the file does not exist
    /// - [`ContentError::Io`] if it cannot be inspected or read
    /// - [`ContentError::InvalidDocument`] if it is empty
    pub fn parse_one(&self, path: &Path) -> Result<Document, ContentError> {
        read_document(self.storage.as_ref(), &clean_path(path))
    }

    /// Parse the document an identifier refers to within `root`.
    ///
    /// Unlike [`ContentLoader::parse_one`], the returned document carries
    /// `identifier`.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::NotFound`] for identifiers that do not map to
    /// a source path under `root`, otherwise as [`ContentLoader::parse_one`].
    pub fn parse_identifier(&self, root: &Path, identifier: &str) -> Result<Document, ContentError> {
        let root = clean_path(root);
        let path = source_path_for(&root, identifier)
            .ok_or_else(|| ContentError::NotFound(root.join(identifier)))?;
        let mut doc = read_document(self.storage.as_ref(), &path)?;
        doc.identifier = Some(identifier.to_owned());
        Ok(doc)
    }

    /// Parse every document below `root`.
    ///
    /// Returns `Ok(None)` when the tree holds no parseable documents.
    ///
    /// # Arguments
    ///
    /// * `root` - Directory to scan
    /// * `summarize` - Replace bodies with plain-text summaries
    ///
    /// # Errors
    ///
    /// Returns [`ContentError`] if `root` does not exist or cannot be listed.
    /// Failures of individual files never fail the whole tree.
    pub fn parse_tree(
        &self,
        root: &Path,
        summarize: bool,
    ) -> Result<Option<Collection>, ContentError> {
        let start = Instant::now();
        let root = clean_path(root);

        let collection = collection::assemble(self.storage.as_ref(), &root, summarize)?;

        tracing::info!(
            root = %root.display(),
            documents = collection.as_ref().map_or(0, Collection::len),
            summarize,
            elapsed_ms = elapsed_ms(start),
            "Parsed content tree"
        );

        Ok(collection)
    }
}

impl Default for ContentLoader {
    fn default() -> Self {
        Self::new()
    }
}
