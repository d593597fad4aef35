//! Document discovery by tree walking.
//!
//! The scanner visits every entry below a root directory in name order,
//! parses each `.txt` file, and records one [`ScanOutcome`] per candidate
//! file. Other files are skipped without being read and subdirectories are
//! always descended into.

use std::path::{Path, PathBuf};

use folio_storage::{DirEntry, Storage};

use crate::document::Document;
use crate::error::ContentError;
use crate::header::read_document;
use crate::identifier::is_source_file;

/// Result of parsing one candidate file.
#[derive(Debug)]
pub enum ScanOutcome {
    /// File parsed into a document.
    Kept(Document),
    /// File could not be parsed and is excluded from the collection.
    Dropped {
        /// Path of the excluded file.
        path: PathBuf,
        /// Why parsing failed.
        reason: ContentError,
    },
}

impl ScanOutcome {
    /// Return the document if the file was kept.
    #[must_use]
    pub fn kept(self) -> Option<Document> {
        match self {
            Self::Kept(doc) => Some(doc),
            Self::Dropped { .. } => None,
        }
    }
}

/// Walks a directory subtree through a [`Storage`] backend.
pub struct Scanner<'a> {
    storage: &'a dyn Storage,
}

impl<'a> Scanner<'a> {
    /// Create a scanner over `storage`.
    pub fn new(storage: &'a dyn Storage) -> Self {
        Self { storage }
    }

    /// Scan `root` and return one outcome per candidate file, in traversal order.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError`] if `root` itself cannot be listed. Failures
    /// below the root are recorded as [`ScanOutcome::Dropped`] (files) or
    /// skipped (subdirectories).
    pub fn scan(&self, root: &Path) -> Result<Vec<ScanOutcome>, ContentError> {
        let entries = self.storage.read_dir(root)?;
        let mut outcomes = Vec::new();
        self.scan_entries(entries, &mut outcomes);
        Ok(outcomes)
    }

    /// Scan `root` and return only the documents that parsed.
    ///
    /// # Errors
    ///
    /// Same as [`Scanner::scan`].
    pub fn scan_documents(&self, root: &Path) -> Result<Vec<Document>, ContentError> {
        Ok(self
            .scan(root)?
            .into_iter()
            .filter_map(ScanOutcome::kept)
            .collect())
    }

    fn scan_entries(&self, entries: Vec<DirEntry>, outcomes: &mut Vec<ScanOutcome>) {
        for entry in entries {
            if entry.is_dir {
                match self.storage.read_dir(&entry.path) {
                    Ok(children) => self.scan_entries(children, outcomes),
                    Err(e) => {
                        tracing::debug!(path = %entry.path.display(), error = %e, "Skipping unreadable directory");
                    }
                }
            } else if is_source_file(&entry.path) {
                outcomes.push(self.parse_entry(entry.path));
            }
        }
    }

    fn parse_entry(&self, path: PathBuf) -> ScanOutcome {
        match read_document(self.storage, &path) {
            Ok(doc) => ScanOutcome::Kept(doc),
            Err(reason) => {
                tracing::debug!(path = %path.display(), error = %reason, "Dropping document");
                ScanOutcome::Dropped { path, reason }
            }
        }
    }
}
