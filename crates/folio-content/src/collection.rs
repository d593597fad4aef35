//! Collection assembly.
//!
//! A [`Collection`] is every document found below one directory, in scan
//! order, each with its identifier assigned. Assembly never yields an empty
//! collection: a tree with no documents is reported as `None` so callers can
//! tell "nothing here" apart from a listing to render.

use std::path::{Path, PathBuf};

use folio_storage::Storage;
use serde::Serialize;

use crate::document::Document;
use crate::error::ContentError;
use crate::identifier::derive_identifier;
use crate::scanner::Scanner;
use crate::summary::summarize;

/// Documents found under one root directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Collection {
    /// Directory the identifiers are relative to.
    #[serde(skip)]
    root: PathBuf,
    documents: Vec<Document>,
}

impl Collection {
    /// Root directory of the collection.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Documents in scan order.
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Number of documents.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Always false for an assembled collection.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Iterate over documents.
    pub fn iter(&self) -> std::slice::Iter<'_, Document> {
        self.documents.iter()
    }

    /// Find a document by identifier.
    pub fn get(&self, identifier: &str) -> Option<&Document> {
        self.documents
            .iter()
            .find(|d| d.identifier.as_deref() == Some(identifier))
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a Document;
    type IntoIter = std::slice::Iter<'a, Document>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Replace a document's body with its summary.
///
/// A body that fails to summarize is left as it was.
fn apply_summary(doc: &mut Document) {
    match summarize(&doc.body) {
        Ok(summary) => doc.body = summary,
        Err(e) => {
            tracing::debug!(path = %doc.source_path.display(), error = %e, "Keeping full body, summary failed");
        }
    }
}

/// Scan `root`, optionally summarize, and assign identifiers.
///
/// # Errors
///
/// Returns [`ContentError`] if `root` cannot be listed.
pub fn assemble(
    storage: &dyn Storage,
    root: &Path,
    summarize: bool,
) -> Result<Option<Collection>, ContentError> {
    let outcomes = Scanner::new(storage).scan(root)?;

    let mut dropped = 0usize;
    let mut documents = Vec::with_capacity(outcomes.len());
    for outcome in outcomes {
        let Some(mut doc) = outcome.kept() else {
            dropped += 1;
            continue;
        };
        if summarize {
            apply_summary(&mut doc);
        }
        doc.identifier = derive_identifier(root, &doc.source_path);
        documents.push(doc);
    }

    tracing::debug!(
        root = %root.display(),
        documents = documents.len(),
        dropped,
        "Collection assembled"
    );

    if documents.is_empty() {
        return Ok(None);
    }
    Ok(Some(Collection {
        root: root.to_path_buf(),
        documents,
    }))
}
