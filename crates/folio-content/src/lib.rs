//! Document ingestion pipeline for the Folio content engine.
//!
//! Turns a directory tree of plain-text documents into structured records for
//! templated rendering. Each source file looks like:
//!
//! ```text
//! Title line
//! meta-author: Jane
//! meta-tags: rust, notes
//!
//! Body text, kept verbatim.
//! ```
//!
//! # Architecture
//!
//! - [`header`] splits one file into title, metadata and body
//! - [`scanner`] walks a subtree and parses every `.txt` file it finds
//! - [`identifier`] maps source paths to `.html` identifiers and back
//! - [`summary`] flattens HTML bodies to bounded plain text
//! - [`collection`] assembles the above into a [`Collection`]
//!
//! [`ContentLoader`] ties them to a [`Storage`](folio_storage::Storage) backend
//! and exposes the two public operations, [`ContentLoader::parse_one`] and
//! [`ContentLoader::parse_tree`].
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use folio_content::ContentLoader;
//!
//! let loader = ContentLoader::new();
//! if let Some(collection) = loader.parse_tree(Path::new("content"), true)? {
//!     for doc in &collection {
//!         println!("{}: {}", doc.identifier.as_deref().unwrap_or("?"), doc.title);
//!     }
//! }
//! ```

pub mod collection;
mod document;
mod entities;
mod error;
pub mod header;
pub mod identifier;
mod loader;
pub mod scanner;
pub mod summary;

pub use collection::Collection;
pub use document::{Document, Tag};
pub use error::{ContentError, SummaryError};
pub use header::parse_document;
pub use identifier::{derive_identifier, source_path_for};
pub use loader::ContentLoader;
pub use scanner::ScanOutcome;
pub use summary::{SUMMARY_LIMIT, summarize, to_text};
