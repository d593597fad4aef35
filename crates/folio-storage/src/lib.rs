//! Read-only filesystem abstraction for the Folio content engine.
//!
//! The content pipeline never touches `std::fs` directly. It goes through the
//! [`Storage`] trait, which exposes exactly the three capabilities the pipeline
//! needs:
//!
//! - [`Storage::stat`] - existence, directory flag and creation time
//! - [`Storage::read`] - open, read fully and close a file
//! - [`Storage::read_dir`] - enumerate a directory in name order
//!
//! # Architecture
//!
//! The crate provides:
//! - [`Storage`] trait
//! - [`FsStorage`] implementation backed by the local filesystem
//! - [`MockStorage`] in-memory tree for testing (behind `mock` feature flag)
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use folio_storage::{FsStorage, Storage};
//!
//! let storage = FsStorage::new();
//! for entry in storage.read_dir(Path::new("content"))? {
//!     println!("{} (dir: {})", entry.path.display(), entry.is_dir);
//! }
//! ```

mod fs;
#[cfg(feature = "mock")]
mod mock;
mod storage;

pub use fs::FsStorage;
#[cfg(feature = "mock")]
pub use mock::MockStorage;
pub use storage::{DirEntry, FileStat, Storage, StorageError, StorageErrorKind};
