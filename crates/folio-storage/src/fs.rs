//! Filesystem storage implementation.
//!
//! Provides [`FsStorage`] for reading content from the local filesystem.

use std::fs;
use std::path::Path;

use crate::storage::{DirEntry, FileStat, Storage, StorageError};

/// Backend identifier for error messages.
const BACKEND: &str = "Fs";

/// Filesystem storage implementation.
///
/// Stateless: every call goes to the filesystem, nothing is cached.
///
/// # Example
///
/// ```ignore
/// use std::path::Path;
/// use folio_storage::{FsStorage, Storage};
///
/// let storage = FsStorage::new();
/// let bytes = storage.read(Path::new("content/hello.txt"))?;
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct FsStorage;

impl FsStorage {
    /// Create a new filesystem storage.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

fn io_error(err: std::io::Error, path: &Path) -> StorageError {
    StorageError::io(err, Some(path.to_path_buf())).with_backend(BACKEND)
}

impl Storage for FsStorage {
    fn stat(&self, path: &Path) -> Result<FileStat, StorageError> {
        let meta = fs::metadata(path).map_err(|e| io_error(e, path))?;
        let created = match meta.created() {
            Ok(created) => created,
            Err(e) => {
                tracing::trace!(path = %path.display(), error = %e, "Birth time unavailable, using mtime");
                meta.modified().map_err(|e| io_error(e, path))?
            }
        };
        Ok(FileStat {
            is_dir: meta.is_dir(),
            created,
        })
    }

    fn read(&self, path: &Path) -> Result<Vec<u8>, StorageError> {
        fs::read(path).map_err(|e| io_error(e, path))
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<DirEntry>, StorageError> {
        let entries = fs::read_dir(path).map_err(|e| io_error(e, path))?;

        let mut entries: Vec<_> = entries
            .filter_map(Result::ok)
            .map(|e| DirEntry {
                is_dir: e.file_type().is_ok_and(|t| t.is_dir()),
                name: e.file_name().to_string_lossy().into_owned(),
                path: e.path(),
            })
            .collect();

        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }
}
