//! Mock storage implementation for testing.
//!
//! Provides [`MockStorage`] for unit testing without filesystem access.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::storage::{DirEntry, FileStat, Storage, StorageError, StorageErrorKind};

/// Backend identifier for error messages.
const BACKEND: &str = "Mock";

#[derive(Debug, Clone)]
struct MockFile {
    content: Vec<u8>,
    created: SystemTime,
    readable: bool,
}

/// In-memory content tree for testing.
///
/// Directories are implied by the files added to them; use
/// [`MockStorage::with_dir`] for empty directories.
///
/// # Example
///
/// ```ignore
/// use std::path::Path;
/// use folio_storage::{MockStorage, Storage};
///
/// let storage = MockStorage::new()
///     .with_file("content/hello.txt", "Hello\n\nWorld\n")
///     .with_dir("content/empty");
///
/// let entries = storage.read_dir(Path::new("content")).unwrap();
/// ```
#[derive(Debug, Default)]
pub struct MockStorage {
    files: BTreeMap<PathBuf, MockFile>,
    dirs: BTreeSet<PathBuf>,
    locked_dirs: BTreeSet<PathBuf>,
}

impl MockStorage {
    /// Create a new empty mock storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file with the given content, created at the Unix epoch.
    #[must_use]
    pub fn with_file(mut self, path: impl Into<PathBuf>, content: impl Into<Vec<u8>>) -> Self {
        let path: PathBuf = path.into();
        self.add_ancestors(&path);
        self.files.insert(
            path,
            MockFile {
                content: content.into(),
                created: UNIX_EPOCH,
                readable: true,
            },
        );
        self
    }

    /// Set the creation time of a previously added file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the file
    /// * `secs` - Creation time as seconds since Unix epoch
    #[must_use]
    pub fn with_created(mut self, path: impl AsRef<Path>, secs: u64) -> Self {
        if let Some(file) = self.files.get_mut(path.as_ref()) {
            file.created = UNIX_EPOCH + Duration::from_secs(secs);
        }
        self
    }

    /// Add a file that exists but fails to read with permission denied.
    #[must_use]
    pub fn with_unreadable(mut self, path: impl Into<PathBuf>) -> Self {
        let path: PathBuf = path.into();
        self.add_ancestors(&path);
        self.files.insert(
            path,
            MockFile {
                content: Vec::new(),
                created: UNIX_EPOCH,
                readable: false,
            },
        );
        self
    }

    /// Add a directory (and its ancestors).
    #[must_use]
    pub fn with_dir(mut self, path: impl Into<PathBuf>) -> Self {
        let path: PathBuf = path.into();
        self.add_ancestors(&path);
        self.dirs.insert(path);
        self
    }

    /// Add a directory that exists but fails to list with permission denied.
    #[must_use]
    pub fn with_unreadable_dir(self, path: impl Into<PathBuf>) -> Self {
        let path: PathBuf = path.into();
        let mut storage = self.with_dir(path.clone());
        storage.locked_dirs.insert(path);
        storage
    }

    fn add_ancestors(&mut self, path: &Path) {
        for ancestor in path.ancestors().skip(1) {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            self.dirs.insert(ancestor.to_path_buf());
        }
    }

    fn error(kind: StorageErrorKind, path: &Path) -> StorageError {
        StorageError::new(kind)
            .with_path(path)
            .with_backend(BACKEND)
    }
}

impl Storage for MockStorage {
    fn stat(&self, path: &Path) -> Result<FileStat, StorageError> {
        if let Some(file) = self.files.get(path) {
            return Ok(FileStat {
                is_dir: false,
                created: file.created,
            });
        }
        if self.dirs.contains(path) {
            return Ok(FileStat {
                is_dir: true,
                created: UNIX_EPOCH,
            });
        }
        Err(Self::error(StorageErrorKind::NotFound, path))
    }

    fn read(&self, path: &Path) -> Result<Vec<u8>, StorageError> {
        match self.files.get(path) {
            Some(file) if file.readable => Ok(file.content.clone()),
            Some(_) => Err(Self::error(StorageErrorKind::PermissionDenied, path)),
            None if self.dirs.contains(path) => Err(Self::error(StorageErrorKind::Other, path)),
            None => Err(Self::error(StorageErrorKind::NotFound, path)),
        }
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<DirEntry>, StorageError> {
        if self.files.contains_key(path) {
            return Err(Self::error(StorageErrorKind::NotADirectory, path));
        }
        if !self.dirs.contains(path) {
            return Err(Self::error(StorageErrorKind::NotFound, path));
        }
        if self.locked_dirs.contains(path) {
            return Err(Self::error(StorageErrorKind::PermissionDenied, path));
        }

        let is_child = |p: &&PathBuf| p.parent() == Some(path);
        let name_of = |p: &Path| {
            p.file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default()
        };

        let mut entries: Vec<DirEntry> = self
            .dirs
            .iter()
            .filter(is_child)
            .map(|p| DirEntry {
                path: p.clone(),
                name: name_of(p),
                is_dir: true,
            })
            .chain(self.files.keys().filter(is_child).map(|p| DirEntry {
                path: p.clone(),
                name: name_of(p),
                is_dir: false,
            }))
            .collect();

        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }
}
