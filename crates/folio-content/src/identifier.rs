//! Identifier derivation.
//!
//! A document's identifier is its path relative to the collection root, with
//! the `.txt` extension swapped for `.html` and `/` as separator:
//!
//! - `<root>/hello.txt` -> `"hello.html"`
//! - `<root>/2024/notes/day.txt` -> `"2024/notes/day.html"`
//!
//! [`source_path_for`] reverses the mapping, so a request for an `.html`
//! identifier can be served from the matching `.txt` file.

use std::path::{Component, Path, PathBuf};

/// Source file suffix.
const SOURCE_SUFFIX: &str = ".txt";

/// Identifier suffix.
const IDENTIFIER_SUFFIX: &str = ".html";

/// Lexically clean a path: drop `.` components and resolve `..` against
/// preceding normal components.
pub fn clean_path(path: &Path) -> PathBuf {
    let mut cleaned = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match cleaned.components().next_back() {
                Some(Component::Normal(_)) => {
                    cleaned.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => cleaned.push(".."),
            },
            other => cleaned.push(other.as_os_str()),
        }
    }
    if cleaned.as_os_str().is_empty() {
        cleaned.push(".");
    }
    cleaned
}

/// True if the file name of `path` ends in `.txt`, compared
/// case-insensitively.
///
/// A file named just `.txt` counts.
pub fn is_source_file(path: &Path) -> bool {
    path.file_name().is_some_and(|name| {
        let name = name.as_encoded_bytes();
        name.len() >= SOURCE_SUFFIX.len()
            && name[name.len() - SOURCE_SUFFIX.len()..]
                .eq_ignore_ascii_case(SOURCE_SUFFIX.as_bytes())
    })
}

/// Derive the identifier of `source_path` within the collection at `root`.
///
/// Returns `None` if `source_path` is not a source file below `root`.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use folio_content::derive_identifier;
///
/// let id = derive_identifier(Path::new("/content"), Path::new("/content/a/b.txt"));
/// assert_eq!(id.as_deref(), Some("a/b.html"));
/// ```
pub fn derive_identifier(root: &Path, source_path: &Path) -> Option<String> {
    if !is_source_file(source_path) {
        return None;
    }
    let relative = source_path.strip_prefix(root).ok()?;

    let mut segments: Vec<_> = relative
        .components()
        .map(|c| match c {
            Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect::<Option<_>>()?;

    let file_name = segments.last_mut()?;
    file_name.truncate(file_name.len() - SOURCE_SUFFIX.len());
    file_name.push_str(IDENTIFIER_SUFFIX);
    Some(segments.join("/"))
}

/// Map an identifier back to the source path it was derived from.
///
/// Returns `None` if `identifier` does not end in `.html` or tries to leave
/// `root` (absolute paths or `..` segments). The file stem may be empty:
/// `.html` maps to `<root>/.txt`.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use folio_content::source_path_for;
///
/// let path = source_path_for(Path::new("/content"), "a/b.html");
/// assert_eq!(path.as_deref(), Some(Path::new("/content/a/b.txt")));
/// ```
pub fn source_path_for(root: &Path, identifier: &str) -> Option<PathBuf> {
    let stem = identifier.strip_suffix(IDENTIFIER_SUFFIX)?;
    let segments: Vec<_> = stem.split('/').collect();
    let (file_stem, dirs) = segments.split_last()?;
    if dirs
        .iter()
        .any(|s| s.is_empty() || *s == "." || *s == "..")
    {
        return None;
    }

    let mut path = root.to_path_buf();
    path.extend(dirs);
    path.push(format!("{file_stem}{SOURCE_SUFFIX}"));
    Some(path)
}
