//! `folio list` command implementation.

use std::path::{Path, PathBuf};

use clap::Args;
use folio_content::ContentLoader;

use super::{GlobalArgs, print_json};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the list command.
#[derive(Args)]
pub(crate) struct ListArgs {
    /// Directory to list (default: content root; relative paths resolve under it).
    dir: Option<PathBuf>,
}

impl ListArgs {
    /// Execute the list command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails, the directory cannot be
    /// listed, or it holds no documents.
    pub(crate) fn execute(self, global: &GlobalArgs, output: &Output) -> Result<(), CliError> {
        let config = global.load_config()?;
        let dir = listing_dir(&config.content.root, self.dir.as_deref());

        let Some(collection) = ContentLoader::new().parse_tree(&dir, config.content.summary)?
        else {
            output.warning(&format!("No documents found in {}", dir.display()));
            return Err(CliError::NoDocuments(dir));
        };

        print_json(output, collection.documents())
    }
}

/// Directory a listing reads from.
fn listing_dir(root: &Path, dir: Option<&Path>) -> PathBuf {
    match dir {
        Some(dir) => root.join(dir),
        None => root.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_listing_dir_defaults_to_root() {
        assert_eq!(
            listing_dir(Path::new("/site/content"), None),
            PathBuf::from("/site/content")
        );
    }

    #[test]
    fn test_listing_dir_relative_under_root() {
        assert_eq!(
            listing_dir(Path::new("/site/content"), Some(Path::new("2024"))),
            PathBuf::from("/site/content/2024")
        );
    }

    #[test]
    fn test_listing_dir_absolute_kept() {
        assert_eq!(
            listing_dir(Path::new("/site/content"), Some(Path::new("/tmp/other"))),
            PathBuf::from("/tmp/other")
        );
    }
}
