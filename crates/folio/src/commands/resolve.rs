//! `folio resolve` command implementation.

use clap::Args;
use folio_content::{ContentLoader, source_path_for};

use super::GlobalArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the resolve command.
#[derive(Args)]
pub(crate) struct ResolveArgs {
    /// Identifier to resolve, e.g. `2024/01/new-year.html`.
    identifier: String,

    /// Fail unless the identifier names a readable document.
    #[arg(long)]
    check: bool,
}

impl ResolveArgs {
    /// Execute the resolve command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails, the identifier does not map
    /// to a path under the content root, or `--check` cannot parse the
    /// document it maps to.
    pub(crate) fn execute(self, global: &GlobalArgs, output: &Output) -> Result<(), CliError> {
        let config = global.load_config()?;
        let root = &config.content.root;

        let path = if self.check {
            ContentLoader::new()
                .parse_identifier(root, &self.identifier)?
                .source_path
        } else {
            source_path_for(root, &self.identifier)
                .ok_or(CliError::InvalidIdentifier(self.identifier))?
        };

        output.data(&path.display().to_string());
        Ok(())
    }
}
