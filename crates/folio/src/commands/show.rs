//! `folio show` command implementation.

use std::path::PathBuf;

use clap::Args;
use folio_content::ContentLoader;

use super::print_json;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the show command.
#[derive(Args)]
pub(crate) struct ShowArgs {
    /// Document file to parse.
    file: PathBuf,
}

impl ShowArgs {
    /// Execute the show command.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, unreadable, or empty.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let doc = ContentLoader::new().parse_one(&self.file)?;
        print_json(output, &doc)
    }
}
