//! CLI command implementations.

mod list;
mod resolve;
mod show;

use std::path::PathBuf;

use clap::Args;
use folio_config::{CliSettings, Config};
use serde::Serialize;

use crate::error::CliError;
use crate::output::Output;

pub(crate) use list::ListArgs;
pub(crate) use resolve::ResolveArgs;
pub(crate) use show::ShowArgs;

/// Options shared by every command.
#[derive(Args, Debug, Default)]
pub(crate) struct GlobalArgs {
    /// Path to configuration file (default: auto-discover folio.toml).
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Content root directory (overrides config).
    #[arg(short, long, global = true)]
    root: Option<PathBuf>,

    /// Replace bodies with plain-text summaries in listings.
    #[arg(long, global = true)]
    summary: bool,

    /// Keep full bodies in listings.
    #[arg(long, global = true, conflicts_with = "summary")]
    no_summary: bool,

    /// Enable verbose output (show per-tree timing logs).
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl GlobalArgs {
    /// Summary override from the flag pair, `None` when neither is given.
    fn summary_override(&self) -> Option<bool> {
        if self.summary {
            Some(true)
        } else if self.no_summary {
            Some(false)
        } else {
            None
        }
    }

    /// Load configuration with command-line overrides applied.
    pub(crate) fn load_config(&self) -> Result<Config, CliError> {
        let cli_settings = CliSettings {
            root: self.root.clone(),
            summary: self.summary_override(),
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        tracing::debug!(
            config_path = ?config.config_path,
            root = %config.content.root.display(),
            summary = config.content.summary,
            "Loaded configuration"
        );
        Ok(config)
    }
}

/// Print `value` as pretty JSON on stdout.
fn print_json<T: Serialize + ?Sized>(output: &Output, value: &T) -> Result<(), CliError> {
    output.data(&serde_json::to_string_pretty(value)?);
    Ok(())
}
