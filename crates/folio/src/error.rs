//! CLI error types.

use std::path::PathBuf;

use folio_config::ConfigError;
use folio_content::ContentError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Content(#[from] ContentError),

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("no documents under {}", .0.display())]
    NoDocuments(PathBuf),

    #[error("not a document identifier: {0}")]
    InvalidIdentifier(String),
}
