use thiserror::Error;

use poro_idmap_lib::{ConvertError, LookupError, SettingsError};

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Conversion failed
    #[error("{0}")]
    Convert(#[from] ConvertError),

    /// ID map could not be loaded
    #[error("{0}")]
    Lookup(#[from] LookupError),

    /// Settings file could not be loaded
    #[error("Config error: {0}")]
    Config(#[from] SettingsError),

    /// Lookup found no matching card
    #[error("Not found: {0}")]
    NotFound(String),
}

impl CliError {
    pub(crate) fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }
}
