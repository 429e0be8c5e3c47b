use std::path::Path;

use thiserror::Error;

/// Errors that can occur while converting a card CSV into an ID map.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The input CSV could not be opened or read
    #[error("Failed to read input {path}: {source}")]
    Input {
        path: String,
        source: std::io::Error,
    },

    /// The output JSON could not be written
    #[error("Failed to write output {path}: {source}")]
    Output {
        path: String,
        source: std::io::Error,
    },

    /// The CSV header is missing required columns
    #[error("Schema error: {0}")]
    Schema(String),

    /// A row did not match the header (strict mode only)
    #[error("Malformed row at line {line}: {reason}")]
    MalformedRow { line: u64, reason: String },

    /// The map could not be serialized
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ConvertError {
    pub fn input(path: &Path, source: std::io::Error) -> Self {
        Self::Input {
            path: path.display().to_string(),
            source,
        }
    }

    pub fn output(path: &Path, source: std::io::Error) -> Self {
        Self::Output {
            path: path.display().to_string(),
            source,
        }
    }

    pub fn schema(msg: impl Into<String>) -> Self {
        Self::Schema(msg.into())
    }

    pub fn malformed_row(line: u64, reason: impl Into<String>) -> Self {
        Self::MalformedRow {
            line,
            reason: reason.into(),
        }
    }
}

/// Errors that can occur while loading an existing ID map.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("Invalid ID map {path}: {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },
}

/// Errors that can occur while loading `settings.toml`.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("TOML parse error in {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
}
