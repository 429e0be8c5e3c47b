//! User settings for default conversion paths.
//!
//! The settings file lives at `~/.config/poro-idmap/settings.toml` (or
//! wherever `POROIDMAP_SETTINGS` points). Every key is optional:
//!
//! ```toml
//! [convert]
//! input = "cards.csv"
//! output = "product-id-map-v2.json"
//! strict = false
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::SettingsError;
use crate::reader::MalformedRowPolicy;

/// Environment variable overriding the settings file location.
pub const SETTINGS_ENV: &str = "POROIDMAP_SETTINGS";

/// Input CSV used when neither the command line nor settings name one.
pub const DEFAULT_INPUT: &str = "2025-11 Pokemon MCM Tcg Poromagia id match - CardKaikki.csv";

/// Output JSON used when neither the command line nor settings name one.
pub const DEFAULT_OUTPUT: &str = "product-id-map-v2.json";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub convert: ConvertSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertSettings {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub strict: Option<bool>,
}

/// Where a resolved value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingSource {
    CommandLine,
    SettingsFile,
    Default,
}

impl std::fmt::Display for SettingSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CommandLine => write!(f, "command line"),
            Self::SettingsFile => write!(f, "settings file"),
            Self::Default => write!(f, "default"),
        }
    }
}

/// Canonical path to the settings file.
pub fn settings_path() -> PathBuf {
    if let Some(p) = std::env::var_os(SETTINGS_ENV) {
        return PathBuf::from(p);
    }
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("poro-idmap").join("settings.toml")
}

impl Settings {
    /// Load settings from [`settings_path`].
    pub fn load() -> Result<Self, SettingsError> {
        Self::load_from(&settings_path())
    }

    /// Load settings from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let contents = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No settings file at {}", path.display());
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(SettingsError::Io {
                    path: path.display().to_string(),
                    source: e,
                });
            }
        };
        toml::from_str(&contents).map_err(|e| SettingsError::Parse {
            path: path.display().to_string(),
            source: e,
        })
    }

    /// Resolve the input CSV path: command line, then settings, then default.
    pub fn resolve_input(&self, cli_override: Option<PathBuf>) -> (PathBuf, SettingSource) {
        resolve(cli_override, self.convert.input.clone(), DEFAULT_INPUT)
    }

    /// Resolve the output JSON path: command line, then settings, then default.
    pub fn resolve_output(&self, cli_override: Option<PathBuf>) -> (PathBuf, SettingSource) {
        resolve(cli_override, self.convert.output.clone(), DEFAULT_OUTPUT)
    }

    /// A strictness flag given on the command line (`--strict` or
    /// `--no-strict`) wins; otherwise use the settings value, defaulting to
    /// skipping malformed rows.
    pub fn malformed_row_policy(
        &self,
        cli_strict: Option<bool>,
    ) -> (MalformedRowPolicy, SettingSource) {
        let (strict, source) = if let Some(strict) = cli_strict {
            (strict, SettingSource::CommandLine)
        } else if let Some(strict) = self.convert.strict {
            (strict, SettingSource::SettingsFile)
        } else {
            (false, SettingSource::Default)
        };
        let policy = if strict {
            MalformedRowPolicy::Fail
        } else {
            MalformedRowPolicy::Skip
        };
        (policy, source)
    }
}

fn resolve(
    cli_override: Option<PathBuf>,
    from_settings: Option<PathBuf>,
    default: &str,
) -> (PathBuf, SettingSource) {
    if let Some(p) = cli_override {
        return (p, SettingSource::CommandLine);
    }
    if let Some(p) = from_settings {
        return (p, SettingSource::SettingsFile);
    }
    (PathBuf::from(default), SettingSource::Default)
}
