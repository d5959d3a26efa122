//! magiclog configuration
//!
//! Settings come from a TOML file. Everything is optional; a missing file
//! yields the defaults.
//!
//! ```toml
//! default-language = "typescript"
//!
//! [[log-formats]]
//! logPrefix = "console.debug("
//! parameterSeparator = ", "
//! identifierPrefix = ""
//! identifierSuffix = ""
//! logSuffix = ");"
//! quoteCharacter = "'"
//! insertSpaces = false
//!
//! [languages.python]
//! log-formats = [
//!     { logPrefix = "print(", parameterSeparator = ", ", identifierPrefix = "", identifierSuffix = "", logSuffix = ")", quoteCharacter = "'", insertSpaces = false },
//! ]
//! ```
//!
//! # Override precedence
//!
//! ```text
//! Priority (high → low):
//! 1. languages.<id>.log-formats
//! 2. log-formats
//! 3. Built-in formats of the language
//! ```
//!
//! Overrides are kept as raw values and validated field by field when a
//! language is compiled, so one bad entry never half-applies.

mod validate;

use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::backends::logger::LoggerConfig;
use crate::languages::{canonical, BASELINE};

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("log formats must be an array of format records")]
    NotAnArray,
    #[error("log formats must contain at least one format")]
    EmptyFormats,
    #[error("log format #{index} must be a record")]
    NotAnObject { index: usize },
    #[error("log format #{index} is missing `{field}`")]
    MissingField { index: usize, field: &'static str },
    #[error("log format #{index}: `{field}` must be {expected}")]
    WrongType {
        index: usize,
        field: &'static str,
        expected: &'static str,
    },
    #[error("log format #{index}: `quoteCharacter` must be exactly one character, found {found:?}")]
    InvalidQuote { index: usize, found: String },
}

fn default_language() -> String {
    BASELINE.to_string()
}

/// Per-language settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct LanguageSettings {
    /// Replaces the language's rotation list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_formats: Option<serde_json::Value>,
}

/// User settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Settings {
    /// Language used when the requested one has no profile
    #[serde(default = "default_language")]
    pub default_language: String,
    /// Replaces the rotation list of every language
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_formats: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub languages: IndexMap<String, LanguageSettings>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_language: default_language(),
            log_formats: None,
            languages: IndexMap::new(),
        }
    }
}

impl Settings {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load settings from `path`; a missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Settings for `language`, matched by id or alias
    pub fn language(
        &self,
        language: &str,
    ) -> Option<&LanguageSettings> {
        let wanted = canonical(language);
        self.languages
            .iter()
            .find(|(key, _)| key.as_str() == language || (wanted.is_some() && canonical(key) == wanted))
            .map(|(_, settings)| settings)
    }

    /// The validated override for `language`, if one is configured.
    ///
    /// The most specific override wins. An invalid override is an error; the
    /// caller then uses the built-in formats, never a less specific override.
    pub fn logger_override(
        &self,
        language: &str,
    ) -> Result<Option<LoggerConfig>, ConfigError> {
        let value = self
            .language(language)
            .and_then(|settings| settings.log_formats.as_ref())
            .or(self.log_formats.as_ref());
        value.map(LoggerConfig::from_value).transpose()
    }
}

/// Get the user config directory
pub fn get_config_dir() -> Option<PathBuf> {
    // Try XDG config directory on Unix
    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
        return Some(PathBuf::from(xdg_config).join("magiclog"));
    }

    // Fallback to ~/.config/magiclog
    if let Ok(home) = std::env::var("HOME") {
        return Some(PathBuf::from(home).join(".config").join("magiclog"));
    }

    // On Windows, try %APPDATA%
    if let Ok(appdata) = std::env::var("APPDATA") {
        return Some(PathBuf::from(appdata).join("magiclog"));
    }

    None
}

/// Get the user config file path (~/.config/magiclog/config.toml)
pub fn get_config_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join("config.toml"))
}

/// Load user-level settings
/// Returns default settings if the file doesn't exist
pub fn load_user_settings() -> Result<Settings, ConfigError> {
    match get_config_path() {
        Some(path) => Settings::load(&path),
        None => Ok(Settings::default()),
    }
}
