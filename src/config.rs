//! User settings loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Default settings file, looked up in the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "rewind_toe.toml";

/// Settings for the terminal and replay views.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// File the interactive view writes its trace log to.
    log_file: PathBuf,

    /// Tracing filter used when `RUST_LOG` is not set.
    log_filter: String,

    /// Show 1-9 key hints in empty cells.
    show_coordinates: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from("rewind_toe.log"),
            log_filter: "info".to_string(),
            show_coordinates: true,
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(log_file = %settings.log_file.display(), "Settings loaded");
        Ok(settings)
    }

    /// Loads settings from `path`, falling back to defaults when the file is absent.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Settings file not found, using defaults");
            Ok(Self::default())
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
