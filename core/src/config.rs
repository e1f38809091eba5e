//! Configuration management (config.toml)
//!
//! Settings live in TOML format in the platform-specific config directory.
//! The file is only ever read; a missing file means defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::trace::DEFAULT_CAPACITY;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Window settings
    #[serde(default)]
    pub window: WindowConfig,
    /// Trace window and log file settings
    #[serde(default)]
    pub trace: TraceConfig,
    /// Text entry settings
    #[serde(default)]
    pub input: InputConfig,
}

/// Window configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Initial inner width (default: 300)
    #[serde(default = "default_width")]
    pub width: f32,
    /// Initial inner height (default: 200)
    #[serde(default = "default_height")]
    pub height: f32,
}

/// Development tracing configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceConfig {
    /// Show the execution trace window (default: false)
    #[serde(default)]
    pub enabled: bool,
    /// Trace lines kept before the oldest are dropped (default: 1000)
    #[serde(default = "default_capacity")]
    pub capacity: usize,
    /// Also write log output to this file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

/// Text entry configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct InputConfig {
    /// Show a dialog for invalid numbers instead of ignoring them (default: false)
    #[serde(default)]
    pub strict: bool,
}

fn default_width() -> f32 {
    300.0
}
fn default_height() -> f32 {
    200.0
}
fn default_capacity() -> usize {
    DEFAULT_CAPACITY
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
        }
    }
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            capacity: default_capacity(),
            log_file: None,
        }
    }
}

/// Returns the platform-specific configuration directory.
///
/// On Windows: `%APPDATA%\ColorPicker\config`
/// On macOS: `~/Library/Application Support/io.colorpicker.ColorPicker`
/// On Linux: `~/.config/ColorPicker`
pub fn config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("io.colorpicker", "", "ColorPicker")
        .map(|dirs| dirs.config_dir().to_path_buf())
}

/// Path of `config.toml`, if a home directory exists.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.toml"))
}

/// Reads and parses a specific config file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid TOML for
/// [`Config`].
pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads the configuration from the platform config directory.
///
/// A missing file (or no home directory) yields the defaults.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed, so the
/// caller can report it once logging is up and fall back to defaults.
pub fn load() -> Result<Config, ConfigError> {
    match config_path() {
        Some(path) if path.exists() => load_from(&path),
        _ => Ok(Config::default()),
    }
}
