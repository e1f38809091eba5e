//! Error types for color input and configuration

use std::num::ParseIntError;
use std::path::PathBuf;

use crate::color::Radix;

/// Rejected numeric input.
///
/// Returned by [`ColorState::parse_and_apply`](crate::ColorState::parse_and_apply)
/// when the text is not an integer in the requested radix. The color state is
/// never modified when this is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("{text:?} is not a valid {radix} number")]
    InvalidNumber {
        text: String,
        radix: Radix,
        #[source]
        source: ParseIntError,
    },
}

impl InputError {
    /// The text the user entered.
    pub fn text(&self) -> &str {
        match self {
            InputError::InvalidNumber { text, .. } => text,
        }
    }
}

/// Failure to read an explicit config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
