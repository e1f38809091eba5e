//! Color Picker Core
//!
//! Everything in the color picker that is not drawing pixels:
//! - [`ColorState`]: the RGB model, its two display modes and input clamping
//! - [`TraceLog`]: the optional development trace of method entry and exit
//! - [`Notice`]: dialog descriptions queued for the UI
//! - [`config`]: the `config.toml` settings

pub mod color;
pub mod config;
pub mod error;
pub mod report;
pub mod trace;

pub use color::{Channel, ColorState, MAX_CHANNEL, MAX_PACKED, Mode, Radix, Target};
pub use config::Config;
pub use error::{ConfigError, InputError};
pub use report::{Notice, Severity};
pub use trace::{TraceKind, TraceLine, TraceLog};
