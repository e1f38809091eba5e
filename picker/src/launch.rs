//! Command line handling
//!
//! ```text
//! colorpicker                 start in decimal mode
//! colorpicker -x              start in hexadecimal mode
//! colorpicker hex             start in hexadecimal mode
//! colorpicker --trace         also open the execution trace window
//! colorpicker --log-file FILE also write log lines to FILE
//! ```
//!
//! Developer flags are removed first. If exactly one argument remains and it
//! is `-x` or `hex`, the picker starts in hex mode; anything else falls back
//! to decimal. Unknown arguments are never an error.

use std::path::PathBuf;

use colorpicker_core::{Config, Mode};

/// Options collected from the command line.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LaunchOptions {
    /// Initial display mode
    pub mode: Mode,
    /// `--trace` was given
    pub trace: bool,
    /// `--log-file` value
    pub log_file: Option<PathBuf>,
}

impl LaunchOptions {
    /// Parse options from `std::env::args()`-style arguments (program name first).
    pub fn parse(args: &[String]) -> Self {
        let mut options = LaunchOptions::default();
        let mut rest = Vec::new();

        let mut iter = args.iter().skip(1);
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--trace" => options.trace = true,
                "--log-file" => {
                    if let Some(path) = iter.next() {
                        options.log_file = Some(PathBuf::from(path));
                    }
                }
                _ => rest.push(arg.as_str()),
            }
        }

        if let [only] = rest.as_slice()
            && matches!(*only, "-x" | "hex")
        {
            options.mode = Mode::Hex;
        }

        options
    }

    /// Apply command line overrides on top of the config file.
    pub fn apply_to(&self, config: &mut Config) {
        if self.trace {
            config.trace.enabled = true;
        }
        if let Some(path) = &self.log_file {
            config.trace.log_file = Some(path.clone());
        }
    }
}
