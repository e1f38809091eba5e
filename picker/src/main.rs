//! Color picker launcher
//!
//! `colorpicker` starts in decimal mode; `colorpicker -x` or
//! `colorpicker hex` starts in hexadecimal mode. See [`colorpicker::launch`]
//! for the developer flags.

use anyhow::Result;
use colorpicker::launch::LaunchOptions;
use colorpicker_core::{Config, Notice, config};
use std::env;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let options = LaunchOptions::parse(&args);

    // Read settings before logging so the config can name a log file.
    let (mut config, config_error) = match config::load() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };
    options.apply_to(&mut config);

    colorpicker::logging::init(config.trace.log_file.as_deref());

    let mut notices = Vec::new();
    if let Some(e) = config_error {
        tracing::warn!("Using default settings: {}", e);
        notices.push(Notice::from_error("Unable to load settings", &e));
    }

    colorpicker::app::run(config, options.mode, notices)?;

    Ok(())
}
