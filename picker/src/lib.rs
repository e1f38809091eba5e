//! Color Picker
//!
//! An eframe application for choosing an RGB color with sliders or typed
//! numbers, shown either as three decimal channels or one hexadecimal value.
//! The color model itself lives in `colorpicker-core`; this crate parses the
//! launch arguments, sets up logging and draws the window.

pub mod app;
pub mod launch;
pub mod logging;
pub mod ui;
