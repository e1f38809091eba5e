//! Dialog notices
//!
//! A [`Notice`] describes one error or information dialog. The UI keeps a
//! queue of them and shows the oldest until the user dismisses it.

use std::error::Error;

/// Icon and color of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Info,
}

/// A dialog waiting to be shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub severity: Severity,
    pub title: String,
    pub message: String,
    /// Extra lines, e.g. an error and its causes
    pub details: Vec<String>,
}

impl Notice {
    /// Error dialog titled "Error".
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            title: "Error".to_string(),
            message: message.into(),
            details: Vec::new(),
        }
    }

    /// Information dialog titled "Notification".
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            title: "Notification".to_string(),
            message: message.into(),
            details: Vec::new(),
        }
    }

    /// Error dialog listing `error` and every `source()` beneath it.
    pub fn from_error(message: impl Into<String>, error: &dyn Error) -> Self {
        let mut details = vec![error.to_string()];
        let mut source = error.source();
        while let Some(cause) = source {
            details.push(format!("caused by: {}", cause));
            source = cause.source();
        }

        Self {
            severity: Severity::Error,
            title: "Exception Details".to_string(),
            message: message.into(),
            details,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}
