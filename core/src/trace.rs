//! Development trace log
//!
//! A bounded list of "entering"/"exiting"/message lines that the UI shows in
//! its trace window. The log is handed to the code that wants to trace, and
//! every call is a no-op while it is disabled.
//!
//! ```
//! use colorpicker_core::TraceLog;
//!
//! let mut trace = TraceLog::new(true, 100);
//! trace.enter("read_text");
//! trace.exit("read_text");
//! assert_eq!(trace.len(), 2);
//! ```

use std::collections::VecDeque;
use std::fmt;
use std::panic::Location;

/// Default number of lines kept.
pub const DEFAULT_CAPACITY: usize = 1000;

/// What a trace line records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceKind {
    Enter,
    Exit,
    Message,
}

/// One recorded trace line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceLine {
    pub kind: TraceKind,
    /// Method name for enter/exit, free text for messages
    pub text: String,
    /// Source location of the caller (enter/exit only)
    pub location: Option<(&'static str, u32)>,
}

impl fmt::Display for TraceLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TraceKind::Enter => write!(f, "Entering {}", self.text)?,
            TraceKind::Exit => write!(f, "Exiting {}", self.text)?,
            TraceKind::Message => f.write_str(&self.text)?,
        }
        if let Some((file, line)) = self.location {
            write!(f, " ({}:{})", file, line)?;
        }
        Ok(())
    }
}

/// Enable-able, bounded trace buffer.
#[derive(Debug, Clone)]
pub struct TraceLog {
    enabled: bool,
    capacity: usize,
    lines: VecDeque<TraceLine>,
}

impl Default for TraceLog {
    fn default() -> Self {
        Self::new(false, DEFAULT_CAPACITY)
    }
}

impl TraceLog {
    /// Create a trace log keeping at most `capacity` lines (minimum 1).
    pub fn new(enabled: bool, capacity: usize) -> Self {
        Self {
            enabled,
            capacity: capacity.max(1),
            lines: VecDeque::new(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Turning the log off keeps the lines already recorded.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Record entry into `method`, tagged with the caller's location.
    #[track_caller]
    pub fn enter(&mut self, method: &str) {
        let location = Location::caller();
        self.push(TraceLine {
            kind: TraceKind::Enter,
            text: method.to_string(),
            location: Some((location.file(), location.line())),
        });
    }

    /// Record exit from `method`, tagged with the caller's location.
    #[track_caller]
    pub fn exit(&mut self, method: &str) {
        let location = Location::caller();
        self.push(TraceLine {
            kind: TraceKind::Exit,
            text: method.to_string(),
            location: Some((location.file(), location.line())),
        });
    }

    /// Record a free-form line.
    pub fn message(&mut self, text: impl Into<String>) {
        self.push(TraceLine {
            kind: TraceKind::Message,
            text: text.into(),
            location: None,
        });
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Recorded lines, oldest first.
    pub fn lines(&self) -> impl Iterator<Item = &TraceLine> {
        self.lines.iter()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    fn push(&mut self, line: TraceLine) {
        if !self.enabled {
            return;
        }
        tracing::trace!("{}", line);
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }
}
