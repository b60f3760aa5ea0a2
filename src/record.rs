//! The event every hook receives — built once by the logger, read-only afterwards.

use crate::level::Level;
use chrono::{DateTime, Local};
use std::panic::Location;
use std::path::Path;

/// Where a record was emitted from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallSite {
    pub file: String,
    pub line: u32,
}

impl CallSite {
    #[must_use]
    pub fn new(file: impl Into<String>, line: u32) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }

    /// Captures the location of the `#[track_caller]` chain's outermost caller.
    #[must_use]
    #[track_caller]
    pub fn here() -> Self {
        let location = Location::caller();
        Self::new(location.file(), location.line())
    }

    /// Log lines show only the file name, not the full source path.
    #[must_use]
    pub fn file_name(&self) -> &str {
        Path::new(&self.file)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(&self.file)
    }
}

/// A single log event.
#[derive(Debug, Clone)]
pub struct Record {
    /// Captured when the record is emitted; formatters render this, not the render-time clock.
    pub timestamp: DateTime<Local>,
    pub level: Level,
    pub message: String,
    /// `None` unless the logger has call-site capture enabled.
    pub caller: Option<CallSite>,
}

impl Record {
    /// Stamps the record with the current local time.
    #[must_use]
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            timestamp: Local::now(),
            level,
            message: message.into(),
            caller: None,
        }
    }

    #[must_use]
    pub fn with_timestamp(mut self, timestamp: DateTime<Local>) -> Self {
        self.timestamp = timestamp;
        self
    }

    #[must_use]
    pub fn with_caller(mut self, caller: CallSite) -> Self {
        self.caller = Some(caller);
        self
    }

    /// File name and line for rendering; an absent call-site yields `("", 0)`.
    #[must_use]
    pub fn location(&self) -> (&str, u32) {
        self.caller
            .as_ref()
            .map_or(("", 0), |caller| (caller.file_name(), caller.line))
    }
}
