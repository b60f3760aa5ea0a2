//! Colorized line for humans watching stdout.

use super::{Color, Formatter, colorize, timestamp};
use crate::record::Record;

/// Renders `[tag] <color>[level]<reset> [timestamp] file:line message`.
#[derive(Debug, Clone)]
pub struct ConsoleFormatter {
    /// Leading bracketed tag identifying the service in mixed console output.
    tag: String,
}

impl Default for ConsoleFormatter {
    fn default() -> Self {
        Self::new("routelog")
    }
}

impl ConsoleFormatter {
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into() }
    }

    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }
}

impl Formatter for ConsoleFormatter {
    fn format(&self, record: &Record) -> Result<Vec<u8>, crate::Error> {
        let level = colorize(
            &format!("[{}]", record.level.label()),
            Color::for_level(record.level),
        );
        let (file, line) = record.location();
        let line = format!(
            "[{}] {level} [{}] {file}:{line} {}\n",
            self.tag,
            timestamp(record),
            record.message
        );
        Ok(line.into_bytes())
    }
}
