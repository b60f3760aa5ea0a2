//! Plain line for log files — no escapes, level upper-cased for grep.

use super::{Formatter, timestamp};
use crate::record::Record;

/// Renders `[LEVEL] timestamp [file:line] message`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileFormatter;

impl FileFormatter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Formatter for FileFormatter {
    fn format(&self, record: &Record) -> Result<Vec<u8>, crate::Error> {
        let (file, line) = record.location();
        let line = format!(
            "[{}] {} [{file}:{line}] {}\n",
            record.level.label().to_uppercase(),
            timestamp(record),
            record.message
        );
        Ok(line.into_bytes())
    }
}
