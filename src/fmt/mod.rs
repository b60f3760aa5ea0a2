//! Rendering a record to bytes. Each hook carries its own formatter, so the
//! choice between console and file styling never touches shared state.

mod color;
mod console;
mod file;

pub use color::{Color, colorize};
pub use console::ConsoleFormatter;
pub use file::FileFormatter;

use crate::record::Record;

/// Timestamp layout shared by both formatters.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// `Send + Sync` so hooks holding a formatter can be shared across emitting threads.
pub trait Formatter: Send + Sync {
    /// Renders one record, including the trailing newline.
    ///
    /// # Errors
    /// Implementations may reject records they cannot render; the built-in
    /// formatters never fail.
    fn format(&self, record: &Record) -> Result<Vec<u8>, crate::Error>;
}

/// Timestamp of the record in [`TIMESTAMP_FORMAT`].
fn timestamp(record: &Record) -> String {
    record.timestamp.format(TIMESTAMP_FORMAT).to_string()
}
