//! Hooks are the only way a record leaves the logger. Each one pairs its own
//! formatter with its own sinks, so formatter choice is local to the hook and
//! concurrent dispatch never mutates shared state.

mod console;
mod file;
mod level;

pub use console::ConsoleHook;
pub use file::FileHook;
pub use level::{LevelHook, LevelSinks};

use crate::fmt::Formatter;
use crate::level::Level;
use crate::record::Record;
use crate::sink::Sink;

/// Invoked synchronously, on the emitting thread, once per record whose level is in [`Hook::levels`].
pub trait Hook: Send + Sync {
    /// Levels this hook fires for. The built-in hooks take every level and
    /// route internally.
    fn levels(&self) -> &[Level] {
        &Level::ALL
    }

    /// Formats the record and writes it to the hook's sinks.
    ///
    /// # Errors
    /// The formatter's error, or the I/O error from a failed write.
    fn fire(&self, record: &Record) -> Result<(), crate::Error>;

    /// # Errors
    /// I/O errors from the hook's sinks.
    fn flush(&self) -> Result<(), crate::Error> {
        Ok(())
    }
}

/// Shared path of the single-sink hooks: render, then one write.
fn render_to(
    formatter: &dyn Formatter,
    sink: &dyn Sink,
    record: &Record,
) -> Result<(), crate::Error> {
    let line = formatter.format(record)?;
    sink.write(&line)?;
    Ok(())
}
