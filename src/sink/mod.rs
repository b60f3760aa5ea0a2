//! Append-only destinations. A hook owns its sinks exclusively, but a shared
//! logger may fire the same hook from many threads at once, so every sink
//! serializes its own appends: one record is one uninterrupted write.

mod console;
mod file;
mod memory;

pub use console::{ConsoleSink, Stream};
pub use file::FileSink;
pub use memory::MemorySink;

use std::io;

/// `Send + Sync` lets hooks be fired concurrently without a lock around the hook itself.
pub trait Sink: Send + Sync {
    /// Appends one rendered record. Implementations must not interleave
    /// concurrent calls.
    ///
    /// # Errors
    /// I/O errors from the underlying stream.
    fn write(&self, bytes: &[u8]) -> io::Result<()>;

    /// # Errors
    /// I/O errors from the underlying stream.
    fn flush(&self) -> io::Result<()>;
}
