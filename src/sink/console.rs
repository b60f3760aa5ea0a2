//! Standard output streams. The std handle lock already serializes writers.

use super::Sink;
use std::io::{self, Write};

/// Which process stream a [`ConsoleSink`] targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stream {
    #[default]
    Stdout,
    Stderr,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink {
    stream: Stream,
}

impl ConsoleSink {
    #[must_use]
    pub const fn stdout() -> Self {
        Self {
            stream: Stream::Stdout,
        }
    }

    #[must_use]
    pub const fn stderr() -> Self {
        Self {
            stream: Stream::Stderr,
        }
    }
}

impl Sink for ConsoleSink {
    fn write(&self, bytes: &[u8]) -> io::Result<()> {
        match self.stream {
            Stream::Stdout => io::stdout().lock().write_all(bytes),
            Stream::Stderr => io::stderr().lock().write_all(bytes),
        }
    }

    fn flush(&self) -> io::Result<()> {
        match self.stream {
            Stream::Stdout => io::stdout().flush(),
            Stream::Stderr => io::stderr().flush(),
        }
    }
}
