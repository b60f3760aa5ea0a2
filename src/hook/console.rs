//! Colorized output for a human watching the process.

use super::{Hook, render_to};
use crate::fmt::{ConsoleFormatter, Formatter};
use crate::record::Record;
use crate::sink::{ConsoleSink, Sink};

pub struct ConsoleHook {
    formatter: Box<dyn Formatter>,
    sink: Box<dyn Sink>,
}

impl ConsoleHook {
    /// Console formatter tagged with `tag`, writing to stdout.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self::with_parts(ConsoleFormatter::new(tag), ConsoleSink::stdout())
    }

    /// Any formatter and sink, e.g. to capture console output in memory.
    #[must_use]
    pub fn with_parts(formatter: impl Formatter + 'static, sink: impl Sink + 'static) -> Self {
        Self {
            formatter: Box::new(formatter),
            sink: Box::new(sink),
        }
    }
}

impl Hook for ConsoleHook {
    fn fire(&self, record: &Record) -> Result<(), crate::Error> {
        render_to(self.formatter.as_ref(), self.sink.as_ref(), record)
    }

    fn flush(&self) -> Result<(), crate::Error> {
        self.sink.flush()?;
        Ok(())
    }
}
