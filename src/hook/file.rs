//! One combined log file receiving every record.

use super::{Hook, render_to};
use crate::fmt::{FileFormatter, Formatter};
use crate::record::Record;
use crate::sink::Sink;

pub struct FileHook {
    formatter: Box<dyn Formatter>,
    sink: Box<dyn Sink>,
}

impl FileHook {
    /// Plain file formatter writing to `sink`.
    #[must_use]
    pub fn new(sink: impl Sink + 'static) -> Self {
        Self::with_formatter(FileFormatter::new(), sink)
    }

    #[must_use]
    pub fn with_formatter(formatter: impl Formatter + 'static, sink: impl Sink + 'static) -> Self {
        Self {
            formatter: Box::new(formatter),
            sink: Box::new(sink),
        }
    }
}

impl Hook for FileHook {
    fn fire(&self, record: &Record) -> Result<(), crate::Error> {
        render_to(self.formatter.as_ref(), self.sink.as_ref(), record)
    }

    fn flush(&self) -> Result<(), crate::Error> {
        self.sink.flush()?;
        Ok(())
    }
}
