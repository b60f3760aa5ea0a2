//! Per-severity fan-out: every record goes to the catch-all sink, and records
//! at a routed severity also go to that severity's own sink.

use super::Hook;
use crate::fmt::{FileFormatter, Formatter};
use crate::level::Level;
use crate::record::Record;
use crate::sink::Sink;

/// Dedicated sink per routed severity. Trace and Fatal have none.
pub struct LevelSinks {
    pub error: Box<dyn Sink>,
    pub warn: Box<dyn Sink>,
    pub info: Box<dyn Sink>,
    pub debug: Box<dyn Sink>,
}

impl LevelSinks {
    #[must_use]
    pub fn new(
        error: impl Sink + 'static,
        warn: impl Sink + 'static,
        info: impl Sink + 'static,
        debug: impl Sink + 'static,
    ) -> Self {
        Self {
            error: Box::new(error),
            warn: Box::new(warn),
            info: Box::new(info),
            debug: Box::new(debug),
        }
    }

    /// Sink for exactly `level`, if it is routed.
    #[must_use]
    pub fn get(&self, level: Level) -> Option<&dyn Sink> {
        match level {
            Level::Error => Some(&*self.error),
            Level::Warn => Some(&*self.warn),
            Level::Info => Some(&*self.info),
            Level::Debug => Some(&*self.debug),
            Level::Trace | Level::Fatal => None,
        }
    }
}

pub struct LevelHook {
    formatter: Box<dyn Formatter>,
    all: Box<dyn Sink>,
    routes: LevelSinks,
}

impl LevelHook {
    /// Plain file formatter over a catch-all sink and the per-level table.
    #[must_use]
    pub fn new(all: impl Sink + 'static, routes: LevelSinks) -> Self {
        Self::with_formatter(FileFormatter::new(), all, routes)
    }

    #[must_use]
    pub fn with_formatter(
        formatter: impl Formatter + 'static,
        all: impl Sink + 'static,
        routes: LevelSinks,
    ) -> Self {
        Self {
            formatter: Box::new(formatter),
            all: Box::new(all),
            routes,
        }
    }
}

impl Hook for LevelHook {
    /// Both writes are attempted even if the first fails; the error returned
    /// is the last one seen, so a record may land in only one of the two files.
    fn fire(&self, record: &Record) -> Result<(), crate::Error> {
        let line = self.formatter.format(record)?;

        let mut result = self.all.write(&line);
        if let Some(sink) = self.routes.get(record.level)
            && let Err(e) = sink.write(&line)
        {
            result = Err(e);
        }

        result.map_err(crate::Error::from)
    }

    fn flush(&self) -> Result<(), crate::Error> {
        self.all.flush()?;
        for level in Level::ALL {
            if let Some(sink) = self.routes.get(level) {
                sink.flush()?;
            }
        }
        Ok(())
    }
}
