//! Date mode: colorized console plus `<path>/<date>/<name>.log`.

use super::{dated_dir, ensure_dir, fail_setup};
use crate::hook::{ConsoleHook, FileHook};
use crate::internal;
use crate::level::Level;
use crate::logger::Logger;
use crate::sink::FileSink;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateLog {
    path: PathBuf,
    date: String,
    name: String,
    /// Console tag; the route name when unset.
    tag: Option<String>,
    level: Level,
}

impl DateLog {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, date: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            date: date.into(),
            name: name.into(),
            tag: None,
            level: Level::Info,
        }
    }

    #[must_use]
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Minimum level of the built logger.
    #[must_use]
    pub const fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// `<path>/<date>`
    #[must_use]
    pub fn dir(&self) -> PathBuf {
        dated_dir(&self.path, &self.date)
    }

    /// `<path>/<date>/<name>.log`
    #[must_use]
    pub fn file_path(&self) -> PathBuf {
        self.dir().join(format!("{}.log", self.name))
    }

    /// Logger with the console hook already attached — the fatal path can
    /// report through it if the file cannot be opened.
    fn console_logger(&self) -> Logger {
        let tag = self.tag.as_deref().unwrap_or(&self.name);
        Logger::builder()
            .level(self.level)
            .report_caller(true)
            .hook(ConsoleHook::new(tag))
            .build()
    }

    fn open_file(&self) -> Result<FileSink, crate::Error> {
        ensure_dir(&self.dir())?;
        FileSink::open(self.file_path())
    }

    fn announce(&self) {
        internal::info(
            "ROUTER",
            &format!("Date route ready: {}", self.file_path().display()),
        );
    }

    /// # Errors
    /// [`crate::Error::CreateDir`] or [`crate::Error::OpenFile`].
    pub fn try_init(&self) -> Result<Logger, crate::Error> {
        let mut logger = self.console_logger();
        logger.add_hook(FileHook::new(self.open_file()?));
        self.announce();
        Ok(logger)
    }

    /// Exits the process if the directory or file cannot be set up.
    #[must_use]
    pub fn init(&self) -> Logger {
        let mut logger = self.console_logger();
        match self.open_file() {
            Ok(sink) => {
                logger.add_hook(FileHook::new(sink));
                self.announce();
            }
            Err(e) => fail_setup(&logger, e),
        }
        logger
    }
}
