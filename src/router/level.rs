//! Level mode: `<name>-all.log` receives everything, and each routed severity
//! also gets its own file. No console output in this mode.

use super::{dated_dir, ensure_dir, fail_setup};
use crate::hook::{LevelHook, LevelSinks};
use crate::internal;
use crate::level::Level;
use crate::logger::Logger;
use crate::sink::FileSink;
use std::path::PathBuf;

/// File suffixes in opening order: catch-all, then error, warn, info, debug.
pub const SUFFIXES: [&str; 5] = ["all", "err", "warn", "info", "debug"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelLog {
    path: PathBuf,
    date: String,
    name: String,
    level: Level,
}

impl LevelLog {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, date: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            date: date.into(),
            name: name.into(),
            level: Level::Info,
        }
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

    /// `<path>/<date>/<name>-<suffix>.log`
    #[must_use]
    pub fn file_path(&self, suffix: &str) -> PathBuf {
        self.dir().join(format!("{}-{suffix}.log", self.name))
    }

    /// Path of the file a record at `level` is routed to, besides the catch-all.
    #[must_use]
    pub fn level_file(&self, level: Level) -> Option<PathBuf> {
        let suffix = match level {
            Level::Error => "err",
            Level::Warn => "warn",
            Level::Info => "info",
            Level::Debug => "debug",
            Level::Trace | Level::Fatal => return None,
        };
        Some(self.file_path(suffix))
    }

    fn open_hook(&self) -> Result<LevelHook, crate::Error> {
        ensure_dir(&self.dir())?;
        let [all, error, warn, info, debug] = SUFFIXES.map(|suffix| self.file_path(suffix));
        let routes = LevelSinks::new(
            FileSink::open(error)?,
            FileSink::open(warn)?,
            FileSink::open(info)?,
            FileSink::open(debug)?,
        );
        Ok(LevelHook::new(FileSink::open(all)?, routes))
    }

    fn empty_logger(&self) -> Logger {
        Logger::builder()
            .level(self.level)
            .report_caller(true)
            .build()
    }

    fn announce(&self) {
        internal::info(
            "ROUTER",
            &format!("Level route ready: {}", self.file_path("all").display()),
        );
    }

    /// # Errors
    /// [`crate::Error::CreateDir`] or [`crate::Error::OpenFile`]; no file
    /// handle outlives a failed setup.
    pub fn try_init(&self) -> Result<Logger, crate::Error> {
        let mut logger = self.empty_logger();
        logger.add_hook(self.open_hook()?);
        self.announce();
        Ok(logger)
    }

    /// Exits the process if the directory or any file cannot be set up.
    #[must_use]
    pub fn init(&self) -> Logger {
        let mut logger = self.empty_logger();
        match self.open_hook() {
            Ok(hook) => {
                logger.add_hook(hook);
                self.announce();
            }
            Err(e) => fail_setup(&logger, e),
        }
        logger
    }
}
