//! Turns a destination description into a ready `Logger`.
//!
//! Two mutually exclusive modes: [`DateLog`] writes console plus one combined
//! file, [`LevelLog`] fans out to a catch-all file and one file per severity.
//! Both lay files out under `<path>/<date>/`.
//!
//! Setup is fail-fast. `try_init` reports what went wrong; `init` logs the
//! cause and terminates the process, so a broken destination never leaves
//! the program running with its logs going nowhere.

mod date;
mod level;

pub use date::DateLog;
pub use level::{LevelLog, SUFFIXES};

use crate::internal;
use crate::logger::Logger;
use std::fmt::Display;
use std::fs;
use std::path::{Path, PathBuf};

/// A configured destination, either mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Date(DateLog),
    Level(LevelLog),
}

impl Route {
    /// # Errors
    /// Directory creation or file opening failures.
    pub fn try_init(&self) -> Result<Logger, crate::Error> {
        match self {
            Self::Date(route) => route.try_init(),
            Self::Level(route) => route.try_init(),
        }
    }

    /// Like [`Route::try_init`], but exits the process on failure.
    #[must_use]
    pub fn init(&self) -> Logger {
        match self {
            Self::Date(route) => route.init(),
            Self::Level(route) => route.init(),
        }
    }

    /// Directory the route's files live in.
    #[must_use]
    pub fn dir(&self) -> PathBuf {
        match self {
            Self::Date(route) => route.dir(),
            Self::Level(route) => route.dir(),
        }
    }
}

impl From<DateLog> for Route {
    fn from(route: DateLog) -> Self {
        Self::Date(route)
    }
}

impl From<LevelLog> for Route {
    fn from(route: LevelLog) -> Self {
        Self::Level(route)
    }
}

/// `<path>/<date>`
fn dated_dir(path: &Path, date: &str) -> PathBuf {
    path.join(date)
}

/// Idempotent, parents included.
fn ensure_dir(dir: &Path) -> Result<(), crate::Error> {
    match fs::create_dir_all(dir) {
        Ok(()) => {
            internal::debug("ROUTER", &format!("Log directory ready: {}", dir.display()));
            Ok(())
        }
        Err(source) => Err(crate::Error::CreateDir {
            path: dir.to_path_buf(),
            source,
        }),
    }
}

/// The fatal path: the cause goes to stderr and through whatever hooks the
/// partial logger already holds, then the process exits with status 1.
fn fail_setup(logger: &Logger, cause: impl Display) -> ! {
    internal::error("ROUTER", &format!("Log setup failed: {cause}"));
    logger.fatal(cause);
}
