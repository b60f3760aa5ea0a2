//! `routelog` - hook-based log routing to the console, a date-stamped file, or per-level files.
//!
//! The [`Logger`] has no output of its own. Every record goes through the
//! hooks registered on it, each of which renders with its own formatter and
//! writes to its own sinks:
//!
//! - [`ConsoleHook`]: colorized line on stdout
//! - [`FileHook`]: plain line in one combined file
//! - [`LevelHook`]: catch-all file plus one file per severity
//!
//! The [`router`] assembles those hooks for the two supported layouts.
//!
//! # Example
//!
//! ```no_run
//! use routelog::{DateLog, Level};
//!
//! let log = DateLog::new("logs", "2024-01-01", "svc")
//!     .level(Level::Debug)
//!     .init();
//!
//! log.error("connection refused");
//! log.warn("retrying");
//! log.info("connected");
//! log.debug("handshake took 12ms");
//! ```
//!
//! # Features
//!
//! - `cli` (default): builds the `routelog` binary

pub mod config;
mod error;
pub mod fmt;
pub mod hook;
pub mod internal;
pub mod level;
pub mod logger;
pub mod record;
pub mod router;
pub mod sink;

pub use config::{Config, Mode};
pub use error::Error;
pub use fmt::{ConsoleFormatter, FileFormatter, Formatter};
pub use hook::{ConsoleHook, FileHook, Hook, LevelHook, LevelSinks};
pub use level::Level;
pub use logger::{Logger, LoggerBuilder};
pub use record::{CallSite, Record};
pub use router::{DateLog, LevelLog, Route};
pub use sink::{ConsoleSink, FileSink, MemorySink, Sink};
