//! Unified error type for all routelog operations.

use std::path::PathBuf;

/// Error type for routelog operations.
#[derive(Debug)]
pub enum Error {
    /// I/O error while writing or flushing a sink.
    Io(std::io::Error),
    /// Log directory could not be created.
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Log file could not be opened for appending.
    OpenFile {
        path: PathBuf,
        source: std::io::Error,
    },
    /// A formatter could not render a record.
    Format(String),
    /// TOML config parsing error.
    ConfigParse(toml::de::Error),
    /// Invalid log level string.
    InvalidLevel(String),
    /// Invalid routing mode string.
    InvalidMode(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::CreateDir { path, source } => {
                write!(f, "cannot create directory {}: {source}", path.display())
            }
            Self::OpenFile { path, source } => {
                write!(f, "cannot open log file {}: {source}", path.display())
            }
            Self::Format(s) => write!(f, "format error: {s}"),
            Self::ConfigParse(e) => write!(f, "parse error: {e}"),
            Self::InvalidLevel(level) => write!(f, "invalid log level: {level}"),
            Self::InvalidMode(mode) => write!(f, "invalid routing mode: {mode}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) | Self::CreateDir { source: e, .. } | Self::OpenFile { source: e, .. } => {
                Some(e)
            }
            Self::ConfigParse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Self::ConfigParse(e)
    }
}
