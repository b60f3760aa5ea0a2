//! Severity levels — ordering gates the logger, exact values pick the per-level file.

use std::fmt;
use std::str::FromStr;

/// Derives `Ord` so the logger can compare a record's level against the configured minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Level {
    /// High-volume instrumentation; only ever reaches the catch-all file.
    Trace = 0,
    /// Diagnostics that are too noisy for normal operation.
    Debug = 1,
    /// Normal operational milestones.
    #[default]
    Info = 2,
    /// Non-fatal anomalies that may need attention.
    Warn = 3,
    /// Failures that prevent an operation from completing.
    Error = 4,
    /// Logged right before the process terminates.
    Fatal = 5,
}

impl Level {
    /// Every level, lowest first. Hooks declare this as their level set.
    pub const ALL: [Self; 6] = [
        Self::Trace,
        Self::Debug,
        Self::Info,
        Self::Warn,
        Self::Error,
        Self::Fatal,
    ];

    /// Lowercase because config files and CLI args use lowercase level strings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
            Self::Fatal => "fatal",
        }
    }

    /// Name shown in rendered log lines. Differs from [`Level::as_str`] only
    /// for Warn, which renders as `warning`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Warn => "warning",
            _ => self.as_str(),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by `FromStr` so callers can distinguish "unknown level" from other parse failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(String);

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level: '{}'", self.0)
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" | "err" => Ok(Self::Error),
            "fatal" => Ok(Self::Fatal),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}
