//! TOML description of a route: which mode, where the files go, and the
//! logger's threshold.
//!
//! ```toml
//! mode = "level"
//! path = "~/logs"
//! name = "svc"
//! level = "debug"
//! ```

use crate::internal;
use crate::level::Level;
use crate::router::{DateLog, LevelLog, Route};
use chrono::Local;
use serde::Deserialize;
use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

/// Which router a config builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Console plus one combined file.
    #[default]
    Date,
    /// Catch-all file plus one file per severity.
    Level,
}

impl std::str::FromStr for Mode {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "date" => Ok(Self::Date),
            "level" => Ok(Self::Level),
            _ => Err(crate::Error::InvalidMode(s.to_string())),
        }
    }
}

/// An empty file is a valid config — `#[serde(default)]` fills every field.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub mode: Mode,
    /// Base directory; a leading `~` is expanded.
    pub path: String,
    /// Literal date directory. When unset, today's date rendered with `date_format`.
    pub date: Option<String>,
    /// strftime layout for the generated date directory.
    pub date_format: String,
    /// File name stem, and the default console tag.
    pub name: String,
    /// Minimum level, as a string for TOML ergonomics.
    pub level: String,
    /// Console tag in date mode; falls back to `name`.
    pub tag: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        let path = directories::ProjectDirs::from("", "", "routelog").map_or_else(
            || "logs".to_string(),
            |dirs| {
                dirs.state_dir()
                    .unwrap_or_else(|| dirs.data_dir())
                    .join("logs")
                    .to_string_lossy()
                    .into_owned()
            },
        );

        Self {
            mode: Mode::Date,
            path,
            date: None,
            date_format: "%Y-%m-%d".to_string(),
            name: "routelog".to_string(),
            level: "info".to_string(),
            tag: None,
        }
    }
}

impl Config {
    /// Loads `routelog.toml` from the user's config directory, or defaults if it doesn't exist.
    ///
    /// # Errors
    /// Fails if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self, crate::Error> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => {
                internal::debug("CONFIG", "No config directory, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// A missing file yields defaults, so a fresh install needs no config.
    ///
    /// # Errors
    /// Fails if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        if !path.exists() {
            internal::debug(
                "CONFIG",
                &format!("Config file not found, using defaults: {}", path.display()),
            );
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config = Self::parse(&content)?;
        internal::info("CONFIG", &format!("Config loaded from {}", path.display()));
        Ok(config)
    }

    /// # Errors
    /// TOML syntax errors or fields of the wrong type.
    pub fn parse(content: &str) -> Result<Self, crate::Error> {
        Ok(toml::from_str(content)?)
    }

    /// `<config dir>/routelog/routelog.toml`
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        directories::BaseDirs::new()
            .map(|dirs| dirs.config_dir().join("routelog").join("routelog.toml"))
    }

    /// # Errors
    /// [`crate::Error::InvalidLevel`] for an unknown level string.
    pub fn parse_level(&self) -> Result<Level, crate::Error> {
        self.level
            .parse()
            .map_err(|_| crate::Error::InvalidLevel(self.level.clone()))
    }

    /// Base directory with `~` expanded.
    #[must_use]
    pub fn resolved_path(&self) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&self.path).as_ref())
    }

    /// The configured date, or today in local time.
    ///
    /// # Errors
    /// [`crate::Error::Format`] when `date_format` is not a valid strftime layout.
    pub fn resolved_date(&self) -> Result<String, crate::Error> {
        if let Some(date) = &self.date {
            return Ok(date.clone());
        }
        let mut date = String::new();
        write!(date, "{}", Local::now().format(&self.date_format)).map_err(|_| {
            crate::Error::Format(format!("invalid date format: {}", self.date_format))
        })?;
        Ok(date)
    }

    /// Builds the route this config describes. Nothing touches the filesystem yet.
    ///
    /// # Errors
    /// [`crate::Error::InvalidLevel`] for an unknown level string,
    /// [`crate::Error::Format`] for an invalid `date_format`.
    pub fn route(&self) -> Result<Route, crate::Error> {
        let level = self.parse_level()?;
        let path = self.resolved_path();
        let date = self.resolved_date()?;

        let route = match self.mode {
            Mode::Date => {
                let mut route = DateLog::new(path, date, &self.name).level(level);
                if let Some(tag) = &self.tag {
                    route = route.tag(tag);
                }
                Route::Date(route)
            }
            Mode::Level => Route::Level(LevelLog::new(path, date, &self.name).level(level)),
        };
        Ok(route)
    }
}
