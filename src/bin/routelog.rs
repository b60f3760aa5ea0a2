//! Emits log records through a configured route — handy for checking a
//! deployment's log layout without touching the host program.
//!
//! Usage:
//!   routelog [OPTIONS] log <level> <msg>...   Emit one record
//!   routelog [OPTIONS] demo                   Emit one record per routed level
//!
//! Flags override the config file, which defaults to
//! `~/.config/routelog/routelog.toml`.

use clap::{Parser, Subcommand};
use routelog::config::{Config, Mode};
use routelog::{Level, internal};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "routelog", version, about = "Route log records to console and files")]
struct Cli {
    /// Config file (TOML)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Routing mode: date or level
    #[arg(long)]
    mode: Option<Mode>,
    /// Base log directory
    #[arg(long, value_name = "DIR")]
    path: Option<String>,
    /// Date directory name (default: today)
    #[arg(long)]
    date: Option<String>,
    /// Log file name stem
    #[arg(long)]
    name: Option<String>,
    /// Minimum level the logger accepts
    #[arg(long)]
    level: Option<Level>,
    /// Console tag (date mode)
    #[arg(long)]
    tag: Option<String>,
    /// Print setup diagnostics on stderr
    #[arg(short, long)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Emit one record.
    Log {
        /// Record level
        level: Level,
        /// Message text
        #[arg(required = true)]
        message: Vec<String>,
    },
    /// Emit one record at each of error, warn, info, and debug.
    Demo,
}

impl Cli {
    fn config(&self) -> Result<Config, routelog::Error> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };

        if let Some(mode) = self.mode {
            config.mode = mode;
        }
        if let Some(path) = &self.path {
            config.path.clone_from(path);
        }
        if let Some(date) = &self.date {
            config.date = Some(date.clone());
        }
        if let Some(name) = &self.name {
            config.name.clone_from(name);
        }
        if let Some(level) = self.level {
            config.level = level.to_string();
        }
        if let Some(tag) = &self.tag {
            config.tag = Some(tag.clone());
        }
        Ok(config)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if cli.verbose {
        internal::init(Level::Debug);
    }

    let route = match cli.config().and_then(|config| config.route()) {
        Ok(route) => route,
        Err(e) => {
            internal::error("CLI", &format!("Invalid configuration: {e}"));
            return ExitCode::FAILURE;
        }
    };

    // A destination that can't be set up ends the process here.
    let logger = route.init();

    let result = match &cli.command {
        Command::Log { level, message } => logger.try_log(*level, message.join(" ")),
        Command::Demo => [
            (Level::Error, "error record"),
            (Level::Warn, "warn record"),
            (Level::Info, "info record"),
            (Level::Debug, "debug record"),
        ]
        .into_iter()
        .try_for_each(|(level, msg)| logger.try_log(level, msg)),
    };

    match result.and_then(|()| logger.flush()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            internal::error("CLI", &format!("Logging failed: {e}"));
            ExitCode::FAILURE
        }
    }
}
