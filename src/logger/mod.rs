//! The logging facility the hooks attach to. It has no output of its own:
//! a logger with no hooks silently discards every record.

mod builder;

pub use builder::LoggerBuilder;

use crate::hook::Hook;
use crate::internal;
use crate::level::Level;
use crate::record::{CallSite, Record};
use std::fmt::Display;
use std::process;

/// Immutable while shared — hooks and their sinks handle concurrent dispatch themselves.
pub struct Logger {
    min_level: Level,
    report_caller: bool,
    hooks: Vec<Box<dyn Hook>>,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Info threshold, no call-site capture, no hooks.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            min_level: Level::Info,
            report_caller: false,
            hooks: Vec::new(),
        }
    }

    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Hooks fire in registration order.
    pub fn add_hook(&mut self, hook: impl Hook + 'static) {
        self.hooks.push(Box::new(hook));
    }

    pub const fn set_level(&mut self, level: Level) {
        self.min_level = level;
    }

    /// Records carry the emitting file and line when enabled.
    pub const fn set_report_caller(&mut self, enabled: bool) {
        self.report_caller = enabled;
    }

    /// Emits a record and returns the first hook failure, after every hook has run.
    ///
    /// Each failure is also reported on stderr, as [`Logger::log`] does.
    ///
    /// # Errors
    /// The first error returned by any hook.
    #[track_caller]
    pub fn try_log(&self, level: Level, msg: impl Display) -> Result<(), crate::Error> {
        if level < self.min_level {
            return Ok(());
        }

        let mut record = Record::new(level, msg.to_string());
        if self.report_caller {
            record.caller = Some(CallSite::here());
        }

        self.dispatch(&record)
    }

    /// Core dispatch — every matching hook, in order, on this thread.
    ///
    /// # Errors
    /// The first error returned by any hook.
    pub fn dispatch(&self, record: &Record) -> Result<(), crate::Error> {
        let mut result = Ok(());
        for hook in &self.hooks {
            if !hook.levels().contains(&record.level) {
                continue;
            }
            if let Err(e) = hook.fire(record) {
                internal::error("HOOK", &format!("Failed to fire hook: {e}"));
                if result.is_ok() {
                    result = Err(e);
                }
            }
        }
        result
    }

    /// Hook failures are reported on stderr and otherwise ignored.
    #[track_caller]
    pub fn log(&self, level: Level, msg: impl Display) {
        let _ = self.try_log(level, msg);
    }

    #[track_caller]
    pub fn trace(&self, msg: impl Display) {
        self.log(Level::Trace, msg);
    }

    #[track_caller]
    pub fn debug(&self, msg: impl Display) {
        self.log(Level::Debug, msg);
    }

    #[track_caller]
    pub fn info(&self, msg: impl Display) {
        self.log(Level::Info, msg);
    }

    #[track_caller]
    pub fn warn(&self, msg: impl Display) {
        self.log(Level::Warn, msg);
    }

    #[track_caller]
    pub fn error(&self, msg: impl Display) {
        self.log(Level::Error, msg);
    }

    /// Logs at `Fatal`, flushes every hook, then exits with status 1.
    #[track_caller]
    pub fn fatal(&self, msg: impl Display) -> ! {
        self.log(Level::Fatal, msg);
        let _ = self.flush();
        process::exit(1)
    }

    /// # Errors
    /// Returns the first I/O error encountered across all hooks.
    pub fn flush(&self) -> Result<(), crate::Error> {
        for hook in &self.hooks {
            hook.flush()?;
        }
        Ok(())
    }

    #[must_use]
    pub const fn min_level(&self) -> Level {
        self.min_level
    }

    #[must_use]
    pub const fn reports_caller(&self) -> bool {
        self.report_caller
    }

    #[must_use]
    pub fn hook_count(&self) -> usize {
        self.hooks.len()
    }
}
