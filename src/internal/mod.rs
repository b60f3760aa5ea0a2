//! routelog's own diagnostics — setup tracing and the error path for hooks
//! that fail at runtime. Written straight to stderr and never through a
//! `Logger`, so a broken hook cannot recurse into itself.
//!
//! Uses `OnceLock` so the threshold is fixed exactly once, even if the CLI,
//! library callers, and tests race to set it.

use crate::level::Level;
use crate::sink::{ConsoleSink, Sink};
use std::sync::OnceLock;

/// Environment variable holding the diagnostics threshold (e.g. `debug`).
pub const ENV_LEVEL: &str = "ROUTELOG_LOG";

static INTERNAL_LEVEL: OnceLock<Level> = OnceLock::new();

/// Fixes the threshold explicitly. Only the first call, or the first
/// diagnostic emitted, takes effect.
pub fn init(level: Level) {
    let was_init = INTERNAL_LEVEL.get().is_some();
    INTERNAL_LEVEL.get_or_init(|| level);
    if !was_init {
        debug("INTERNAL", &format!("Diagnostics level: {level}"));
    }
}

/// Warn unless `ROUTELOG_LOG` says otherwise; hook failures stay visible by default.
fn threshold() -> Level {
    *INTERNAL_LEVEL.get_or_init(|| {
        std::env::var(ENV_LEVEL)
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(Level::Warn)
    })
}

/// Whether a diagnostic at `level` would be written.
#[must_use]
pub fn enabled(level: Level) -> bool {
    level >= threshold()
}

fn log(level: Level, scope: &str, msg: &str) {
    if !enabled(level) {
        return;
    }
    let line = format!(
        "routelog: [{}] {scope}: {msg}\n",
        level.as_str().to_uppercase()
    );
    // Nowhere left to report a failing stderr.
    let _ = ConsoleSink::stderr().write(line.as_bytes());
}

/// Setup steps: directories created, files opened.
pub fn debug(scope: &str, msg: &str) {
    log(Level::Debug, scope, msg);
}

pub fn info(scope: &str, msg: &str) {
    log(Level::Info, scope, msg);
}

pub fn warn(scope: &str, msg: &str) {
    log(Level::Warn, scope, msg);
}

/// Hook failures and fatal setup causes.
pub fn error(scope: &str, msg: &str) {
    log(Level::Error, scope, msg);
}
