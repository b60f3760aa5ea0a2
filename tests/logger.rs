//! Tests for logger functionality.

use routelog::{
    ConsoleHook, Error, FileFormatter, FileHook, Hook, Level, Logger, MemorySink, Record, Sink,
};
use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

struct FailingSink;

impl Sink for FailingSink {
    fn write(&self, _bytes: &[u8]) -> io::Result<()> {
        Err(io::Error::other("broken pipe"))
    }

    fn flush(&self) -> io::Result<()> {
        Ok(())
    }
}

/// Counts invocations and only declares the Error level.
#[derive(Clone, Default)]
struct CountingHook {
    fired: Arc<AtomicUsize>,
}

impl Hook for CountingHook {
    fn levels(&self) -> &[Level] {
        &[Level::Error]
    }

    fn fire(&self, _record: &Record) -> Result<(), Error> {
        self.fired.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

fn file_logger(sink: &MemorySink) -> Logger {
    Logger::builder()
        .level(Level::Trace)
        .hook(FileHook::new(sink.clone()))
        .build()
}

#[test]
fn builder_default() {
    let logger = Logger::builder().build();
    assert_eq!(logger.min_level(), Level::Info);
    assert!(!logger.reports_caller());
    assert_eq!(logger.hook_count(), 0);
}

#[test]
fn builder_with_hooks() {
    let logger = Logger::builder()
        .level(Level::Debug)
        .report_caller(true)
        .hook(ConsoleHook::new("t"))
        .hook(FileHook::new(MemorySink::new()))
        .build();
    assert_eq!(logger.min_level(), Level::Debug);
    assert!(logger.reports_caller());
    assert_eq!(logger.hook_count(), 2);
}

#[test]
fn logger_without_hooks_discards_silently() {
    let logger = Logger::new();
    assert!(logger.try_log(Level::Error, "nowhere").is_ok());
    logger.info("also nowhere");
}

#[test]
fn records_below_threshold_reach_no_hook() {
    let sink = MemorySink::new();
    let mut logger = file_logger(&sink);
    logger.set_level(Level::Warn);

    logger.info("filtered");
    logger.debug("filtered");
    logger.warn("kept");
    logger.error("kept");

    let content = sink.contents();
    assert_eq!(content.lines().count(), 2);
    assert!(!content.contains("filtered"));
}

#[test]
fn add_hook_after_build() {
    let sink = MemorySink::new();
    let mut logger = Logger::new();
    logger.add_hook(FileHook::new(sink.clone()));

    logger.info("late hook");

    assert!(sink.contents().contains("late hook"));
}

#[test]
fn hooks_fire_in_registration_order() {
    let sink = MemorySink::new();
    let logger = Logger::builder()
        .hook(FileHook::with_formatter(FileFormatter::new(), sink.clone()))
        .hook(ConsoleHook::with_parts(
            routelog::ConsoleFormatter::new("second"),
            sink.clone(),
        ))
        .build();

    logger.info("ordered");

    let content = sink.contents();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("[INFO] "));
    assert!(lines[1].starts_with("[second] "));
}

#[test]
fn hook_levels_filter_dispatch() {
    let hook = CountingHook::default();
    let logger = Logger::builder()
        .level(Level::Trace)
        .hook(hook.clone())
        .build();

    logger.warn("skipped");
    logger.error("counted");

    assert_eq!(hook.fired.load(Ordering::SeqCst), 1);
}

#[test]
fn failing_hook_does_not_stop_later_hooks() {
    let sink = MemorySink::new();
    let logger = Logger::builder()
        .hook(FileHook::new(FailingSink))
        .hook(FileHook::new(sink.clone()))
        .build();

    let result = logger.try_log(Level::Info, "survives");

    assert!(matches!(result, Err(Error::Io(_))));
    assert!(sink.contents().contains("survives"));
}

#[test]
fn caller_capture_points_at_emitting_line() {
    let sink = MemorySink::new();
    let mut logger = file_logger(&sink);
    logger.set_report_caller(true);

    let line = line!() + 1;
    logger.info("where am I");

    assert!(
        sink.contents().contains(&format!("[logger.rs:{line}]")),
        "{}",
        sink.contents()
    );
}

#[test]
fn caller_capture_disabled_renders_empty_location() {
    let sink = MemorySink::new();
    let logger = file_logger(&sink);

    logger.info("anonymous");

    assert!(sink.contents().contains("[:0] anonymous"));
}

#[test]
fn dispatch_skips_threshold_check() {
    let hook = CountingHook::default();
    let logger = Logger::builder()
        .level(Level::Fatal)
        .hook(hook.clone())
        .build();

    logger.error("below threshold");
    assert_eq!(hook.fired.load(Ordering::SeqCst), 0);

    logger.dispatch(&Record::new(Level::Error, "direct")).unwrap();
    assert_eq!(hook.fired.load(Ordering::SeqCst), 1);
}

#[test]
fn level_helpers_emit_matching_levels() {
    let sink = MemorySink::new();
    let logger = file_logger(&sink);

    logger.trace("t");
    logger.debug("d");
    logger.info("i");
    logger.warn("w");
    logger.error("e");

    let tags: Vec<String> = sink
        .contents()
        .lines()
        .map(|line| line.split(' ').next().unwrap_or_default().to_string())
        .collect();
    assert_eq!(tags, ["[TRACE]", "[DEBUG]", "[INFO]", "[WARNING]", "[ERROR]"]);
}

#[test]
fn flush_reaches_every_hook() {
    let logger = Logger::builder()
        .hook(FileHook::new(MemorySink::new()))
        .build();
    assert!(logger.flush().is_ok());
}
