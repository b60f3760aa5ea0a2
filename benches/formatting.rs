use chrono::{Local, TimeZone};
use criterion::{Criterion, criterion_group, criterion_main};
use routelog::{
    CallSite, ConsoleFormatter, FileFormatter, Formatter, Hook, Level, LevelHook, LevelSinks,
    MemorySink, Record,
};
use std::hint::black_box;

fn sample_record() -> Record {
    let timestamp = Local
        .with_ymd_and_hms(2025, 1, 15, 14, 30, 0)
        .single()
        .unwrap_or_else(Local::now);
    Record::new(Level::Info, "Application started successfully")
        .with_timestamp(timestamp)
        .with_caller(CallSite::new("src/main.rs", 27))
}

fn bench_formatters(c: &mut Criterion) {
    let mut group = c.benchmark_group("Formatter::format");
    let record = sample_record();

    let console = ConsoleFormatter::new("svc");
    group.bench_function("console", |b| {
        b.iter(|| console.format(black_box(&record)));
    });

    let file = FileFormatter::new();
    group.bench_function("file", |b| {
        b.iter(|| file.format(black_box(&record)));
    });

    group.finish();
}

fn bench_level_fanout(c: &mut Criterion) {
    let hook = LevelHook::new(
        MemorySink::new(),
        LevelSinks::new(
            MemorySink::new(),
            MemorySink::new(),
            MemorySink::new(),
            MemorySink::new(),
        ),
    );
    let record = sample_record();

    c.bench_function("LevelHook::fire", |b| {
        b.iter(|| hook.fire(black_box(&record)));
    });
}

criterion_group!(benches, bench_formatters, bench_level_fanout);
criterion_main!(benches);
