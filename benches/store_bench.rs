//! Performance benchmarks for classification and store operations.
//!
//! Run with: cargo bench
//!
//! These benchmarks establish baseline performance metrics for:
//! - Classifying notes of various lengths
//! - Saving entries and aggregating at various store sizes

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use mindcaps::db::aggregate::{aggregate_counts, GroupBy};
use mindcaps::db::Database;
use mindcaps::journal_core::MoodSet;
use mindcaps::ops::{save_mood_entry, FixedChoice, MoodInput};
use mindcaps::sentiment::classify;
use tempfile::TempDir;

const SAMPLE: &str = "Woke up tired but the walk was great and I feel calm now. ";

/// Benchmark classification with various note lengths.
fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");

    for repeats in [1usize, 20, 500] {
        let note = SAMPLE.repeat(repeats);
        group.throughput(Throughput::Bytes(note.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(repeats), &note, |b, note| {
            b.iter(|| black_box(classify(black_box(note))));
        });
    }

    group.finish();
}

fn populated_db(temp: &TempDir, entries: usize) -> Database {
    let db = Database::open(&temp.path().join("bench.db")).expect("open database");
    db.initialize_schema().expect("initialize schema");
    let moods = MoodSet::default();
    for i in 0..entries {
        let input = MoodInput {
            mood: Some(moods.labels()[i % moods.labels().len()].clone()),
            intensity: (i % 10 + 1) as i64,
            note: SAMPLE.to_string(),
        };
        save_mood_entry(&db, &moods, &input, &mut FixedChoice(i)).expect("save entry");
    }
    db
}

/// Benchmark a single save against a file-backed store.
fn bench_save(c: &mut Criterion) {
    let temp = TempDir::new().expect("create temp dir");
    let db = populated_db(&temp, 0);
    let moods = MoodSet::default();
    let input = MoodInput {
        mood: Some("Calm".to_string()),
        intensity: 6,
        note: SAMPLE.to_string(),
    };

    c.bench_function("save_mood_entry", |b| {
        b.iter(|| {
            save_mood_entry(&db, &moods, black_box(&input), &mut FixedChoice(0)).expect("save entry")
        });
    });
}

/// Benchmark aggregation at various store sizes.
fn bench_aggregate(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate_by_mood");
    group.sample_size(20);

    for size in [100usize, 1_000] {
        let temp = TempDir::new().expect("create temp dir");
        let db = populated_db(&temp, size);
        let conn = db.get_conn().expect("get connection");

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| aggregate_counts(&conn, black_box(GroupBy::Mood)).expect("aggregate"));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_classify, bench_save, bench_aggregate);
criterion_main!(benches);
