//! Analysis and transformation pipeline benchmarks.
//!
//! Measures end-to-end performance of quality analysis, suggestion
//! generation, and transformation execution on synthetic dirty datasets.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use scour::{QualityAnalyzer, Row, TransformEngine, Transformation, Value};

/// Generate a dirty dataset: duplicates, missing cells, and outliers.
fn generate_dirty_data(rows: usize) -> Vec<Row> {
    (0..rows)
        .map(|i| {
            // Every 20th row duplicates its predecessor
            let i = if i % 20 == 19 { i - 1 } else { i };

            let sample = Value::from(format!("S{:05}", i));
            let age = match i % 17 {
                0 => Value::Missing,
                1 => Value::from("N/A"),
                _ => Value::from(25 + (i % 40) as i64),
            };
            let weight = if i % 50 == 0 {
                Value::from(5000.0)
            } else {
                Value::from(55.0 + (i % 30) as f64 * 0.7)
            };
            let site = Value::from(["north", "south", "east", "west"][i % 4]);

            [
                ("sample".to_string(), sample),
                ("age".to_string(), age),
                ("weight".to_string(), weight),
                ("site".to_string(), site),
            ]
            .into_iter()
            .collect()
        })
        .collect()
}

/// Benchmark the quality analyzer alone.
fn bench_analyze(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze");

    for rows in [100, 1_000, 10_000].iter() {
        let data = generate_dirty_data(*rows);
        group.throughput(Throughput::Elements(*rows as u64));
        group.bench_with_input(BenchmarkId::new("dirty_rows", rows), &data, |b, data| {
            let analyzer = QualityAnalyzer::new();
            b.iter(|| black_box(analyzer.analyze(data)));
        });
    }

    group.finish();
}

/// Benchmark suggestion generation from a precomputed report.
fn bench_suggest(c: &mut Criterion) {
    let mut group = c.benchmark_group("suggest");

    for rows in [1_000, 10_000].iter() {
        let data = generate_dirty_data(*rows);
        let report = QualityAnalyzer::new().analyze(&data);
        group.throughput(Throughput::Elements(*rows as u64));
        group.bench_with_input(BenchmarkId::new("dirty_rows", rows), &data, |b, data| {
            let engine = TransformEngine::new();
            b.iter(|| black_box(engine.suggest(&report, data)));
        });
    }

    group.finish();
}

/// Benchmark executing a full suggested batch.
fn bench_execute(c: &mut Criterion) {
    let mut group = c.benchmark_group("execute");

    for rows in [1_000, 10_000].iter() {
        let data = generate_dirty_data(*rows);
        let report = QualityAnalyzer::new().analyze(&data);
        let selected: Vec<Transformation> = TransformEngine::new()
            .suggest(&report, &data)
            .into_iter()
            .map(|s| s.with_applied(true))
            .collect();

        group.throughput(Throughput::Elements(*rows as u64));
        group.bench_with_input(BenchmarkId::new("dirty_rows", rows), &data, |b, data| {
            let engine = TransformEngine::new();
            b.iter(|| black_box(engine.execute(data, &selected)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_analyze, bench_suggest, bench_execute);
criterion_main!(benches);
