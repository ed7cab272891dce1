//! Estimation benchmarks for farecast.
//!
//! Run with: `cargo bench --package farecast-bench`

use chrono::Utc;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use farecast_bench::{history_forms, workloads};
use farecast_lib::{
    EstimationSession, FareEstimator, HistoryRecord, HistoryStore, NoLatency, RecordIdGenerator,
    validate,
};
use std::hint::black_box;

fn validate_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate");

    for workload in workloads() {
        group.bench_with_input(
            BenchmarkId::from_parameter(workload.name),
            &workload.form,
            |b, form| b.iter(|| validate(black_box(form))),
        );
    }

    group.finish();
}

fn estimate_benchmark(c: &mut Criterion) {
    let estimator = FareEstimator::global();
    let mut group = c.benchmark_group("estimate");

    for workload in workloads() {
        let Ok(trip) = validate(&workload.form) else {
            continue;
        };
        group.bench_with_input(BenchmarkId::from_parameter(workload.name), &trip, |b, trip| {
            b.iter(|| estimator.estimate(black_box(trip)));
        });
    }

    group.finish();
}

fn history_benchmark(c: &mut Criterion) {
    let estimator = FareEstimator::global();
    let ids = RecordIdGenerator::new();
    let trips: Vec<_> = history_forms(64)
        .iter()
        .filter_map(|form| validate(form).ok())
        .collect();

    let mut group = c.benchmark_group("history");
    group.throughput(Throughput::Elements(trips.len() as u64));
    group.bench_function("record_estimate", |b| {
        b.iter(|| {
            let mut store = HistoryStore::new();
            for trip in &trips {
                if let Ok(estimate) = estimator.estimate(trip) {
                    let record = HistoryRecord::new(ids.next_id(), trip, estimate.fare, Utc::now());
                    store.record_estimate(record);
                }
            }
            store
        });
    });
    group.finish();
}

fn session_benchmark(c: &mut Criterion) {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .expect("failed to build tokio runtime");
    let session = EstimationSession::with_latency(FareEstimator::global().clone(), NoLatency);

    let mut group = c.benchmark_group("session");
    for workload in workloads() {
        group.bench_with_input(
            BenchmarkId::from_parameter(workload.name),
            &workload.form,
            |b, form| b.iter(|| runtime.block_on(session.submit(black_box(form)))),
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    validate_benchmark,
    estimate_benchmark,
    history_benchmark,
    session_benchmark
);
criterion_main!(benches);
