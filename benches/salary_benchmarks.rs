//! Performance benchmarks for the attendance payroll engine.
//!
//! Covers salary reduction over growing record lists, a full-year load
//! through the in-memory store, and monthly statistics across a roster.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use std::sync::Arc;

use chrono::{Duration, NaiveDate};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use attendance_payroll::aggregation::PayrollService;
use attendance_payroll::calculation::compute_salary;
use attendance_payroll::models::{AttendanceRecord, WageConfig, Worker};
use attendance_payroll::store::MemoryStore;

/// Creates `count` consecutive days of attendance starting 2024-01-01.
fn create_records(worker_id: i64, count: usize) -> Vec<AttendanceRecord> {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    (0..count)
        .map(|offset| {
            AttendanceRecord::new(
                worker_id,
                start + Duration::days(offset as i64),
                true,
                offset % 5 != 0,
                Decimal::new((offset % 4) as i64 * 5, 1),
            )
        })
        .collect()
}

/// Creates a store with `workers` workers, each with a full year of attendance.
fn create_store(workers: usize) -> Arc<MemoryStore> {
    let store = MemoryStore::new();
    for index in 0..workers {
        let id = store
            .insert_worker(Worker::new(
                format!("Worker {index:03}"),
                Decimal::new(180 + index as i64, 0),
                Decimal::new(25, 0),
            ))
            .unwrap();
        for record in create_records(id, 366) {
            store.upsert_attendance(record).unwrap();
        }
    }
    Arc::new(store)
}

fn bench_compute_salary(c: &mut Criterion) {
    let wage = WageConfig::new(Decimal::new(200, 0), Decimal::new(25, 0));
    let mut group = c.benchmark_group("compute_salary");

    for count in [31usize, 366, 5000] {
        let records = create_records(1, count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &records, |b, records| {
            b.iter(|| compute_salary(black_box(&wage), black_box(records)))
        });
    }

    group.finish();
}

fn bench_load_year(c: &mut Criterion) {
    let service = PayrollService::new(create_store(1));

    c.bench_function("load_year", |b| {
        b.iter(|| service.load_year(black_box(1), black_box("2024")).unwrap())
    });
}

fn bench_monthly_statistics(c: &mut Criterion) {
    let service = PayrollService::new(create_store(50));
    let mut group = c.benchmark_group("monthly_statistics");
    group.sample_size(20);

    group.bench_function("roster_50", |b| {
        b.iter(|| service.monthly_statistics(black_box("2024-03")).unwrap())
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_compute_salary,
    bench_load_year,
    bench_monthly_statistics
);
criterion_main!(benches);
