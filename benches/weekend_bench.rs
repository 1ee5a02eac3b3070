// Benchmark for weekend scanning
// Measures the day-by-day scan over ranges of growing length

use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use weekday_range_picker::services::range::{RangeEvent, RangeState};
use weekday_range_picker::services::weekend::weekend_dates;

fn bench_weekend_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("weekend_scan");
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

    for days in [7i64, 30, 365, 3650].iter() {
        let end = start + Duration::days(*days - 1);
        group.bench_with_input(BenchmarkId::from_parameter(days), &end, |b, &end| {
            b.iter(|| weekend_dates(black_box(start), black_box(end)));
        });
    }

    group.finish();
}

fn bench_last_days_shortcut(c: &mut Criterion) {
    let mut group = c.benchmark_group("last_days_shortcut");
    let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
    let state = RangeState::new(2024);

    for days in [7u32, 30].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(days), days, |b, &days| {
            b.iter(|| state.apply(black_box(RangeEvent::LastDays { days, today })));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_weekend_scan, bench_last_days_shortcut);
criterion_main!(benches);
