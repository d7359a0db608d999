//! Criterion benchmarks for schedule generation.
//!
//! Measures the monthly walk over reporting windows of increasing length.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rent_core::{RateChangeTiming, ScheduleSettings};
use rent_schedule::{RentScheduler, ScheduleRequestBuilder};
use rent_time::Date;

fn bench_schedule(c: &mut Criterion) {
    let mut group = c.benchmark_group("schedule");

    for years in [1u16, 10, 50] {
        let request = ScheduleRequestBuilder::new(
            1200.0,
            Date::from_ymd(2001, 3, 17).unwrap(),
            Date::from_ymd(2000, 1, 1).unwrap(),
            Date::from_ymd(2000 + years - 1, 12, 31).unwrap(),
        )
        .with_billing_day(31)
        .with_rate_change(12, 0.03)
        .build()
        .unwrap();

        let same = RentScheduler::default();
        group.bench_with_input(BenchmarkId::new("same_period", years), &request, |b, req| {
            b.iter(|| same.schedule(black_box(req)));
        });

        let deferred = RentScheduler::new(
            ScheduleSettings::default().with_rate_change_timing(RateChangeTiming::NextPeriod),
        );
        group.bench_with_input(BenchmarkId::new("next_period", years), &request, |b, req| {
            b.iter(|| deferred.schedule(black_box(req)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_schedule);
criterion_main!(benches);
