use codspeed_criterion_compat::{Criterion, criterion_group, criterion_main};
use oxdaytime::{Duration, TimeOfDay, TimeRange, normalize};
use std::hint::black_box;

fn normalize_triples(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");
    group.bench_function("normalize unbounded", |b| {
        b.iter(|| {
            for value in -500..500 {
                black_box(normalize(black_box(value), value * 7, value * 13, false));
            }
        })
    });
    group.bench_function("normalize wrapping", |b| {
        b.iter(|| {
            for value in -500..500 {
                black_box(normalize(black_box(value), value * 7, value * 13, true));
            }
        })
    });
}

fn time_arithmetic(c: &mut Criterion) {
    let time = TimeOfDay::new(13, 37, 42);
    let mut group = c.benchmark_group("time of day");
    group.bench_function("adding rolling over", |b| {
        b.iter(|| {
            for seconds in (-100_000..100_000).step_by(997) {
                black_box(time.adding(black_box(seconds), true));
            }
        })
    });
    group.bench_function("subtracting rolling over", |b| {
        b.iter(|| {
            for seconds in (-100_000..100_000).step_by(997) {
                black_box(time.subtracting(black_box(seconds), true));
            }
        })
    });
    group.bench_function("duration since earlier", |b| {
        let earlier = TimeOfDay::new(21, 5, 0);
        b.iter(|| black_box(time.duration_since_earlier(black_box(&earlier))))
    });
    group.bench_function("duration sum", |b| {
        let durations: Vec<_> = (0..1000).map(|i| Duration::new(i, i * 3, -i)).collect();
        b.iter(|| black_box(durations.iter().copied().sum::<Duration>()))
    });
}

fn range_split(c: &mut Criterion) {
    let day = TimeRange::new(TimeOfDay::new(6, 0, 0), TimeOfDay::new(5, 59, 0));
    let mut group = c.benchmark_group("time range");
    group.bench_function("split a day by 5 minutes", |b| {
        b.iter(|| black_box(day.split(black_box(5))))
    });
    group.bench_function("overlaps", |b| {
        let other = TimeRange::new(TimeOfDay::new(22, 0, 0), TimeOfDay::new(1, 0, 0));
        b.iter(|| black_box(day.overlaps(black_box(&other))))
    });
}

criterion_group!(clock, normalize_triples, time_arithmetic, range_split);
criterion_main!(clock);
