use std::hint::black_box;

use chrono::NaiveDate;
use criterion::{criterion_group, criterion_main, Criterion};
use taqwim_calendar::{gregorian_to_hijri, hijri_to_gregorian};

fn bench_conversion(c: &mut Criterion) {
    let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

    c.bench_function("gregorian_to_hijri", |b| {
        b.iter(|| gregorian_to_hijri(black_box(date)))
    });

    c.bench_function("hijri_to_gregorian", |b| {
        b.iter(|| hijri_to_gregorian(black_box(1445), black_box(6), black_box(19)))
    });

    c.bench_function("gregorian_to_hijri/one_year", |b| {
        b.iter(|| {
            date.iter_days()
                .take(366)
                .map(gregorian_to_hijri)
                .filter(|h| h.day == 1)
                .count()
        })
    });
}

criterion_group!(benches, bench_conversion);
criterion_main!(benches);
