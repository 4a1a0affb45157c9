//! Performance benchmarks for relative time formatting

use chrono::{Duration, NaiveDate, NaiveDateTime};
use criterion::{criterion_group, criterion_main, Criterion};
use relfmt_core::prelude::*;
use std::hint::black_box;

fn noon() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, 15)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

fn bench_classify(c: &mut Criterion) {
    let now = noon();
    let pasts: Vec<NaiveDateTime> = [0, 5, 90, 60 * 20, 60 * 30, 60 * 24 * 12, 60 * 24 * 400]
        .iter()
        .map(|minutes| now - Duration::minutes(*minutes))
        .collect();

    c.bench_function("classify_mixed", |b| {
        b.iter(|| {
            for past in &pasts {
                black_box(RelativeTime::classify(black_box(*past), black_box(now)));
            }
        });
    });
}

fn bench_format(c: &mut Criterion) {
    let now = noon();
    let formatter = RelativeTimeFormatter::new(SystemClock, TimeFormat::TwelveHour);
    let yesterday = now - Duration::hours(20);

    c.bench_function("format_between_yesterday", |b| {
        b.iter(|| {
            let text = formatter.format_between(black_box(yesterday), black_box(now));
            black_box(text);
        });
    });

    c.bench_function("format_between_weeks", |b| {
        let past = now - Duration::days(17);
        b.iter(|| {
            let text = formatter.format_between(black_box(past), black_box(now));
            black_box(text);
        });
    });
}

fn bench_parse_timestamp(c: &mut Criterion) {
    c.bench_function("parse_timestamp_rfc3339", |b| {
        b.iter(|| {
            let parsed = parse_timestamp(black_box("2024-06-15T12:00:00Z")).unwrap();
            black_box(parsed);
        });
    });

    c.bench_function("parse_timestamp_local", |b| {
        b.iter(|| {
            let parsed = parse_timestamp(black_box("2024-06-15 12:00")).unwrap();
            black_box(parsed);
        });
    });
}

criterion_group!(benches, bench_classify, bench_format, bench_parse_timestamp);
criterion_main!(benches);
