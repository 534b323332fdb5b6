//! Check-digit and parsing benchmarks.

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use rut_chile::{format_rut, get_verification_digit, is_valid_rut};

fn bench_check_digit(c: &mut Criterion) {
    let mut group = c.benchmark_group("check_digit");
    let long_body = "1234567890".repeat(1_000);

    group.bench_function("typical_body", |b| {
        b.iter(|| get_verification_digit(black_box("12667869"), false))
    });
    group.bench_function("long_body_10k_digits", |b| {
        b.iter(|| get_verification_digit(black_box(long_body.as_str()), false))
    });

    group.finish();
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    group.bench_function("is_valid_rut_dotted", |b| {
        b.iter(|| is_valid_rut(black_box("12.667.869-K")))
    });
    group.bench_function("format_rut_with_dots", |b| {
        b.iter(|| format_rut(black_box("123456789k"), true, true))
    });

    group.finish();
}

criterion_group!(benches, bench_check_digit, bench_parse);
criterion_main!(benches);
