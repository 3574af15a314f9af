//! Benchmarks for algebraic number construction, comparison and arithmetic.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use surd_poly::Poly;
use surd_real::{real_roots, AlgebraicReal, Interval};
use surd_rings::{Q, Ring};

fn poly(coeffs: &[i64]) -> Poly<Q> {
    Poly::new(coeffs.iter().map(|&c| Q::from_integer(c)).collect())
}

fn sqrt_of(n: i64) -> AlgebraicReal {
    AlgebraicReal::new(
        poly(&[-n, 0, 1]),
        Interval::new(Q::from_integer(0), Q::from_integer(n)),
    )
    .expect("isolating interval")
}

fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");

    group.bench_function("sqrt2", |b| b.iter(|| black_box(sqrt_of(2))));

    // Wide starting interval forces a few bisection steps off zero.
    let f = poly(&[-2, 0, 0, 1]);
    group.bench_function("cbrt2_wide_interval", |b| {
        b.iter(|| {
            black_box(
                AlgebraicReal::new(
                    f.clone(),
                    Interval::new(Q::from_integer(-2), Q::from_integer(2)),
                )
                .unwrap(),
            )
        })
    });

    group.finish();
}

fn bench_comparison(c: &mut Criterion) {
    let mut group = c.benchmark_group("comparison");

    let sqrt2 = sqrt_of(2);
    let sqrt3 = sqrt_of(3);
    let close = AlgebraicReal::from(Q::new(99, 70));

    group.bench_function("sqrt2_vs_99/70", |b| {
        b.iter(|| black_box(sqrt2.cmp(&close)))
    });
    group.bench_function("sqrt2_vs_sqrt3", |b| {
        b.iter(|| black_box(sqrt2.cmp(&sqrt3)))
    });
    group.bench_function("sqrt2_equality", |b| {
        b.iter(|| black_box(sqrt2 == sqrt_of(2)))
    });

    group.finish();
}

fn bench_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("arithmetic");
    group.sample_size(50);

    let sqrt2 = sqrt_of(2);
    let sqrt3 = sqrt_of(3);

    group.bench_function("sqrt2_plus_sqrt3", |b| {
        b.iter(|| black_box(sqrt2.clone() + sqrt3.clone()))
    });
    group.bench_function("sqrt2_times_sqrt3", |b| {
        b.iter(|| black_box(sqrt2.clone() * sqrt3.clone()))
    });
    group.bench_function("sqrt2_recip", |b| {
        b.iter(|| black_box(sqrt2.recip().unwrap()))
    });
    group.bench_function("sqrt2_pow_5", |b| {
        b.iter(|| black_box(sqrt2.pow(5).unwrap()))
    });

    group.finish();
}

fn bench_root_isolation(c: &mut Criterion) {
    let mut group = c.benchmark_group("root_isolation");
    group.sample_size(50);

    for degree in [2usize, 4, 6, 8] {
        let f = Poly::monomial(Q::one(), degree) - Poly::constant(Q::from_integer(2));
        group.bench_with_input(BenchmarkId::new("x^n - 2", degree), &degree, |b, _| {
            b.iter(|| black_box(real_roots(&f).unwrap()))
        });
    }

    // Legendre P5 up to scale: five real roots packed into (-1, 1).
    let legendre5 = poly(&[0, 15, 0, -70, 0, 63]);
    group.bench_function("legendre_5", |b| {
        b.iter(|| black_box(real_roots(&legendre5).unwrap()))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_construction,
    bench_comparison,
    bench_arithmetic,
    bench_root_isolation
);

criterion_main!(benches);
