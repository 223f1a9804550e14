use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sp_math::random_numbers::StdUniformRng;
use sp_methods::{err_stat, integrate_circle, integrate_circle_with};

fn bench_integrate_circle(c: &mut Criterion) {
    let mut group = c.benchmark_group("integrate_circle");
    for n in [100usize, 10_000, 1_000_000] {
        group.bench_with_input(BenchmarkId::new("mt19937_64", n), &n, |b, &n| {
            b.iter(|| integrate_circle(black_box(n), 1.0, 42))
        });
        group.bench_with_input(BenchmarkId::new("std_rng", n), &n, |b, &n| {
            b.iter(|| integrate_circle_with::<StdUniformRng>(black_box(n), 1.0, 42))
        });
    }
    group.finish();
}

fn bench_err_stat(c: &mut Criterion) {
    c.bench_function("err_stat 10 seeds x [10..10^4]", |b| {
        b.iter(|| err_stat(black_box(10), &[10, 100, 1_000, 10_000]))
    });
}

criterion_group!(benches, bench_integrate_circle, bench_err_stat);
criterion_main!(benches);
