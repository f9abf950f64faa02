use criterion::{black_box, criterion_group, criterion_main, Criterion};
use congen_stats::testing::ContingencyTable;
use congen_stats::{binom, chi2, factorial, fisher, Precision};

fn bench_factorial(c: &mut Criterion) {
    let mut group = c.benchmark_group("factorial");

    group.bench_function("5000_full", |b| {
        b.iter(|| factorial(black_box(5_000), 1))
    });
    group.bench_function("5000_over_4900", |b| {
        b.iter(|| factorial(black_box(5_000), black_box(4_900)))
    });

    group.finish();
}

fn bench_binom(c: &mut Criterion) {
    let mut group = c.benchmark_group("binom");

    group.bench_function("n1000_k500_fair", |b| {
        b.iter(|| binom(black_box(1_000), black_box(500), 0.5))
    });
    group.bench_function("n1000_k10_skewed", |b| {
        b.iter(|| binom(black_box(1_000), black_box(10), 0.013))
    });

    group.finish();
}

fn bench_fisher(c: &mut Criterion) {
    let mut group = c.benchmark_group("fisher");
    let precision = Precision::default();

    group.bench_function("totals_500", |b| {
        b.iter(|| fisher(black_box(120), black_box(95), 500, 480, precision))
    });

    let table = ContingencyTable::new(40, 25, 300, 280).unwrap();
    group.bench_function("two_tailed_totals_300", |b| {
        b.iter(|| black_box(&table).fisher_two_tailed(precision))
    });

    group.finish();
}

fn bench_chi2(c: &mut Criterion) {
    let mut group = c.benchmark_group("chi2");
    let precision = Precision::default();

    group.bench_function("totals_10k", |b| {
        b.iter(|| chi2(black_box(2_400), black_box(2_150), 10_000, 9_800, precision))
    });

    group.finish();
}

criterion_group!(benches, bench_factorial, bench_binom, bench_fisher, bench_chi2);
criterion_main!(benches);
