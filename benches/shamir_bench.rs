use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use keysplit::core::shamir::{interpolate_polynomial, mult};
use keysplit::{combine, split};
use std::time::Duration;

/// Generate a secret of given size.
fn generate_secret(size: usize) -> Vec<u8> {
    (0..size).map(|i| i as u8).collect()
}

/// Benchmark splitting with varying secret sizes.
fn bench_split(c: &mut Criterion) {
    let mut group = c.benchmark_group("split");
    group.sample_size(50);
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(3));

    let sizes = [32, 256, 1024, 4096];

    for size in sizes {
        let secret = generate_secret(size);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(
            BenchmarkId::new("5_of_3", format!("{}B", size)),
            &secret,
            |b, secret| {
                b.iter(|| {
                    let shares = split(black_box(secret), 5, 3).unwrap();
                    black_box(shares);
                });
            },
        );
    }

    group.finish();
}

/// Benchmark combining with varying secret sizes.
fn bench_combine(c: &mut Criterion) {
    let mut group = c.benchmark_group("combine");
    group.sample_size(50);
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(3));

    let sizes = [32, 256, 1024, 4096];

    for size in sizes {
        let secret = generate_secret(size);
        let shares = split(&secret, 5, 3).unwrap();
        let subset = &shares[..3];

        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(
            BenchmarkId::new("3_shares", format!("{}B", size)),
            subset,
            |b, subset| {
                b.iter(|| {
                    let recovered = combine(black_box(subset)).unwrap();
                    black_box(recovered);
                });
            },
        );
    }

    group.finish();
}

/// Benchmark how threshold affects split and combine cost.
fn bench_threshold(c: &mut Criterion) {
    let mut group = c.benchmark_group("threshold");
    group.sample_size(30);

    let secret = generate_secret(32);

    for threshold in [2usize, 16, 64, 255] {
        group.bench_with_input(
            BenchmarkId::new("roundtrip", threshold),
            &threshold,
            |b, &threshold| {
                b.iter(|| {
                    let shares = split(black_box(&secret), 255, threshold).unwrap();
                    let recovered = combine(&shares[..threshold]).unwrap();
                    black_box(recovered);
                });
            },
        );
    }

    group.finish();
}

/// Benchmark the field primitives.
fn bench_field(c: &mut Criterion) {
    let mut group = c.benchmark_group("field");

    group.bench_function("mult", |b| {
        b.iter(|| {
            let mut acc = 1u8;
            for x in 1..=255u8 {
                acc = mult(black_box(acc), black_box(x)) ^ 1;
            }
            black_box(acc)
        });
    });

    let xs: Vec<u8> = (1..=16).collect();
    let ys: Vec<u8> = (1..=16).map(|x: u8| x.wrapping_mul(7)).collect();
    group.bench_function("interpolate_16", |b| {
        b.iter(|| black_box(interpolate_polynomial(black_box(&xs), black_box(&ys), 0)));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_split,
    bench_combine,
    bench_threshold,
    bench_field
);
criterion_main!(benches);
