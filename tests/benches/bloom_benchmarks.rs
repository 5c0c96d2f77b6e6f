//! # ChainProbe Bloom Benchmarks
//!
//! Cost of the probe derivation and the membership test, which together
//! dominate the decode side of the header-bloom pipeline.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::RngCore;

use cp_bloom_filter::{probe, Bloom};

fn bench_probe_derivation(c: &mut Criterion) {
    let mut group = c.benchmark_group("bloom-probe");

    let key = b"SyncMsg(bytes16,bytes32)";
    group.bench_function("probe_single_key", |b| {
        b.iter(|| black_box(probe(black_box(key))))
    });

    group.finish();
}

fn bench_membership_test(c: &mut Criterion) {
    let mut group = c.benchmark_group("bloom-membership");

    let mut rng = rand::thread_rng();
    let mut filter = Bloom::default();
    let mut buf = [0u8; 32];
    for _ in 0..64 {
        rng.fill_bytes(&mut buf);
        filter.accrue(&buf);
    }

    let key_counts = [1usize, 3, 8];
    for count in key_counts {
        let keys: Vec<[u8; 32]> = (0..count)
            .map(|_| {
                let mut key = [0u8; 32];
                rng.fill_bytes(&mut key);
                key
            })
            .collect();

        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("contains_all", count), &keys, |b, keys| {
            b.iter(|| {
                black_box(filter.contains_all(keys.iter().map(|k| k.as_slice())))
            })
        });
    }

    group.finish();
}

fn bench_accrue(c: &mut Criterion) {
    let mut group = c.benchmark_group("bloom-accrue");

    group.bench_function("accrue_one_topic", |b| {
        let mut filter = Bloom::default();
        b.iter(|| filter.accrue(black_box(b"topic_under_test")))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_probe_derivation,
    bench_membership_test,
    bench_accrue
);
criterion_main!(benches);
