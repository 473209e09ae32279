use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::io::{self, BufRead, Cursor};

use vsort::{emit, populate, BitVector};

const CAPACITY: usize = 10_000_000;

/// Distinct values spread over the universe, in shuffled order
fn shuffled_values(count: usize, seed: u64) -> Vec<usize> {
    let stride = CAPACITY / count;
    let mut values: Vec<usize> = (0..count).map(|i| i * stride).collect();
    values.shuffle(&mut StdRng::seed_from_u64(seed));
    values
}

fn bench_set_bit(c: &mut Criterion) {
    let mut group = c.benchmark_group("set_bit");

    for count in [10_000usize, 1_000_000] {
        let values = shuffled_values(count, 7);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &values, |b, values| {
            b.iter(|| {
                let mut bv = BitVector::new(CAPACITY);
                for &v in values {
                    bv.set_bit(v).unwrap();
                }
                black_box(bv)
            })
        });
    }

    group.finish();
}

fn bench_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("ascending_scan");

    for count in [10_000usize, 1_000_000] {
        let mut bv = BitVector::new(CAPACITY);
        for v in shuffled_values(count, 11) {
            bv.set_bit(v).unwrap();
        }

        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("iter_ones", count), &bv, |b, bv| {
            b.iter(|| black_box(bv.iter_ones().sum::<usize>()))
        });
        group.bench_with_input(BenchmarkId::new("emit", count), &bv, |b, bv| {
            b.iter(|| emit(bv, io::sink()).unwrap())
        });
    }

    group.finish();
}

fn bench_populate(c: &mut Criterion) {
    let count = 1_000_000;
    let input: String = shuffled_values(count, 3)
        .iter()
        .map(|v| format!("{v}\n"))
        .collect();

    let mut group = c.benchmark_group("populate");
    group.throughput(Throughput::Bytes(input.len() as u64));
    group.bench_function("buffered_lines", |b| {
        b.iter(|| populate(Cursor::new(input.as_bytes()).lines(), CAPACITY).unwrap())
    });
    group.finish();
}

criterion_group!(benches, bench_set_bit, bench_scan, bench_populate);
criterion_main!(benches);
