use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use forward_list::ForwardList;
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::hint::black_box;

const SIZES: [usize; 3] = [100, 10_000, 100_000];

fn random_list(len: usize, seed: u64) -> ForwardList<u64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| rng.random_range(0..1_000)).collect()
}

fn push_pop_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_pop_front");
    for size in SIZES {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_function(BenchmarkId::from_parameter(size), |b| {
            b.iter(|| {
                let mut list = ForwardList::new();
                for i in 0..size {
                    list.push_front(black_box(i));
                }
                while let Some(value) = list.pop_front() {
                    black_box(value);
                }
            })
        });
    }
    group.finish();
}

fn cursor_insert_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("cursor_insert_after");
    for size in SIZES {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_function(BenchmarkId::from_parameter(size), |b| {
            b.iter(|| {
                let mut list = ForwardList::new();
                let mut cursor = list.cursor_before_begin_mut();
                for i in 0..size {
                    cursor.insert_after(black_box(i));
                }
                list
            })
        });
    }
    group.finish();
}

fn clone_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("clone");
    for size in SIZES {
        let list = random_list(size, 7);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &list, |b, list| {
            b.iter(|| black_box(list.clone()))
        });
    }
    group.finish();
}

fn compare_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("compare");
    for size in SIZES {
        let left = random_list(size, 11);
        let right = left.clone();
        group.throughput(Throughput::Elements(size as u64));
        group.bench_function(BenchmarkId::new("eq", size), |b| {
            b.iter(|| black_box(&left) == black_box(&right))
        });
        group.bench_function(BenchmarkId::new("cmp", size), |b| {
            b.iter(|| black_box(&left).cmp(black_box(&right)))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    push_pop_benchmark,
    cursor_insert_benchmark,
    clone_benchmark,
    compare_benchmark
);
criterion_main!(benches);
