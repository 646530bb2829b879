//! Benchmarks for the sequence list.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ghost_cell::GhostToken;
use sequence_list::branded::GhostList;
use sequence_list::List;

const SIZES: [usize; 3] = [16, 256, 4096];

fn bench_push_pop(c: &mut Criterion) {
    c.bench_function("push_back_pop_front", |b| {
        let mut list = List::new();
        b.iter(|| {
            list.push_back(black_box(1u64));
            black_box(list.pop_front())
        })
    });

    c.bench_function("push_front_pop_back", |b| {
        let mut list = List::from([0u64; 8]);
        b.iter(|| {
            list.push_front(black_box(1u64));
            black_box(list.pop_back())
        })
    });
}

fn bench_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove_last_match");
    for size in SIZES {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let mut list = List::from_iter(0..size);
            let last = size - 1;
            b.iter(|| {
                assert!(list.remove(black_box(&last)));
                list.push_back(last);
            })
        });
    }
    group.finish();
}

fn bench_map(c: &mut Criterion) {
    let mut group = c.benchmark_group("map");
    for size in SIZES {
        let list = List::from_iter(0..size as u64);
        group.bench_with_input(BenchmarkId::new("allocating", size), &list, |b, list| {
            b.iter(|| black_box(list.map(|x| x * x)))
        });
        group.bench_with_input(BenchmarkId::new("in_place", size), &size, |b, &size| {
            let mut list = List::from_iter(0..size as u64);
            b.iter(|| list.map_in_place(|x| black_box(x ^ 1)))
        });
    }
    group.finish();
}

fn bench_clone(c: &mut Criterion) {
    let mut group = c.benchmark_group("clone");
    for size in SIZES {
        let source = List::from_iter(0..size as u64);
        group.bench_with_input(BenchmarkId::new("clone", size), &source, |b, source| {
            b.iter(|| black_box(source.clone()))
        });
        group.bench_with_input(BenchmarkId::new("clone_from", size), &source, |b, source| {
            let mut target = List::from_iter(0..size as u64 / 2);
            b.iter(|| target.clone_from(black_box(source)))
        });
    }
    group.finish();
}

fn bench_branded_push_pop(c: &mut Criterion) {
    c.bench_function("branded_push_back_pop_front", |b| {
        GhostToken::new(|mut token| {
            let mut list = GhostList::new();
            b.iter(|| {
                list.push_back(black_box(1u64), &mut token);
                black_box(list.pop_front(&mut token))
            });
            list.clear(&mut token);
        })
    });
}

criterion_group!(
    benches,
    bench_push_pop,
    bench_remove,
    bench_map,
    bench_clone,
    bench_branded_push_pop
);
criterion_main!(benches);
