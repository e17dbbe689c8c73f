//! Criterion micro-benchmarks for list construction, churn, and traversal.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use skein::XorList;
use skein_bench::int_list;

fn bench_push_back(c: &mut Criterion) {
    c.bench_function("list_push_back_10k", |b| {
        b.iter(|| {
            let mut list = XorList::new();
            for i in 0..10_000i64 {
                list.push_back(black_box(i));
            }
            list.len()
        });
    });
}

fn bench_push_pop_churn(c: &mut Criterion) {
    c.bench_function("list_push_pop_churn_10k", |b| {
        b.iter(|| {
            let mut list = XorList::new();
            for i in 0..10_000i64 {
                list.push_back(i);
                list.push_front(i);
                black_box(list.pop_back().ok());
            }
            list.len()
        });
    });
}

fn bench_iterate_forward(c: &mut Criterion) {
    let list = int_list(10_000);
    c.bench_function("list_iterate_forward_10k", |b| {
        b.iter(|| list.iter().copied().sum::<i64>());
    });
}

fn bench_iterate_reverse(c: &mut Criterion) {
    let list = int_list(10_000);
    c.bench_function("list_iterate_reverse_10k", |b| {
        b.iter(|| list.iter().rev().copied().sum::<i64>());
    });
}

fn bench_clone(c: &mut Criterion) {
    let list = int_list(10_000);
    c.bench_function("list_clone_10k", |b| {
        b.iter(|| black_box(&list).clone().len());
    });
}

criterion_group!(
    benches,
    bench_push_back,
    bench_push_pop_churn,
    bench_iterate_forward,
    bench_iterate_reverse,
    bench_clone
);
criterion_main!(benches);
