// benches/growth.rs

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use dyn_array::DynArray;
use rand::Rng;

fn create_array(size: usize) -> DynArray<u64> {
    let mut a = DynArray::new();
    for i in 0..size {
        a.push(i as u64).unwrap();
    }
    a
}

fn bench_push_growth(c: &mut Criterion) {
    let sizes = vec![16, 256, 1024];

    let mut group = c.benchmark_group("push_growth");
    for size in sizes {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &s| {
            b.iter(|| black_box(create_array(s)));
        });
    }
    group.finish();
}

fn bench_push_prereserved(c: &mut Criterion) {
    let sizes = vec![16, 256, 1024];

    let mut group = c.benchmark_group("push_prereserved");
    for size in sizes {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &s| {
            b.iter(|| {
                let mut a = DynArray::new();
                a.reserve(s).unwrap();
                for i in 0..s {
                    a.push(i as u64).unwrap();
                }
                black_box(a)
            });
        });
    }
    group.finish();
}

fn bench_index_sum(c: &mut Criterion) {
    let sizes = vec![256, 1024];

    let mut group = c.benchmark_group("index_sum");
    for size in sizes {
        let array = create_array(size);

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                let mut sum = 0u64;
                for i in 0..array.len() {
                    sum = sum.wrapping_add(black_box(array[i]));
                }
                sum
            });
        });
    }
    group.finish();
}

fn bench_random_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_insert");
    group.bench_function("insert_512", |b| {
        let mut rng = rand::rng();
        b.iter(|| {
            let mut a = DynArray::new();
            for value in 0u64..512 {
                let index = rng.random_range(0..=a.len());
                a.insert(index, value).unwrap();
            }
            black_box(a)
        });
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_push_growth,
    bench_push_prereserved,
    bench_index_sum,
    bench_random_insert
);
criterion_main!(benches);
