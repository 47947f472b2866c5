use bucketcache_core::{Cache, CacheBuilder, PolicyKind};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use std::sync::Arc;
use std::thread;

const POLICIES: [PolicyKind; 4] = [
    PolicyKind::FIFO,
    PolicyKind::LRU,
    PolicyKind::LFU,
    PolicyKind::Random,
];

fn bench_insert_sequential(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_sequential");

    for size in [10, 100, 1000].iter() {
        for kind in POLICIES {
            group.bench_with_input(BenchmarkId::new(kind.as_str(), size), size, |b, &size| {
                b.iter(|| {
                    let cache = CacheBuilder::new(size).policy(kind).build::<usize, i32>().unwrap();
                    for i in 0..size {
                        cache.put(i, black_box(i as i32));
                    }
                });
            });
        }
    }

    group.finish();
}

fn bench_get_hit(c: &mut Criterion) {
    let mut group = c.benchmark_group("get_hit");

    for size in [10, 100, 1000].iter() {
        for kind in POLICIES {
            let cache = CacheBuilder::new(*size).policy(kind).build::<usize, i32>().unwrap();
            for i in 0..*size {
                cache.put(i, i as i32);
            }

            group.bench_with_input(BenchmarkId::new(kind.as_str(), size), size, |b, &size| {
                b.iter(|| {
                    for i in 0..size {
                        black_box(cache.get(&i));
                    }
                });
            });
        }
    }

    group.finish();
}

/// LFU eviction cost should not grow with the number of cached entries.
fn bench_lfu_eviction_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("lfu_eviction_scaling");

    for size in [100, 1_000, 10_000].iter() {
        let cache = Cache::new(*size).unwrap();
        for i in 0..*size {
            cache.put(i, i);
            // spread the entries over a few frequency tiers
            for _ in 0..(i % 4) {
                cache.get(&i);
            }
        }

        let mut next = *size;
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                cache.put(next, next);
                next += 1;
            });
        });
    }

    group.finish();
}

fn bench_concurrent_mixed(c: &mut Criterion) {
    let mut group = c.benchmark_group("concurrent_mixed");

    for num_threads in [2usize, 4, 8].iter() {
        let cache: Arc<Cache<usize, usize>> = Arc::new(Cache::new(256).unwrap());

        group.bench_with_input(
            BenchmarkId::from_parameter(num_threads),
            num_threads,
            |b, &num_threads| {
                b.iter(|| {
                    let handles: Vec<_> = (0..num_threads)
                        .map(|thread_id| {
                            let cache = Arc::clone(&cache);
                            thread::spawn(move || {
                                for i in 0..100usize {
                                    let key = thread_id * 100 + i;
                                    if i % 10 == 0 {
                                        cache.put(key, black_box(i));
                                    } else {
                                        black_box(cache.get(&(key % 300)));
                                    }
                                }
                            })
                        })
                        .collect();

                    for handle in handles {
                        handle.join().unwrap();
                    }
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_insert_sequential,
    bench_get_hit,
    bench_lfu_eviction_scaling,
    bench_concurrent_mixed
);
criterion_main!(benches);
