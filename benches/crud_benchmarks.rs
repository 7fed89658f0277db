use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use std::collections::{BTreeMap, BTreeSet};
use splay_tree::{SplayMap, SplaySet};

const N: usize = 10_000;

// ─── Key sequences ──────────────────────────────────────────────────────────

fn ascending_keys(n: usize) -> Vec<i64> {
    (0..n as i64).collect()
}

fn descending_keys(n: usize) -> Vec<i64> {
    (0..n as i64).rev().collect()
}

/// Deterministic pseudo-random keys from a 64-bit LCG.
fn scattered_keys(n: usize) -> Vec<i64> {
    let mut state: u64 = 0x9E37_79B9;
    (0..n)
        .map(|_| {
            state = state.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1_442_695_040_888_963_407);
            (state >> 33) as i64 % n as i64
        })
        .collect()
}

/// Nine of every ten accesses hit one of sixteen hot keys.
fn skewed_keys(n: usize) -> Vec<i64> {
    scattered_keys(n)
        .into_iter()
        .enumerate()
        .map(|(i, k)| if i % 10 == 0 { k } else { (k % 16) * 97 })
        .collect()
}

fn workloads() -> [(&'static str, Vec<i64>); 4] {
    [
        ("ascending", ascending_keys(N)),
        ("descending", descending_keys(N)),
        ("scattered", scattered_keys(N)),
        ("skewed", skewed_keys(N)),
    ]
}

// ─── Map benchmarks ─────────────────────────────────────────────────────────

fn bench_map_insert(c: &mut Criterion) {
    for (name, keys) in workloads() {
        let mut group = c.benchmark_group(format!("map_insert_{name}"));

        group.bench_function(BenchmarkId::new("SplayMap", N), |b| {
            b.iter(|| {
                let mut map = SplayMap::new();
                for &k in &keys {
                    map.insert(k, k);
                }
                map
            });
        });

        group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
            b.iter(|| {
                let mut map = BTreeMap::new();
                for &k in &keys {
                    map.insert(k, k);
                }
                map
            });
        });

        group.finish();
    }
}

fn bench_map_get(c: &mut Criterion) {
    let everything = ascending_keys(N);
    let mut splay: SplayMap<i64, i64> = SplayMap::from_sorted_iter(everything.iter().map(|&k| (k, k)));
    let btree: BTreeMap<i64, i64> = everything.iter().map(|&k| (k, k)).collect();

    for (name, keys) in workloads() {
        let mut group = c.benchmark_group(format!("map_get_{name}"));

        group.bench_function(BenchmarkId::new("SplayMap", N), |b| {
            b.iter(|| {
                let mut sum = 0i64;
                for k in &keys {
                    if let Some(&v) = splay.get(k) {
                        sum = sum.wrapping_add(v);
                    }
                }
                sum
            });
        });

        group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
            b.iter(|| {
                let mut sum = 0i64;
                for k in &keys {
                    if let Some(&v) = btree.get(k) {
                        sum = sum.wrapping_add(v);
                    }
                }
                sum
            });
        });

        group.finish();
    }
}

fn bench_map_remove(c: &mut Criterion) {
    let everything = ascending_keys(N);

    for (name, keys) in workloads() {
        let mut group = c.benchmark_group(format!("map_remove_{name}"));

        group.bench_function(BenchmarkId::new("SplayMap", N), |b| {
            b.iter_batched(
                || SplayMap::from_sorted_iter(everything.iter().map(|&k| (k, k))),
                |mut map| {
                    for k in &keys {
                        map.remove(k);
                    }
                    map
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
            b.iter_batched(
                || everything.iter().map(|&k| (k, k)).collect::<BTreeMap<i64, i64>>(),
                |mut map| {
                    for k in &keys {
                        map.remove(k);
                    }
                    map
                },
                BatchSize::SmallInput,
            );
        });

        group.finish();
    }
}

fn bench_map_iter(c: &mut Criterion) {
    let keys = scattered_keys(N);
    let splay: SplayMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();
    let btree: BTreeMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();

    let mut group = c.benchmark_group("map_iter");

    group.bench_function(BenchmarkId::new("SplayMap", N), |b| {
        b.iter(|| splay.values().fold(0i64, |acc, &v| acc.wrapping_add(v)));
    });

    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
        b.iter(|| btree.values().fold(0i64, |acc, &v| acc.wrapping_add(v)));
    });

    group.finish();
}

// ─── Set benchmarks ─────────────────────────────────────────────────────────

fn bench_set_contains(c: &mut Criterion) {
    let everything = ascending_keys(N);
    let mut splay = SplaySet::from_sorted_iter(everything.iter().copied());
    let btree: BTreeSet<i64> = everything.iter().copied().collect();

    for (name, keys) in workloads() {
        let mut group = c.benchmark_group(format!("set_contains_{name}"));

        group.bench_function(BenchmarkId::new("SplaySet", N), |b| {
            b.iter(|| keys.iter().filter(|k| splay.contains(*k)).count());
        });

        group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
            b.iter(|| keys.iter().filter(|k| btree.contains(*k)).count());
        });

        group.finish();
    }
}

fn bench_set_build(c: &mut Criterion) {
    let everything = ascending_keys(N);
    let mut group = c.benchmark_group("set_build_sorted");

    group.bench_function(BenchmarkId::new("SplaySet::from_sorted_iter", N), |b| {
        b.iter(|| SplaySet::from_sorted_iter(everything.iter().copied()));
    });

    group.bench_function(BenchmarkId::new("SplaySet::collect", N), |b| {
        b.iter(|| everything.iter().copied().collect::<SplaySet<i64>>());
    });

    group.bench_function(BenchmarkId::new("BTreeSet::collect", N), |b| {
        b.iter(|| everything.iter().copied().collect::<BTreeSet<i64>>());
    });

    group.finish();
}

// ─── Criterion groups ───────────────────────────────────────────────────────

criterion_group!(map_benches, bench_map_insert, bench_map_get, bench_map_remove, bench_map_iter);

criterion_group!(set_benches, bench_set_contains, bench_set_build);

criterion_main!(map_benches, set_benches);
