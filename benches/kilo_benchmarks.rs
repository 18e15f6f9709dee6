//! Kilo Autocomplete Benchmarks
//!
//! This module contains benchmarks for the completion trie, the result cache
//! and the engine that composes them. The benchmarks are implemented using the
//! Criterion framework, which provides statistical analysis and performance
//! regression detection.
//!
//! To run the benchmarks:
//! ```bash
//! cargo bench --features benchmarking
//! ```

use criterion::{
    black_box, criterion_group, criterion_main, measurement::WallTime, BenchmarkId, Criterion,
    SamplingMode, Throughput,
};
use std::time::Duration;

/// Generates `count` words that share prefixes in a predictable way.
fn vocabulary(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| format!("w{}x{}", i % 50, i))
        .collect()
}

/// Benchmark the Lanai Trie
fn bench_lanai_trie(c: &mut Criterion) {
    use kilo_autocomplete_lib::data_structures::lanai_trie::LanaiTrie;

    let mut group = c.benchmark_group("lanai_trie");
    group.sampling_mode(SamplingMode::Flat);
    group.measurement_time(Duration::from_secs(2));
    group.warm_up_time(Duration::from_secs(1));

    for size in [100, 1000, 10_000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("insert", size), size, |b, &size| {
            let words = vocabulary(size);
            b.iter(|| {
                let mut trie = LanaiTrie::new();
                for word in &words {
                    black_box(trie.insert(word));
                }
                trie
            });
        });
    }

    for limit in [1, 5, 50].iter() {
        group.bench_with_input(BenchmarkId::new("complete", limit), limit, |b, &limit| {
            let mut trie = LanaiTrie::new();
            for word in vocabulary(10_000) {
                trie.insert(&word);
            }

            let mut index = 0;
            b.iter(|| {
                let prefix = format!("w{}", index % 50);
                index += 1;
                black_box(trie.complete(&prefix, limit))
            });
        });
    }

    group.finish();
}

/// Benchmark the Kauai Cache
fn bench_kauai_cache(c: &mut Criterion) {
    use kilo_autocomplete_lib::data_structures::kauai_cache::{
        EvictionPolicy, KauaiCache, KauaiCacheConfig,
    };

    let mut group = c.benchmark_group("kauai_cache");
    group.sampling_mode(SamplingMode::Flat);
    group.measurement_time(Duration::from_secs(2));

    for policy in [EvictionPolicy::LargestResult, EvictionPolicy::LeastRecentlyUsed] {
        group.bench_function(BenchmarkId::new("put_with_eviction", format!("{policy:?}")), |b| {
            let config = KauaiCacheConfig::new().with_capacity(100).with_policy(policy);
            let mut cache: KauaiCache<usize, Vec<usize>> = KauaiCache::with_config(config);

            let mut index = 0usize;
            b.iter(|| {
                index += 1;
                black_box(cache.put(index, vec![0; index % 7]))
            });
        });
    }

    group.finish();
}

/// Benchmark the engine query path
fn bench_engine_query(c: &mut Criterion) {
    use kilo_autocomplete_lib::{AutocompleteEngine, EngineOptions};

    let mut group = c.benchmark_group("engine_query");
    group.sampling_mode(SamplingMode::Flat);
    group.measurement_time(Duration::from_secs(2));

    group.bench_function("cache_hit", |b| {
        let engine = AutocompleteEngine::new();
        engine.insert_all(vocabulary(10_000));
        engine.query("w1", 5);

        b.iter(|| black_box(engine.query("w1", 5)));
    });

    group.bench_function("cache_disabled", |b| {
        let engine =
            AutocompleteEngine::with_options(EngineOptions::new().with_cache_enabled(false));
        engine.insert_all(vocabulary(10_000));

        b.iter(|| black_box(engine.query("w1", 5)));
    });

    group.bench_function("insert_invalidates", |b| {
        let engine = AutocompleteEngine::new();
        engine.insert_all(vocabulary(1000));
        for i in 0..50 {
            engine.query(&format!("w{i}"), 5);
        }

        b.iter(|| black_box(engine.insert("w1x1")));
    });

    group.finish();
}

// Group all benchmarks together
criterion_group! {
    name = benches;
    config = Criterion::default()
        .with_measurement(WallTime)
        .significance_level(0.01)
        .noise_threshold(0.02)
        .confidence_level(0.99);
    targets = bench_lanai_trie, bench_kauai_cache, bench_engine_query
}

criterion_main!(benches);
