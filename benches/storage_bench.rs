//! Benchmarks for Boxer storage and codec operations

use boxer::protocol::{decode, encode};
use boxer::Store;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tempfile::TempDir;

fn storage_benchmarks(c: &mut Criterion) {
    let temp_dir = TempDir::new().unwrap();
    let store = Store::create(temp_dir.path().join("bench.db")).unwrap();

    let mut i = 0u64;
    c.bench_function("store_write", |b| {
        b.iter(|| {
            i += 1;
            store.write(&format!("key_{}", i % 1024), "value").unwrap();
        })
    });

    store.write("hot", "value").unwrap();
    c.bench_function("store_read", |b| {
        b.iter(|| black_box(store.read("hot").unwrap()))
    });
}

fn codec_benchmarks(c: &mut Criterion) {
    let command = ["SET", "hello", "world"];
    let frame = encode(&command);

    c.bench_function("codec_encode", |b| b.iter(|| black_box(encode(&command))));
    c.bench_function("codec_decode", |b| b.iter(|| black_box(decode(&frame))));
}

criterion_group!(benches, storage_benchmarks, codec_benchmarks);
criterion_main!(benches);
