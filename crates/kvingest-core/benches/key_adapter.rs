//! Benchmarks for key adapters.

#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use kvingest_core::types::encode_int_row_id;
use kvingest_core::{DupDetectKeyAdapter, KeyAdapter, RowId};

/// Benchmark dup-detect encoding for growing key sizes.
fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("dup_detect_encode");
    let row_id = encode_int_row_id(42);

    for size in [8usize, 64, 512] {
        let key = vec![b'k'; size];
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_function(format!("key_{size}"), |b| {
            let mut buf = Vec::with_capacity(1024);
            b.iter(|| {
                buf.clear();
                let row_id = RowId::new(&row_id).unwrap();
                DupDetectKeyAdapter.encode(&mut buf, black_box(&key), row_id);
                black_box(buf.len());
            });
        });
    }

    group.finish();
}

/// Benchmark dup-detect decoding into a reused buffer.
fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("dup_detect_decode");
    let row_id = encode_int_row_id(42);

    for size in [8usize, 64, 512] {
        let key = vec![b'k'; size];
        let encoded = DupDetectKeyAdapter.encode_to_vec(&key, RowId::new(&row_id).unwrap());
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_function(format!("key_{size}"), |b| {
            let mut buf = Vec::with_capacity(1024);
            b.iter(|| {
                buf.clear();
                DupDetectKeyAdapter.decode(&mut buf, black_box(&encoded)).unwrap();
                black_box(buf.len());
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode);
criterion_main!(benches);
