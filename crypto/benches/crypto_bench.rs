use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn keccak256_bench(c: &mut Criterion) {
    let data = [0xABu8; 256];

    c.bench_function("keccak256_256B", |b| {
        b.iter(|| ethwire_crypto::keccak256(black_box(&data)))
    });
}

fn keccak256_1kb_bench(c: &mut Criterion) {
    let data = vec![0xCDu8; 1024];

    c.bench_function("keccak256_1KB", |b| {
        b.iter(|| ethwire_crypto::keccak256(black_box(&data)))
    });
}

fn keccak256_multi_bench(c: &mut Criterion) {
    let parts: Vec<&[u8]> = vec![&[1u8; 32], &[2u8; 64], &[3u8; 128]];

    c.bench_function("keccak256_multi_3parts", |b| {
        b.iter(|| ethwire_crypto::keccak256_multi(black_box(&parts)))
    });
}

fn hash_transaction_bench(c: &mut Criterion) {
    // Roughly the size of a signed legacy transfer.
    let tx_bytes = vec![0xFFu8; 110];

    c.bench_function("hash_transaction_110B", |b| {
        b.iter(|| ethwire_crypto::hash_transaction(black_box(&tx_bytes)))
    });
}

criterion_group!(
    benches,
    keccak256_bench,
    keccak256_1kb_bench,
    keccak256_multi_bench,
    hash_transaction_bench,
);
criterion_main!(benches);
