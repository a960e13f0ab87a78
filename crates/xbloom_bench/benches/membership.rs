use criterion::{criterion_group, criterion_main, Criterion, black_box};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use xbloom_core::{murmur_hash32, BloomFilter, FilterHeader};

fn bench_membership(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let bits: Vec<u8> = (0..1 << 20).map(|_| rng.random::<u8>()).collect();
    let hdr = FilterHeader { entries: 1 << 20, hash_rounds: 7, bit_count: (bits.len() * 8) as u64 };
    let bf = BloomFilter::from_parts(hdr, bits).unwrap();
    let keys: Vec<[u8; 16]> = (0..1024).map(|_| rng.random()).collect();

    c.bench_function("murmur_hash32/16B", |b| b.iter(|| black_box(murmur_hash32(black_box(&keys[0]), 42))));
    c.bench_function("contains/1M-bytes", |b| {
        let mut i = 0usize;
        b.iter(|| { i = (i + 1) & 1023; black_box(bf.contains(&keys[i])) })
    });
}

criterion_group!(benches, bench_membership);
criterion_main!(benches);
