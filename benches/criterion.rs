use criterion::{black_box, criterion_group, criterion_main, Criterion};
use veristore_core::cross_checksum::Fpcc;
use veristore_core::erasure::{decode, encode};
use veristore_core::verifier::check;

const BYTES: &[u8] = include_bytes!("../Cargo.toml");

fn bench_encode(c: &mut Criterion) {
    c.bench_function("encode 5-of-3", |b| {
        b.iter(|| encode(black_box(BYTES), 5, 3, None).unwrap())
    });
}

fn bench_decode(c: &mut Criterion) {
    let frags = encode(BYTES, 5, 3, None).unwrap();
    c.bench_function("decode 5-of-3", |b| {
        b.iter(|| decode(black_box(&frags[0..3])).unwrap())
    });
}

fn bench_fpcc_generate(c: &mut Criterion) {
    let frags = encode(BYTES, 5, 3, None).unwrap();
    c.bench_function("fpcc generate", |b| {
        b.iter(|| Fpcc::generate(black_box(&frags)).unwrap())
    });
}

fn bench_verify(c: &mut Criterion) {
    let frags = encode(BYTES, 5, 3, None).unwrap();
    let fpcc = Fpcc::generate(&frags).unwrap();
    c.bench_function("verify one fragment", |b| {
        b.iter(|| check(0, black_box(&frags[0].data), &fpcc))
    });
}

criterion_group!(
    benches,
    bench_encode,
    bench_decode,
    bench_fpcc_generate,
    bench_verify
);
criterion_main!(benches);
