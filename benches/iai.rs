use iai::black_box;
use veristore_core::cross_checksum::Fpcc;
use veristore_core::erasure::{decode, encode};

const BYTES: &[u8] = include_bytes!("../Cargo.toml");

fn bench_encode() {
    let _ = encode(black_box(BYTES), 5, 3, None);
}

fn bench_roundtrip() {
    let frags = encode(black_box(BYTES), 5, 3, None).unwrap();
    let recovered = decode(&frags[0..3]).unwrap();
    assert_eq!(recovered, BYTES);
}

fn bench_fpcc_generate() {
    let frags = encode(black_box(BYTES), 5, 3, None).unwrap();
    let _ = Fpcc::generate(&frags).unwrap();
}

iai::main!(bench_encode, bench_roundtrip, bench_fpcc_generate);
