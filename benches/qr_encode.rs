use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rust_qr_gen::encoder::mask::evaluate;
use rust_qr_gen::encoder::reed_solomon::GeneratorPolynomial;
use rust_qr_gen::{ECLevel, encode};

fn digits(len: usize) -> String {
    (0..len).map(|i| char::from(b'0' + (i * 7 % 10) as u8)).collect()
}

fn bench_encode_small(c: &mut Criterion) {
    let data = digits(20);
    c.bench_function("encode_20_digits_M", |b| {
        b.iter(|| encode(black_box(&data), black_box(ECLevel::M)))
    });
}

fn bench_encode_medium(c: &mut Criterion) {
    let data = digits(600);
    c.bench_function("encode_600_digits_Q", |b| {
        b.iter(|| encode(black_box(&data), black_box(ECLevel::Q)))
    });
}

fn bench_encode_version_40(c: &mut Criterion) {
    let data = digits(7089);
    c.bench_function("encode_7089_digits_L", |b| {
        b.iter(|| encode(black_box(&data), black_box(ECLevel::L)))
    });
}

fn bench_rs_block(c: &mut Criterion) {
    let generator = GeneratorPolynomial::new(30);
    let block: Vec<u8> = (0..118u8).collect();
    c.bench_function("rs_encode_118_data_30_ec", |b| {
        b.iter(|| generator.encode_block(black_box(&block)))
    });
}

fn bench_penalty_v40(c: &mut Criterion) {
    let qr = encode(&digits(7089), ECLevel::L).unwrap();
    c.bench_function("mask_penalty_177x177", |b| {
        b.iter(|| evaluate(black_box(&qr.matrix)))
    });
}

criterion_group!(
    benches,
    bench_encode_small,
    bench_encode_medium,
    bench_encode_version_40,
    bench_rs_block,
    bench_penalty_v40
);
criterion_main!(benches);
