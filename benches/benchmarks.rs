use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;
use vector_wire::{decode_binary, decode_text, encode_binary, encode_text, VectorValue};

fn random_vector(dim: usize) -> Vec<f32> {
    let mut rng = rand::thread_rng();
    (0..dim).map(|_| rng.gen_range(-1.0..1.0)).collect()
}

fn codec_benchmarks(c: &mut Criterion) {
    let value = VectorValue::from(random_vector(1024));
    let text = encode_text(&value, Some(1024)).unwrap().unwrap();
    let bytes = encode_binary(&value).unwrap().unwrap();

    c.bench_function("encode_text_1024", |b| {
        b.iter(|| encode_text(black_box(&value), Some(1024)).unwrap())
    });

    c.bench_function("decode_text_1024", |b| {
        b.iter(|| decode_text(VectorValue::RawText(black_box(text.clone()))).unwrap())
    });

    c.bench_function("encode_binary_1024", |b| {
        b.iter(|| encode_binary(black_box(&value)).unwrap())
    });

    c.bench_function("decode_binary_1024", |b| {
        b.iter(|| decode_binary(VectorValue::RawBinary(black_box(bytes.clone()))).unwrap())
    });
}

criterion_group!(benches, codec_benchmarks);
criterion_main!(benches);
