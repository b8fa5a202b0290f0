use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ksuid::{parse, Ksuid, KsuidGenerator};

pub fn ksuid_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("KSUID Generation");

    let generator = KsuidGenerator::new();

    group.bench_function("next_id", |b| {
        b.iter(|| black_box(generator.next_id()));
    });

    group.bench_function("generate_string", |b| {
        b.iter(|| black_box(generator.generate()));
    });

    group.finish();
}

pub fn ksuid_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("KSUID Parsing");

    let encoded = KsuidGenerator::new().generate();

    group.bench_function("parse", |b| {
        b.iter(|| black_box(parse(black_box(&encoded)).unwrap()));
    });

    group.bench_function("from_str", |b| {
        b.iter(|| black_box(black_box(&encoded).parse::<Ksuid>().unwrap()));
    });

    group.finish();
}

criterion_group!(benches, ksuid_generation, ksuid_parsing);
criterion_main!(benches);
