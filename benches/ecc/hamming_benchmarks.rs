use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use hamming::ecc::{decode, encode, Bits};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_payload(len: usize) -> Bits {
    let mut rng = StdRng::seed_from_u64(42);
    (0..len).map(|_| rng.gen_bool(0.5)).collect()
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("hamming_encode");

    for size in [11, 57, 247, 1013, 4083].iter() {
        let payload = random_payload(*size);
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &payload, |b, payload| {
            b.iter(|| encode(black_box(payload)).unwrap())
        });
    }

    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("hamming_decode");

    for size in [11, 57, 247, 1013, 4083].iter() {
        let mut codeword = encode(&random_payload(*size)).unwrap();
        codeword.flip(1).unwrap();
        group.throughput(Throughput::Elements(codeword.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &codeword, |b, codeword| {
            b.iter(|| decode(black_box(codeword.as_bits())).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode);
criterion_main!(benches);
