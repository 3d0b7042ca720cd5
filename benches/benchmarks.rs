extern crate bfrunlib;
extern crate criterion;
extern crate rand;

use criterion::{criterion_group, criterion_main, Benchmark, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_target(len: usize) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(17);
    (0..len).map(|_| rng.gen()).collect()
}

fn round_trip_benchmark(c: &mut Criterion) {
    let target = random_target(4096);
    let program = bfrunlib::synthesize(&target);
    c.bench(
        "random_4k",
        Benchmark::new("synthesize", move |b| {
            b.iter(|| bfrunlib::synthesize(&target))
        })
        .with_function("interpret", move |b| {
            b.iter(|| {
                bfrunlib::interpret(&program, b"").expect("synthesized program must run")
            })
        })
        .sample_size(20),
    );
}

criterion_group!(benches, round_trip_benchmark);
criterion_main!(benches);
