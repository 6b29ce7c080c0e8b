mod common;

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;

use common::random_number;
use positional::Base;

const DIGIT_COUNTS: [usize; 3] = [16, 256, 4096];

fn bench_arithmetic(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    let mut group = c.benchmark_group("arithmetic");

    for base in [Base::Decimal, Base::Binary] {
        for len in DIGIT_COUNTS {
            let lhs = random_number(&mut rng, base, len);
            let rhs = random_number(&mut rng, base, len / 2);
            let label = format!("{base}/{len}");

            group.bench_with_input(BenchmarkId::new("add", &label), &(&lhs, &rhs), |b, (l, r)| {
                b.iter(|| black_box(l.add(r).expect("add should succeed")))
            });
            group.bench_with_input(
                BenchmarkId::new("multiply", &label),
                &(&lhs, &rhs),
                |b, (l, r)| b.iter(|| black_box(l.multiply(r).expect("multiply should succeed"))),
            );
            group.bench_with_input(
                BenchmarkId::new("divide", &label),
                &(&lhs, &rhs),
                |b, (l, r)| b.iter(|| black_box(l.divide(r).expect("divide should succeed"))),
            );
        }
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(20);
    targets = bench_arithmetic
}
criterion_main!(benches);
