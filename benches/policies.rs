use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use pagesim::Policy;

/// Deterministic reference string with some locality.
fn reference_string(len: usize, pages: u32) -> Vec<u32> {
    let mut state: u32 = 0x9E37_79B9;
    (0..len)
        .map(|i| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            if i % 4 == 0 {
                state % pages
            } else {
                (i as u32 / 8) % pages
            }
        })
        .collect()
}

fn bench_policies(c: &mut Criterion) {
    let mut group = c.benchmark_group("policies");
    for len in [256usize, 2048] {
        let pages = reference_string(len, 32);
        for policy in Policy::ALL {
            group.bench_with_input(BenchmarkId::new(policy.name(), len), &pages, |b, pages| {
                b.iter(|| policy.simulate(black_box(pages), 8, false).unwrap().faults)
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_policies);
criterion_main!(benches);
