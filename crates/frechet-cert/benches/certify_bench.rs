//! Criterion benchmarks for the certifying decider.
//! Focus sizes: curve lengths in {8, 16, 32, 64}.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use frechet_cert::api::{
    decide_and_certify, draw_walk_curve, less_than, no_certificate, yes_certificate, Curve,
    GeomCfg, ReplayToken, WalkCfg,
};

fn sample_pair(len: usize, seed: u64) -> (Curve, Curve) {
    let cfg = WalkCfg {
        len,
        ..WalkCfg::default()
    };
    let c1 = draw_walk_curve(cfg, ReplayToken { seed, index: 0 });
    // Anchor the endpoints so the decision is interior-driven rather than
    // settled by the endpoint short-circuit.
    let mut pts = draw_walk_curve(cfg, ReplayToken { seed, index: 1 })
        .points()
        .to_vec();
    pts[0] = c1.first();
    let last = pts.len() - 1;
    pts[last] = c1.last();
    (c1, Curve::new(pts))
}

fn bench_certify(c: &mut Criterion) {
    let mut group = c.benchmark_group("certify");
    for &len in &[8usize, 16, 32, 64] {
        let (c1, c2) = sample_pair(len, 43);
        // A threshold near the middle of the decision range keeps both
        // outcomes represented across sizes.
        let delta = 1.5;
        group.bench_with_input(BenchmarkId::new("decide_and_certify", len), &len, |b, _| {
            b.iter(|| decide_and_certify(&c1, &c2, delta))
        });
        group.bench_with_input(BenchmarkId::new("yes_side", len), &len, |b, _| {
            b.iter(|| yes_certificate(&c1, &c2, delta, GeomCfg::default()))
        });
        group.bench_with_input(BenchmarkId::new("no_side", len), &len, |b, _| {
            b.iter(|| no_certificate(&c1, &c2, delta, GeomCfg::default()))
        });
        group.bench_with_input(BenchmarkId::new("plain_decider", len), &len, |b, _| {
            b.iter(|| less_than(&c1, &c2, delta))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_certify);
criterion_main!(benches);
