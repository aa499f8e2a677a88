use graph_core::{sample, CoordinateMapper, Expression, OnEvalError, Origin, Ratio, VisibleDomain};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, black_box};

fn bench_sample(c: &mut Criterion) {
    let mapper = CoordinateMapper::new(Origin::new(400.0, 300.0).expect("origin"), Ratio::new(5).expect("ratio"));
    let mut group = c.benchmark_group("sample");
    for src in ["x^2", "sin(x) * exp(-x/10)", "1/x"] {
        let expr = Expression::parse(src).expect("bench expression");
        for &half in &[13i64, 80i64] {
            let domain = VisibleDomain { xmin: -half, xmax: half };
            group.bench_with_input(BenchmarkId::new(src, format!("pm{half}")), &domain, |b, &d| {
                b.iter(|| {
                    let _ = black_box(sample(&mapper, d, &expr, OnEvalError::Break));
                });
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_sample);
criterion_main!(benches);
