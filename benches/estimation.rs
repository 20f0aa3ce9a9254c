use criterion::{black_box, criterion_group, criterion_main, Criterion};
use nalgebra::DVector;
use olsrs::{estimate, fit_logit, LinearDgp, OptimizerOptions};

fn bench_ols(c: &mut Criterion) {
    let dgp = LinearDgp::new(DVector::from_vec(vec![0.5, 1.0, -2.0, 0.25]), 1.0)
        .expect("valid process");
    let data = dgp.sample(1_000, 42).expect("valid sample");

    c.bench_function("ols_white_1000x4", |b| {
        b.iter(|| estimate(black_box(data.y()), black_box(data.x())).expect("full rank"))
    });
}

fn bench_logit(c: &mut Criterion) {
    let dgp = LinearDgp::new(DVector::from_vec(vec![-0.2, 1.5]), 0.0).expect("valid process");
    let data = dgp.sample(1_000, 7).expect("valid sample");
    let y = data.x().column(1).map(|v| if v > 0.5 { 1.0 } else { 0.0 });
    let mut x = data.x().clone();
    for i in 0..x.nrows() {
        // Jitter so the outcome is not perfectly separated.
        x[(i, 1)] += 0.3 * ((i % 7) as f64 - 3.0) / 3.0;
    }

    c.bench_function("logit_1000x2", |b| {
        b.iter(|| {
            fit_logit(black_box(&y), black_box(&x), None, &OptimizerOptions::default())
                .expect("converged")
        })
    });
}

criterion_group!(benches, bench_ols, bench_logit);
criterion_main!(benches);
