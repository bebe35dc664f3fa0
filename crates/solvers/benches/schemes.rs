use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use odekit_core::Grid;
use odekit_solvers::{
    compare,
    fixed_step::{self, Method},
};

// Logistic growth, y' = y (1 - y).
fn logistic(_x: f64, y: f64) -> f64 {
    y * (1.0 - y)
}

fn logistic_exact(x: f64) -> f64 {
    1.0 / (1.0 + 9.0 * (-x).exp())
}

fn bench_schemes(c: &mut Criterion) {
    let mut group = c.benchmark_group("fixed_step");
    let Ok(grid) = Grid::new(0.0, 10.0, 1e-3) else {
        return;
    };

    for method in Method::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(method.key()), &grid, |b, grid| {
            b.iter(|| fixed_step::solve_unobserved(method, &logistic, black_box(grid), 0.1));
        });
    }

    group.finish();
}

fn bench_comparison(c: &mut Criterion) {
    c.bench_function("solve_all_with_exact", |b| {
        b.iter(|| {
            compare::solve_all(
                &logistic,
                0.0,
                0.1,
                black_box(10.0),
                1e-3,
                Some(&logistic_exact),
            )
        });
    });
}

criterion_group!(benches, bench_schemes, bench_comparison);
criterion_main!(benches);
