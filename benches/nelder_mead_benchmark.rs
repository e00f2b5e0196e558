use amoeba::{
    algorithms::{NelderMead, NelderMeadConfig},
    core::Bounds,
    test_functions::{CrossedParabolas, Rosenbrock},
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn nelder_mead_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Nelder Mead");
    for n in [2, 3, 4, 5] {
        group.bench_with_input(BenchmarkId::new("Rosenbrock", n), &n, |b, ndim| {
            let problem = Rosenbrock { n: *ndim };
            let mut solver = NelderMead::new(*ndim, &problem, None)
                .unwrap()
                .with_config(NelderMeadConfig::default().with_max_iterations(10_000));
            let x0 = vec![5.0; *ndim];
            b.iter(|| {
                let result = solver.search(&x0, 1e-10, 1.0).unwrap();
                black_box(result.min);
            });
        });
        group.bench_with_input(
            BenchmarkId::new("Rosenbrock (adaptive)", n),
            &n,
            |b, ndim| {
                let problem = Rosenbrock { n: *ndim };
                let mut solver = NelderMead::new(*ndim, &problem, None)
                    .unwrap()
                    .with_config(
                        NelderMeadConfig::default()
                            .with_max_iterations(10_000)
                            .with_adaptive(*ndim),
                    );
                let x0 = vec![5.0; *ndim];
                b.iter(|| {
                    let result = solver.search(&x0, 1e-10, 1.0).unwrap();
                    black_box(result.min);
                });
            },
        );
    }
    group.bench_function("Crossed Parabolas (bounded)", |b| {
        let problem = CrossedParabolas::default();
        let bounds: Bounds = vec![(-600.0, 600.0), (-600.0, 600.0)].into();
        let mut solver = NelderMead::new(2, &problem, Some(&bounds))
            .unwrap()
            .with_config(NelderMeadConfig::default().with_max_iterations(100_000));
        b.iter(|| {
            let result = solver.search(&[1.0, 1.0], 1e-12, 1.0).unwrap();
            black_box(result.min);
        });
    });
    group.finish();
}

criterion_group!(benches, nelder_mead_benchmark);
criterion_main!(benches);
