use bezier_blossom_viewer::app::AutoFit;
use bezier_blossom_viewer::{
    blossom, build_pyramid, evaluate, sample, Camera2D, Point, SamplingPolicy,
};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

fn build_control_points(count: usize) -> Vec<Point> {
    (0..count)
        .map(|i| {
            let x = i as f64 * 60.0 - 300.0;
            let y = if i % 2 == 0 { 150.0 } else { -150.0 };
            Point::new(x, y)
        })
        .collect()
}

fn bench_evaluation(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluation");

    for &count in &[4usize, 8, 16] {
        let ctrl = build_control_points(count);

        group.bench_with_input(BenchmarkId::new("build_pyramid", count), &ctrl, |b, ctrl| {
            b.iter(|| black_box(build_pyramid(black_box(ctrl), black_box(0.3)).depth()))
        });

        group.bench_with_input(BenchmarkId::new("evaluate", count), &ctrl, |b, ctrl| {
            b.iter(|| black_box(evaluate(black_box(ctrl), black_box(0.3))))
        });
    }

    group.finish();
}

fn bench_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("sampling");
    let ctrl = build_control_points(6);

    for &scale in &[0.2f64, 1.0, 6.0] {
        let policy = SamplingPolicy::for_scale(scale);
        group.bench_with_input(BenchmarkId::new("sample", scale), &policy, |b, policy| {
            b.iter(|| {
                let points: Vec<Point> = sample(black_box(&ctrl), *policy).collect();
                black_box(points.len())
            })
        });
    }

    group.finish();
}

fn bench_blossom(c: &mut Criterion) {
    let ctrl = [
        Point::new(-320.0, 170.0),
        Point::new(-120.0, -190.0),
        Point::new(120.0, -190.0),
        Point::new(320.0, 170.0),
    ];

    c.bench_function("blossom_cubic", |b| {
        b.iter(|| black_box(blossom(black_box(&ctrl), 0.5, 0.6, 0.8).value))
    });
}

fn bench_auto_fit(c: &mut Criterion) {
    let ctrl = build_control_points(8);
    let points: Vec<Point> = sample(&ctrl, SamplingPolicy::FIT).collect();
    let viewport = Point::new(1280.0, 720.0);

    c.bench_function("auto_fit_target", |b| {
        let fit = AutoFit::new();
        let camera = Camera2D::new();
        b.iter(|| {
            let target = fit.compute_target(black_box(points.iter().copied()), viewport, &camera);
            black_box(target.scale)
        })
    });
}

criterion_group!(
    core_benches,
    bench_evaluation,
    bench_sampling,
    bench_blossom,
    bench_auto_fit
);
criterion_main!(core_benches);
