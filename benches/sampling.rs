use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use cup_scene::backends::Exporter;
use cup_scene::shapes::{cup_handle_curve, cup_surface};
use cup_scene::{cup_profile, CupScene, Scene, SceneConfig};

/// Benchmark: single surface evaluation
fn bench_cup_profile(c: &mut Criterion) {
    c.bench_function("cup_profile", |b| {
        b.iter(|| black_box(cup_profile(black_box(1.5), black_box(2.0))))
    });
}

/// Benchmark: surface sampling at increasing resolution
fn bench_surface_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("surface_sampling");

    for resolution in [16u32, 32, 64, 128] {
        let config = SceneConfig {
            surface_resolution: resolution,
            ..Default::default()
        };
        let surface = cup_surface(&config).expect("valid surface config");

        group.bench_with_input(BenchmarkId::from_parameter(resolution), &surface, |b, surface| {
            b.iter(|| black_box(surface.sample()))
        });
    }

    group.finish();
}

/// Benchmark: handle sampling
fn bench_curve_sampling(c: &mut Criterion) {
    let curve = cup_handle_curve(&SceneConfig::default()).expect("valid curve config");
    c.bench_function("handle_sampling", |b| b.iter(|| black_box(curve.sample())));
}

/// Benchmark: whole scene through the exporter
fn bench_full_export(c: &mut Criterion) {
    let scene = CupScene::default();
    c.bench_function("full_export", |b| {
        b.iter(|| {
            let mut exporter = Exporter::new();
            scene.construct(&mut exporter).expect("scene constructs");
            black_box(exporter.objects().len())
        })
    });
}

criterion_group!(
    benches,
    bench_cup_profile,
    bench_surface_sampling,
    bench_curve_sampling,
    bench_full_export
);
criterion_main!(benches);
