//! Benchmarks for the recursive fern generator, both on its own (recording
//! commands) and rasterized into an image buffer.
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fractal_fern::core::{raster_surface::RasterSurface, surface::CommandRecorder};
use fractal_fern::fern::{
    fractal_fern::{generate_fern, FernParams},
    scene::{render_scene, INITIAL_HEADING},
};
use nalgebra::Vector2;
use rand::{rngs::StdRng, SeedableRng};

const PARAMS: FernParams = FernParams {
    size: 40.0,
    redux: 1.8,
    turn_bias: 0.5,
};

fn benchmark(c: &mut Criterion) {
    c.bench_function("generate_fern_commands", |b| {
        b.iter(|| {
            let mut recorder = CommandRecorder::new(800.0, 600.0);
            let mut rng = StdRng::seed_from_u64(0);
            generate_fern(
                &PARAMS,
                Vector2::new(400.0, 500.0),
                INITIAL_HEADING,
                &mut rng,
                &mut recorder,
            );
            black_box(recorder.commands.len());
        });
    });

    c.bench_function("rasterize_scene", |b| {
        b.iter(|| {
            let mut surface = RasterSurface::new([800, 600]);
            let mut rng = StdRng::seed_from_u64(0);
            render_scene(&PARAMS, &mut rng, &mut surface);
            black_box(surface.counts.total());
        });
    });
}

criterion_group!(benches, benchmark);
criterion_main!(benches);
