//! Cost of handing a finished frame to an RGBA surface.
//!
//! Run with: cargo bench --bench presenter_copy

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use mandelbrot_explorer::{copy_frame_to_rgba, MandelbrotEngine};

fn bench_copy(c: &mut Criterion) {
    let mut group = c.benchmark_group("presenter_copy");

    for (width, height) in [(800, 600), (1920, 1080)] {
        let mut engine = MandelbrotEngine::new(width, height).unwrap();
        engine.render();
        let mut surface = vec![0u8; engine.frame_buffer().len() * 4];

        group.bench_with_input(
            BenchmarkId::new("copy_frame_to_rgba", format!("{}x{}", width, height)),
            engine.frame_buffer(),
            |b, frame| {
                b.iter(|| copy_frame_to_rgba(black_box(frame), black_box(&mut surface)));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("to_rgb_bytes", format!("{}x{}", width, height)),
            engine.frame_buffer(),
            |b, frame| {
                b.iter(|| black_box(frame.to_rgb_bytes()));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_copy);
criterion_main!(benches);
