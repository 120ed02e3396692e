//! Benchmarks for the raster hot paths.

use criterion::{criterion_group, criterion_main, Criterion};

use easel_core::Color;
use easel_graphics::{Canvas, PixelBuffer, RasterSurface};

fn bench_fill_rect(c: &mut Criterion) {
    let mut canvas = Canvas::new(640, 480);
    c.bench_function("fill_rect_640x480", |b| {
        b.iter(|| canvas.fill_rect(0.0, 0.0, 640.0, 480.0, Color::rgb(10, 20, 30)))
    });
}

fn bench_draw_line(c: &mut Criterion) {
    let mut canvas = Canvas::new(640, 480);
    c.bench_function("draw_line_diagonal", |b| {
        b.iter(|| canvas.draw_line(0.0, 0.0, 639.0, 479.0, Color::WHITE, 1.0))
    });
    c.bench_function("draw_line_thick", |b| {
        b.iter(|| canvas.draw_line(0.0, 0.0, 639.0, 479.0, Color::WHITE, 4.0))
    });
}

fn bench_set_pixel(c: &mut Criterion) {
    let canvas = Canvas::with_density(640, 480, 2);
    let mut stage = PixelBuffer::new();
    stage.load_from(&canvas);
    c.bench_function("set_pixel_density_2", |b| {
        b.iter(|| {
            for i in 0..1000 {
                stage.set_pixel((i % 640) as f32, (i / 640) as f32, 640, 480, Color::RED, 2);
            }
        })
    });
}

criterion_group!(benches, bench_fill_rect, bench_draw_line, bench_set_pixel);
criterion_main!(benches);
