// Drawing Benchmarks
// Performance benchmarks for the drawing primitives on a headless screen

use criterion::{criterion_group, criterion_main, Criterion};
use sprite64_rs::{Screen, VideoPreset};
use std::hint::black_box;

/// Benchmark the shape primitives
/// Measures the pixel-buffer writes plus the hardware blits each one emits
fn bench_shapes(c: &mut Criterion) {
    let mut group = c.benchmark_group("shapes");

    group.bench_function("cls", |b| {
        let mut screen = Screen::new(VideoPreset::LowRes, 0);
        b.iter(|| {
            screen.begin_frame();
            screen.cls(black_box(Some(1)));
            screen.end_frame();
        });
    });

    group.bench_function("rectfill_64x64", |b| {
        let mut screen = Screen::new(VideoPreset::LowRes, 0);
        b.iter(|| {
            screen.begin_frame();
            screen.rectfill(10.0, 10.0, 73.0, 73.0, black_box(Some(8)));
            screen.end_frame();
        });
    });

    group.bench_function("line_diagonal", |b| {
        let mut screen = Screen::new(VideoPreset::LowRes, 0);
        b.iter(|| {
            screen.begin_frame();
            screen.line(0.0, 0.0, black_box(319.0), black_box(239.0), Some(12));
            screen.end_frame();
        });
    });

    group.bench_function("circfill_r32", |b| {
        let mut screen = Screen::new(VideoPreset::LowRes, 0);
        b.iter(|| {
            screen.begin_frame();
            screen.circfill(160.0, 120.0, black_box(32.0), Some(9));
            screen.end_frame();
        });
    });

    group.finish();
}

/// Benchmark text rendering throughput
fn bench_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("text");

    group.bench_function("print_line", |b| {
        let mut screen = Screen::new(VideoPreset::LowRes, 0);
        b.iter(|| {
            screen.begin_frame();
            screen.print_at(black_box("THE QUICK BROWN FOX JUMPS OVER"), 0.0, 0.0);
            screen.end_frame();
        });
    });

    group.finish();
}

criterion_group!(benches, bench_shapes, bench_text);
criterion_main!(benches);
