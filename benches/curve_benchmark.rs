#![allow(clippy::expect_used, clippy::unwrap_used, missing_docs)]
//! Benchmark for circle and rose curve rasterization.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use trueno_raster::prelude::*;
use trueno_raster::render::{maurer_samples, rose_samples};

fn circle_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("circle");

    for radius in [10, 100, 300] {
        let mut canvas = Canvas::new(640, 640).expect("canvas should be created");
        canvas.color(255, 255, 255);

        group.bench_with_input(BenchmarkId::new("outline", radius), &radius, |b, &radius| {
            b.iter(|| {
                canvas.begin(PrimitiveKind::Circle).expect("session should open");
                canvas.center(320, 320, black_box(radius)).expect("center accepted");
                canvas.end()
            });
        });

        let fill = CurveParams {
            fill: true,
            ..CurveParams::default()
        };
        group.bench_with_input(BenchmarkId::new("fill", radius), &radius, |b, &radius| {
            b.iter(|| {
                canvas.begin(PrimitiveKind::Circle).expect("session should open");
                canvas
                    .center_with(320, 320, black_box(radius), fill)
                    .expect("center accepted");
                canvas.end()
            });
        });
    }

    group.finish();
}

fn rose_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("rose");

    // Denominator scales the number of periods sampled
    for (n, d) in [(4, 1), (5, 4), (7, 9)] {
        let mut canvas = Canvas::new(640, 640).expect("canvas should be created");
        canvas.color(255, 0, 0);
        let params = CurveParams { n, d, fill: false };

        group.bench_with_input(BenchmarkId::from_parameter(format!("{n}_{d}")), &params, |b, &params| {
            b.iter(|| {
                canvas.begin(PrimitiveKind::Rose).expect("session should open");
                canvas.center_with(320, 320, 300, black_box(params)).expect("center accepted");
                canvas.end()
            });
        });
    }

    group.finish();
}

fn maurer_rose_benchmark(c: &mut Criterion) {
    let mut canvas = Canvas::new(640, 640).expect("canvas should be created");
    canvas.color(255, 255, 255);
    let params = CurveParams {
        n: 6,
        d: 71,
        fill: false,
    };

    c.bench_function("maurer_rose", |b| {
        b.iter(|| {
            canvas.begin(PrimitiveKind::MaurerRose).expect("session should open");
            canvas.center_with(320, 320, 300, black_box(params)).expect("center accepted");
            canvas.end()
        });
    });
}

fn sampling_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("curve_sampling");
    let bounds = Bounds::new(640, 640);
    let center = Point::new(320, 320);

    group.bench_function("rose_5_4", |b| {
        b.iter(|| rose_samples(center, black_box(300), Frequency::new(5, 4), bounds).count());
    });
    group.bench_function("maurer_6_71", |b| {
        b.iter(|| maurer_samples(center, black_box(300), Frequency::new(6, 71), bounds).count());
    });

    group.finish();
}

criterion_group!(
    benches,
    circle_benchmark,
    rose_benchmark,
    maurer_rose_benchmark,
    sampling_benchmark
);
criterion_main!(benches);
