// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

#[macro_use]
extern crate criterion;
extern crate mandelbrot;

use criterion::{black_box, Criterion};
use mandelbrot::MandelbrotRenderer;

fn row(c: &mut Criterion) {
    let renderer = MandelbrotRenderer::new(1024).unwrap();
    // The middle row crosses the widest part of the set.
    c.bench_function("render_row 1024 middle", move |b| {
        b.iter(|| renderer.render_row(black_box(512)))
    });
}

fn single(c: &mut Criterion) {
    c.bench_function("render_single 256", |b| {
        b.iter(|| MandelbrotRenderer::new(black_box(256)).unwrap().render_single())
    });
}

fn pooled(c: &mut Criterion) {
    let threads = mandelbrot::default_pool_size();
    c.bench_function("render 256 default pool", move |b| {
        b.iter(|| MandelbrotRenderer::new(black_box(256)).unwrap().render(threads))
    });
}

criterion_group!(benches, row, single, pooled);
criterion_main!(benches);
