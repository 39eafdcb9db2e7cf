// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

#[macro_use]
extern crate itertools;
extern crate mandelbrot;
extern crate num;
extern crate rand;

use itertools::Itertools;
use mandelbrot::kernel::{escape_time, render_row};
use mandelbrot::planes::Pixel;
use mandelbrot::scheduler::render_rows;
use mandelbrot::{render, render_with_pool, MandelbrotRenderer, RenderError, WorkCursor};
use num::Complex;
use rand::Rng;
use std::sync::Mutex;

#[test]
fn output_does_not_depend_on_pool_size() {
    for (size, pool) in iproduct!(vec![8, 16, 40, 128], vec![2, 3, 8, 33]) {
        let single = render_with_pool(size, 1).unwrap();
        let pooled = render_with_pool(size, pool).unwrap();
        assert_eq!(
            single.as_bytes(),
            pooled.as_bytes(),
            "size {} pool {}",
            size,
            pool
        );
    }
}

#[test]
fn default_pool_matches_single_thread() {
    let renderer = MandelbrotRenderer::new(96).unwrap();
    assert_eq!(render(96).unwrap(), renderer.render_single());
}

#[test]
fn claimed_rows_partition_the_image() {
    let size = 24;
    let renderer = MandelbrotRenderer::new(size).unwrap();
    let table = renderer.table();
    for pool in 1..=size {
        let claimed = Mutex::new(vec![]);
        let rows = render_rows(size, size / 8, pool, &WorkCursor::new(), |y, out| {
            claimed.lock().unwrap().push(y);
            render_row(table, y, out);
        });
        assert!(rows.is_complete());
        let claimed = claimed.into_inner().unwrap();
        assert_eq!(
            claimed.into_iter().sorted().collect::<Vec<_>>(),
            (0..size).collect::<Vec<_>>(),
            "pool {}",
            pool
        );
    }
}

#[test]
fn rows_render_the_same_in_isolation() {
    let size = 256;
    let renderer = MandelbrotRenderer::new(size).unwrap();
    let pooled = renderer.render(6);
    let mut rng = rand::thread_rng();
    for _ in 0..32 {
        let y = rng.gen_range(0, size);
        assert_eq!(renderer.render_row(y).as_slice(), pooled.row(y), "row {}", y);
    }
}

#[test]
fn smallest_image_has_eight_one_byte_rows() {
    let bitmap = render_with_pool(8, 4).unwrap();
    let mut expected = b"P4\n8 8\n".to_vec();
    expected.extend_from_slice(&[0x02, 0x00, 0x0f, 0x2f, 0xff, 0x2f, 0x0f, 0x00]);
    assert_eq!(bitmap.into_bytes(), expected);
}

#[test]
fn invalid_sizes_produce_no_image() {
    for size in &[0, 1, 4, 12, 63, 100] {
        assert_eq!(
            render(*size).err(),
            Some(RenderError::InvalidDimension(*size))
        );
    }
}

#[test]
fn top_left_pixel_fixture() {
    let renderer = MandelbrotRenderer::new(16).unwrap();
    let c = renderer.table().pixel_to_point(&Pixel(0, 0));
    assert_eq!(c, Complex::new(-1.5, -1.0));
    assert_eq!(escape_time(c), Some(2));

    let bitmap = renderer.render(4);
    assert!(!bitmap.is_member(0, 0));
    assert!(bitmap.is_member(12, 0));
}

#[test]
fn sixteen_pixel_fixture() {
    let bitmap = render_with_pool(16, 4).unwrap();
    assert_eq!(
        bitmap.pixels(),
        &[
            0x00, 0x08, 0x00, 0x10, 0x00, 0x10, 0x00, 0x7c, 0x00, 0xfe, 0x01, 0xfe, 0x19, 0xff,
            0x1d, 0xfe, 0xff, 0xfe, 0x1d, 0xfe, 0x19, 0xff, 0x01, 0xfe, 0x00, 0xfe, 0x00, 0x7c,
            0x00, 0x10, 0x00, 0x10,
        ][..]
    );
    assert_eq!(bitmap.member_count(), 104);
}

#[test]
fn member_count_is_plausible() {
    let bitmap = render(64).unwrap();
    let members = bitmap.member_count();
    assert!(members >= 1500 && members <= 1750, "{} members", members);
    assert_eq!(members, 1626);
}

#[test]
fn image_is_symmetric_about_the_real_axis() {
    // Row y samples -1 + y * step; row size - y samples its conjugate.
    let size = 128;
    let bitmap = render(size).unwrap();
    for y in 1..size / 2 {
        assert_eq!(bitmap.row(y), bitmap.row(size - y), "row {}", y);
    }
}
