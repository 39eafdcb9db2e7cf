#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Mandelbrot bitmap renderer
//!
//! Renders the Mandelbrot set over a fixed window of the complex plane
//! (real -1.5 to 0.5, imaginary -1.0 to 1.0) into a square, packed,
//! one-bit-per-pixel portable bitmap.  A pixel is black if its point
//! never leaves a radius of 2 within fifty iterations of
//! `z = z * z + c`.
//!
//! The work is spread across a pool of threads one row at a time: the
//! rows along the edge of the set are far more expensive than the rest,
//! so every worker keeps claiming the next unrendered row until none
//! are left.  The output is identical for any number of threads.
//!
//! ```
//! let bitmap = mandelbrot::render(64).unwrap();
//! assert_eq!(bitmap.header(), b"P4\n64 64\n");
//! assert_eq!(bitmap.pixels().len(), 64 * 64 / 8);
//! ```

extern crate crossbeam;
#[macro_use]
extern crate failure;
#[macro_use]
extern crate log;
extern crate num;
extern crate num_cpus;

pub mod bitmap;
pub mod errors;
pub mod kernel;
pub mod planes;
pub mod renderer;
pub mod scheduler;

pub use bitmap::Bitmap;
pub use errors::RenderError;
pub use renderer::{render, render_with_pool, MandelbrotRenderer};
pub use scheduler::{default_pool_size, WorkCursor};
