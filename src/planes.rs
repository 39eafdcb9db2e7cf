// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Contains the CoordinateTable, which describes the relationship
//! between a square integral plane with an origin at 0,0 and a fixed
//! window on the complex plane.  The real axis runs from -1.5 to 0.5
//! and the imaginary axis from -1.0 to 1.0, both half-open, sampled
//! once per pixel.
use errors::RenderError;
use num::Complex;

/// The left edge of the window on the real axis.
pub const REAL_ORIGIN: f64 = -1.5;

/// The lower edge of the window on the imaginary axis.
pub const IMAG_ORIGIN: f64 = -1.0;

/// The width (and height) of the window on the complex plane.
pub const SPAN: f64 = 2.0;

/// Pixels are packed into bytes along a row, most significant bit
/// first.
pub const PIXELS_PER_BYTE: usize = 8;

/// The side length of a square image, known to pack into whole bytes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Dimension(usize);

impl Dimension {
    /// Rejects zero and anything that is not a multiple of 8.
    pub fn new(size: usize) -> Result<Dimension, RenderError> {
        if size == 0 || size % PIXELS_PER_BYTE != 0 {
            return Err(RenderError::InvalidDimension(size));
        }
        Ok(Dimension(size))
    }

    /// The side length in pixels.
    pub fn get(self) -> usize {
        self.0
    }

    /// The number of bytes in one packed row.
    pub fn row_bytes(self) -> usize {
        self.0 / PIXELS_PER_BYTE
    }
}

/// Describes the column and row of a pixel on the integral plane.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pixel(pub usize, pub usize);

/// The precomputed coordinates of every column and every row.  Built
/// once per render and only ever read afterwards, so the workers all
/// borrow the same table.
#[derive(Debug)]
pub struct CoordinateTable {
    dimension: Dimension,
    real: Vec<f64>,
    imag: Vec<f64>,
}

impl CoordinateTable {
    /// Samples the window at `2.0 / N` intervals along both axes.
    pub fn new(dimension: Dimension) -> CoordinateTable {
        let size = dimension.get();
        let step = SPAN / size as f64;
        let axis = |origin: f64| -> Vec<f64> {
            (0..size).map(|i| i as f64 * step + origin).collect()
        };

        CoordinateTable {
            dimension,
            real: axis(REAL_ORIGIN),
            imag: axis(IMAG_ORIGIN),
        }
    }

    /// The dimension the table was built for.
    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// The real part of every column, left to right.
    pub fn real(&self) -> &[f64] {
        &self.real
    }

    /// The imaginary part of every row, top to bottom.
    pub fn imag(&self) -> &[f64] {
        &self.imag
    }

    /// The number of samples along each axis.
    pub fn len(&self) -> usize {
        self.dimension.get()
    }

    /// Describes that the table is of a size.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Given a pixel on the integral plane, return the point on the
    /// complex plane that it samples.
    pub fn pixel_to_point(&self, pixel: &Pixel) -> Complex<f64> {
        Complex::new(self.real[pixel.0], self.imag[pixel.1])
    }
}
