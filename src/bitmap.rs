// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Assembles rendered rows into a binary portable bitmap.
//!
//! The output is a `P4` image: an ASCII header giving the format and
//! the dimensions, then every row in order, eight pixels to the byte,
//! most significant bit first.  A set bit is black, and black is a
//! member of the set.

use planes::PIXELS_PER_BYTE;
use std::io::{self, Write};

/// The magic number of a binary portable bitmap.
pub const FORMAT_TAG: &str = "P4";

/// The header of a square `P4` image.
pub fn header(size: usize) -> String {
    format!("{}\n{} {}\n", FORMAT_TAG, size, size)
}

/// Index-addressed storage for packed rows.  Rows may arrive in any
/// order; each one lands in its own slot.  The storage already carries
/// the image header in front of the first row, so it becomes the
/// finished bitmap without another copy.
#[derive(Debug)]
pub struct RowBuffer {
    stride: usize,
    offset: usize,
    data: Vec<u8>,
    filled: Vec<bool>,
}

impl RowBuffer {
    /// Space for `rows` rows of `stride` bytes each, behind the header
    /// of a square image `stride * 8` pixels wide.
    pub fn new(rows: usize, stride: usize) -> RowBuffer {
        let header = header(stride * PIXELS_PER_BYTE);
        let offset = header.len();
        let mut data = Vec::with_capacity(offset + rows * stride);
        data.extend_from_slice(header.as_bytes());
        data.resize(offset + rows * stride, 0);
        RowBuffer {
            stride,
            offset,
            data,
            filled: vec![false; rows],
        }
    }

    /// Stores row `y`.  Each row is written once.
    pub fn put(&mut self, y: usize, row: &[u8]) {
        assert_eq!(row.len(), self.stride);
        debug_assert!(!self.filled[y], "row {} rendered twice", y);
        let start = self.offset + y * self.stride;
        self.data[start..start + self.stride].copy_from_slice(row);
        self.filled[y] = true;
    }

    /// Row `y` as stored so far.
    pub fn row(&self, y: usize) -> &[u8] {
        let start = self.offset + y * self.stride;
        &self.data[start..start + self.stride]
    }

    /// True once every row has been stored.
    pub fn is_complete(&self) -> bool {
        self.filled.iter().all(|&f| f)
    }

    /// The number of rows.
    pub fn rows(&self) -> usize {
        self.filled.len()
    }
}

/// A finished `P4` image: the header followed by the packed rows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bitmap {
    size: usize,
    header_len: usize,
    data: Vec<u8>,
}

impl Bitmap {
    /// Takes over the storage of a complete set of rows, header and
    /// all.  Every row must already have been stored.
    pub fn assemble(size: usize, rows: RowBuffer) -> Bitmap {
        assert!(rows.is_complete(), "assembling a bitmap with missing rows");
        assert_eq!(rows.rows(), size);
        assert_eq!(rows.stride * PIXELS_PER_BYTE, size);

        Bitmap {
            size,
            header_len: rows.offset,
            data: rows.data,
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> usize {
        self.size
    }

    /// Height in pixels.
    pub fn height(&self) -> usize {
        self.size
    }

    /// The text header, `"P4\n<width> <height>\n"`.
    pub fn header(&self) -> &[u8] {
        &self.data[..self.header_len]
    }

    /// The packed rows, without the header.
    pub fn pixels(&self) -> &[u8] {
        &self.data[self.header_len..]
    }

    /// Packed row `y`.
    pub fn row(&self, y: usize) -> &[u8] {
        let stride = self.size / PIXELS_PER_BYTE;
        &self.pixels()[y * stride..(y + 1) * stride]
    }

    /// True if the pixel at column `x`, row `y` is a member of the set.
    pub fn is_member(&self, x: usize, y: usize) -> bool {
        let byte = self.row(y)[x / PIXELS_PER_BYTE];
        (byte & (0x80 >> (x % PIXELS_PER_BYTE))) != 0
    }

    /// The number of black pixels.
    pub fn member_count(&self) -> usize {
        self.pixels()
            .iter()
            .map(|byte| byte.count_ones() as usize)
            .sum()
    }

    /// The whole image, header included.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Consumes the image, returning the whole buffer.
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Writes the image verbatim.
    pub fn write_to<W: Write>(&self, mut out: W) -> io::Result<()> {
        out.write_all(&self.data)?;
        out.flush()
    }
}
