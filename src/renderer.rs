// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Ties the coordinate tables, the kernel, the scheduler, and the
//! assembler together.

use bitmap::{Bitmap, RowBuffer};
use errors::RenderError;
use kernel;
use planes::{CoordinateTable, Dimension};
use scheduler::{self, WorkCursor};
use std::time::Instant;

/// Holds the coordinate tables for one image size.  The tables are
/// computed once, in `new`, and every row after that only reads them.
#[derive(Debug)]
pub struct MandelbrotRenderer {
    table: CoordinateTable,
}

impl MandelbrotRenderer {
    /// Requires the side length of the (square) image, which must be a
    /// positive multiple of 8.
    pub fn new(size: usize) -> Result<Self, RenderError> {
        let dimension = Dimension::new(size)?;
        Ok(MandelbrotRenderer {
            table: CoordinateTable::new(dimension),
        })
    }

    /// The side length of the image.
    pub fn size(&self) -> usize {
        self.table.len()
    }

    /// The precomputed coordinates.
    pub fn table(&self) -> &CoordinateTable {
        &self.table
    }

    /// Renders a single packed row outside of any pool.
    pub fn render_row(&self, y: usize) -> Vec<u8> {
        let mut row = vec![0u8; self.table.dimension().row_bytes()];
        kernel::render_row(&self.table, y, &mut row);
        row
    }

    /// The main function for single-threaded rendering.
    pub fn render_single(&self) -> Bitmap {
        let size = self.size();
        let mut rows = RowBuffer::new(size, self.table.dimension().row_bytes());
        for y in 0..size {
            rows.put(y, &self.render_row(y));
        }
        Bitmap::assemble(size, rows)
    }

    /// A multi-threaded version of the render function that takes a
    /// thread count.  The output does not depend on the thread count.
    /// Every call hands its rows out from a fresh cursor.
    pub fn render(&self, threads: usize) -> Bitmap {
        let size = self.size();
        let started = Instant::now();
        let table = &self.table;
        let rows = scheduler::render_rows(
            size,
            table.dimension().row_bytes(),
            threads,
            &WorkCursor::new(),
            |y, out| kernel::render_row(table, y, out),
        );
        debug!("rendered {}x{} in {:?}", size, size, started.elapsed());
        Bitmap::assemble(size, rows)
    }
}

/// Renders a `size` by `size` bitmap with the default pool of twice the
/// logical CPU count.
pub fn render(size: usize) -> Result<Bitmap, RenderError> {
    render_with_pool(size, scheduler::default_pool_size())
}

/// Renders a `size` by `size` bitmap with `pool_size` workers.  The size
/// is validated before any worker is started.
pub fn render_with_pool(size: usize, pool_size: usize) -> Result<Bitmap, RenderError> {
    let renderer = MandelbrotRenderer::new(size)?;
    Ok(renderer.render(pool_size))
}
