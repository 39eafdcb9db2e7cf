// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Hands rows out to a fixed pool of worker threads.
//!
//! Rows near the edge of the set cost many times more than rows deep
//! inside or far outside it, so rows are not divided into contiguous
//! stripes up front.  Each worker instead claims the next unclaimed
//! row from a shared cursor, one row at a time, until the rows run
//! out.  Claiming a row is a single atomic increment; nothing else is
//! shared between the workers while they run.

use bitmap::RowBuffer;
use crossbeam;
use num_cpus;
use std::panic;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

/// The next row to be handed out.  Every index below the row count is
/// returned by `claim` exactly once, whatever the number of threads.
#[derive(Debug, Default)]
pub struct WorkCursor {
    next: AtomicUsize,
}

impl WorkCursor {
    /// A cursor with nothing claimed yet.
    pub fn new() -> WorkCursor {
        WorkCursor {
            next: AtomicUsize::new(0),
        }
    }

    /// Claims the next row, or returns `None` once every row below
    /// `rows` has been handed out.
    pub fn claim(&self, rows: usize) -> Option<usize> {
        let y = self.next.fetch_add(1, Ordering::Relaxed);
        if y < rows {
            Some(y)
        } else {
            None
        }
    }
}

/// Twice the number of logical CPUs.
pub fn default_pool_size() -> usize {
    2 * num_cpus::get()
}

/// The number of workers actually started: at least one, and never
/// more than there are rows to claim.
pub fn effective_pool_size(requested: usize, rows: usize) -> usize {
    if requested == 0 {
        warn!("a pool of zero workers was requested; using one");
        1
    } else if requested > rows.max(1) {
        warn!(
            "a pool of {} workers was requested for {} rows; using {}",
            requested,
            rows,
            rows.max(1)
        );
        rows.max(1)
    } else {
        requested
    }
}

/// The rows one worker claimed, in claim order, packed back to back.
struct Claimed {
    rows: Vec<usize>,
    data: Vec<u8>,
}

/// A worker's whole life: claim, render, repeat.  Rows are rendered
/// into one growing buffer per worker.
fn drain<F>(cursor: &WorkCursor, rows: usize, stride: usize, render: &F) -> Claimed
where
    F: Fn(usize, &mut [u8]),
{
    let mut claimed = Claimed {
        rows: vec![],
        data: vec![],
    };
    while let Some(y) = cursor.claim(rows) {
        let start = claimed.data.len();
        claimed.data.resize(start + stride, 0);
        render(y, &mut claimed.data[start..]);
        claimed.rows.push(y);
    }
    claimed
}

/// Launches up to `pool_size` workers that claim rows from `cursor`
/// and render each one with `render`, then blocks until every worker
/// has finished.  `render` is handed the row index and a zeroed buffer
/// of `stride` bytes.
///
/// Each worker renders into its own buffer, and after the join every
/// row is copied once into its slot in the returned `RowBuffer`.  The
/// image therefore exists twice at the peak, once spread across the
/// workers and once in the result.
pub fn render_rows<F>(
    rows: usize,
    stride: usize,
    pool_size: usize,
    cursor: &WorkCursor,
    render: F,
) -> RowBuffer
where
    F: Fn(usize, &mut [u8]) + Sync,
{
    let pool_size = effective_pool_size(pool_size, rows);
    debug!("rendering {} rows with {} workers", rows, pool_size);

    let render = &render;
    let finished = crossbeam::scope(|spawner| {
        let handles: Vec<_> = (0..pool_size)
            .map(|_| spawner.spawn(move |_| drain(cursor, rows, stride, render)))
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join())
            .collect::<thread::Result<Vec<_>>>()
    })
    .and_then(|joined| joined)
    .unwrap_or_else(|payload| panic::resume_unwind(payload));

    let mut buffer = RowBuffer::new(rows, stride);
    for (worker, claimed) in finished.into_iter().enumerate() {
        trace!("worker {} rendered {} rows", worker, claimed.rows.len());
        for (&y, row) in claimed.rows.iter().zip(claimed.data.chunks(stride)) {
            buffer.put(y, row);
        }
    }
    buffer
}
