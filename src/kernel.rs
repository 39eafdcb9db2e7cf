// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The escape-time kernel.
//!
//! A point `c` is a member of the set if `z = z * z + c`, starting at
//! zero, stays within a radius of 2 for `MAX_ITERATIONS` steps.  The
//! escape test compares the squared magnitude against 4.0, so no
//! square root is ever taken.  Points that are merely slow to escape
//! are indistinguishable from true members; the cap is a hard stop.
//!
//! Rows are rendered eight pixels per output byte, and the pixels of
//! each byte are evaluated two at a time.  The pairing is only there
//! to keep two independent dependency chains in flight; it agrees bit
//! for bit with `escape_time`, which handles one point at a time.

use num::Complex;
use planes::{CoordinateTable, PIXELS_PER_BYTE};

/// The hard iteration cap.
pub const MAX_ITERATIONS: usize = 50;

/// `|z|^2` above this has escaped.
pub const ESCAPE_NORM_SQR: f64 = 4.0;

const LANES: usize = 2;

/// This is our classic iterator function, which either returns the
/// iteration (counting from 1) on which the point escaped, or nothing
/// at all if it is a member of the set.
pub fn escape_time(c: Complex<f64>) -> Option<usize> {
    let mut z = Complex::new(0.0_f64, 0.0_f64);
    for i in 1..=MAX_ITERATIONS {
        z = z * z + c;
        if z.norm_sqr() > ESCAPE_NORM_SQR {
            return Some(i);
        }
    }
    None
}

/// True if the point never escapes within the iteration cap.
pub fn is_member(c: Complex<f64>) -> bool {
    escape_time(c).is_none()
}

/// Iterates two points that share an imaginary part.  An escaped lane
/// is frozen; the loop ends as soon as both lanes have escaped.
#[inline(always)]
fn members_pair(cr: [f64; LANES], ci: f64) -> [bool; LANES] {
    let mut zr = [0.0_f64; LANES];
    let mut zi = [0.0_f64; LANES];
    let mut escaped = [false; LANES];

    for _ in 0..MAX_ITERATIONS {
        for lane in 0..LANES {
            if escaped[lane] {
                continue;
            }
            let (r, i) = (zr[lane], zi[lane]);
            zi[lane] = (r + r) * i + ci;
            zr[lane] = r * r - i * i + cr[lane];
            escaped[lane] = zr[lane] * zr[lane] + zi[lane] * zi[lane] > ESCAPE_NORM_SQR;
        }
        if escaped.iter().all(|&e| e) {
            break;
        }
    }

    [!escaped[0], !escaped[1]]
}

/// Packs eight columns into one byte, most significant bit first.  A
/// set bit is a member of the set.
pub fn render_byte(real: &[f64], ci: f64) -> u8 {
    debug_assert_eq!(real.len(), PIXELS_PER_BYTE);
    real.chunks(LANES)
        .enumerate()
        .fold(0u8, |byte, (pair, cr)| {
            let members = members_pair([cr[0], cr[1]], ci);
            members
                .iter()
                .enumerate()
                .filter(|&(_, &member)| member)
                .fold(byte, |byte, (lane, _)| byte | (0x80 >> (pair * LANES + lane)))
        })
}

/// Renders row `y` into `out`, which must hold exactly one packed row.
pub fn render_row(table: &CoordinateTable, y: usize, out: &mut [u8]) {
    assert_eq!(out.len(), table.dimension().row_bytes());
    let ci = table.imag()[y];
    for (byte, real) in out.iter_mut().zip(table.real().chunks(PIXELS_PER_BYTE)) {
        *byte = render_byte(real, ci);
    }
}
