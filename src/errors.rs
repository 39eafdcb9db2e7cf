// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The renderer has exactly one way to fail, and it fails before any
//! work is started: the caller asked for an image that cannot be
//! packed eight pixels to the byte.

/// Errors returned by the top-level render calls.
#[derive(Debug, Fail, Clone, Copy, PartialEq, Eq)]
pub enum RenderError {
    /// The requested side length is zero or not a multiple of 8.
    #[fail(
        display = "invalid image dimension {}: must be a positive multiple of 8",
        _0
    )]
    InvalidDimension(usize),
}
