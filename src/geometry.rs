//! Integer rectangles in pixel coordinates.
use serde::{Deserialize, Serialize};
use std::fmt;

/// Axis-aligned rectangle with top-left origin `(x, y)` and extent `w × h`.
///
/// Covered pixels are `[x, x + w) × [y, y + h)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x: usize,
    pub y: usize,
    pub w: usize,
    pub h: usize,
}

impl Rect {
    pub const fn new(x: usize, y: usize, w: usize, h: usize) -> Self {
        Self { x, y, w, h }
    }

    /// One past the last column.
    #[inline]
    pub const fn right(&self) -> usize {
        self.x + self.w
    }

    /// One past the last row.
    #[inline]
    pub const fn bottom(&self) -> usize {
        self.y + self.h
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    /// True when the rectangle lies inside `[0, width) × [0, height)`.
    #[inline]
    pub const fn fits_within(&self, width: usize, height: usize) -> bool {
        self.right() <= width && self.bottom() <= height
    }
}

impl From<(usize, usize, usize, usize)> for Rect {
    fn from((x, y, w, h): (usize, usize, usize, usize)) -> Self {
        Rect::new(x, y, w, h)
    }
}

impl From<Rect> for (usize, usize, usize, usize) {
    fn from(r: Rect) -> Self {
        (r.x, r.y, r.w, r.h)
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},{},{})", self.x, self.y, self.w, self.h)
    }
}
