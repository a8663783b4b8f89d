//! Rectangles and the pixel-coordinate walks the drawing code is built on
//!
//! Every shape is expressed as an iterator of integer `(x, y)` coordinates.
//! Nothing here knows about buffer bounds; clipping happens at the accessor.

use serde::{Deserialize, Serialize};

/// Number of angular samples taken around a circle outline (one per degree)
pub const CIRCLE_SAMPLES: u32 = 360;

/// Axis-aligned rectangle with (x, y) as its upper-left corner.
/// A non-positive width or height denotes an empty region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// One past the last column
    #[inline]
    pub const fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    /// One past the last row
    #[inline]
    pub const fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    /// Half-open containment test
    #[inline]
    pub const fn contains(&self, px: i32, py: i32) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }
}

/// Pixels at `y` for x in `[start_x, end_x)`. Empty when `end_x <= start_x`.
pub fn row_span(start_x: i32, end_x: i32, y: i32) -> impl Iterator<Item = (i32, i32)> {
    (start_x..end_x).map(move |x| (x, y))
}

/// Pixels at `x` for y in `[start_y, end_y)`. Empty when `end_y <= start_y`.
pub fn col_span(x: i32, start_y: i32, end_y: i32) -> impl Iterator<Item = (i32, i32)> {
    (start_y..end_y).map(move |y| (x, y))
}

/// Outline of `rect`: top row, bottom row, left column, right column.
///
/// Rows span `[x, x + width)` at `y` and `y + height`; columns span
/// `[y, y + height)` at `x` and `x + width`. The top-left corner is visited
/// twice and `(x + width, y + height)` is never visited. Empty rects yield
/// nothing.
pub fn rect_outline(rect: Rect) -> impl Iterator<Item = (i32, i32)> {
    let rect = if rect.is_empty() {
        Rect::new(rect.x, rect.y, 0, 0)
    } else {
        rect
    };
    let (left, top, right, bottom) = (rect.x, rect.y, rect.right(), rect.bottom());

    row_span(left, right, top)
        .chain(row_span(left, right, bottom))
        .chain(col_span(left, top, bottom))
        .chain(col_span(right, top, bottom))
}

/// Circle outline sampled once per degree, each sample rounded to the
/// nearest pixel. Always yields exactly `CIRCLE_SAMPLES` points for a positive
/// radius (duplicates included) and nothing otherwise.
pub fn circle_outline(cx: i32, cy: i32, radius: i32) -> impl Iterator<Item = (i32, i32)> {
    let samples = if radius > 0 { CIRCLE_SAMPLES } else { 0 };
    let r = radius as f64;

    (0..samples).map(move |degree| {
        let theta = (degree as f64).to_radians();
        let dx = (r * theta.cos()).round() as i32;
        let dy = (r * theta.sin()).round() as i32;
        (cx.saturating_add(dx), cy.saturating_add(dy))
    })
}

/// Offsets `(i, j)` covering a `width` x `height` region, row by row.
/// Empty when either dimension is non-positive.
pub fn region_offsets(width: i32, height: i32) -> impl Iterator<Item = (i32, i32)> {
    (0..height).flat_map(move |j| (0..width).map(move |i| (i, j)))
}
