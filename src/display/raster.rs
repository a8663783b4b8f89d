use log::trace;

use super::PixelBuffer;
use crate::color::Color;
use crate::compositor::blend;
use crate::geometry::{circle_outline, col_span, rect_outline, row_span, Rect};

impl PixelBuffer {
    /// Alpha blend `color` over the pixel at (x, y).
    /// Every other drawing primitive funnels through here.
    #[inline]
    pub fn draw_pixel(&mut self, x: i32, y: i32, color: Color) {
        if let Some(original) = self.get_pixel(x, y) {
            self.set_pixel(x, y, blend(original, color));
        }
    }

    /// Blend every coordinate yielded by `points`
    fn draw_points(&mut self, points: impl Iterator<Item = (i32, i32)>, color: Color) {
        for (x, y) in points {
            self.draw_pixel(x, y, color);
        }
    }

    /// Draw a horizontal run at `y` covering `[start_x, end_x)`
    pub fn draw_row(&mut self, start_x: i32, end_x: i32, y: i32, color: Color) {
        self.draw_points(row_span(start_x, end_x, y), color);
    }

    /// Draw a vertical run at `x` covering `[start_y, end_y)`
    pub fn draw_col(&mut self, x: i32, start_y: i32, end_y: i32, color: Color) {
        self.draw_points(col_span(x, start_y, end_y), color);
    }

    /// Draw a rectangle outline (not filled).
    ///
    /// Rows and columns are blended independently, so at partial alpha the
    /// top-left corner is blended twice. Nothing is drawn when the rect is
    /// empty or its origin lies outside the buffer.
    pub fn draw_rect(&mut self, rect: Rect, color: Color) {
        if rect.is_empty() || !self.in_bounds(rect.x, rect.y) {
            trace!("draw_rect skipped: {:?} on {}x{}", rect, self.width(), self.height());
            return;
        }
        self.draw_points(rect_outline(rect), color);
    }

    /// Draw a circle outline centered at (cx, cy) by sampling one point per
    /// degree. Large radii leave gaps, small radii revisit pixels.
    pub fn draw_circle(&mut self, cx: i32, cy: i32, radius: i32, color: Color) {
        if radius <= 0 {
            trace!("draw_circle skipped: radius {}", radius);
            return;
        }
        self.draw_points(circle_outline(cx, cy, radius), color);
    }
}
