use log::trace;

use super::PixelBuffer;
use crate::color::Color;
use crate::geometry::{region_offsets, Rect};

impl PixelBuffer {
    /// Walk `region` of `src`, handing each source pixel and its destination
    /// coordinate (offset so the region's top-left lands at (x, y)) to `write`.
    ///
    /// Source pixels outside `src` are skipped; destination clipping is left
    /// to `write`, which always goes through a bounds-checked accessor.
    fn copy_region<F>(&mut self, x: i32, y: i32, src: &PixelBuffer, region: Rect, mut write: F)
    where
        F: FnMut(&mut PixelBuffer, i32, i32, Color),
    {
        if region.is_empty() {
            trace!("copy_region skipped: empty {:?}", region);
            return;
        }

        for (i, j) in region_offsets(region.width, region.height) {
            let sx = region.x.saturating_add(i);
            let sy = region.y.saturating_add(j);
            if let Some(color) = src.get_pixel(sx, sy) {
                write(&mut *self, x.saturating_add(i), y.saturating_add(j), color);
            }
        }
    }

    /// Copy the `tile` region of `tilemap` to (x, y), overwriting the
    /// destination pixels without blending
    pub fn draw_tile(&mut self, x: i32, y: i32, tilemap: &PixelBuffer, tile: Rect) {
        self.copy_region(x, y, tilemap, tile, PixelBuffer::set_pixel);
    }

    /// Copy the `sprite` region of `spritemap` to (x, y), alpha blending each
    /// sprite pixel over the destination
    pub fn draw_sprite(&mut self, x: i32, y: i32, spritemap: &PixelBuffer, sprite: Rect) {
        self.copy_region(x, y, spritemap, sprite, PixelBuffer::draw_pixel);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 4x4 source where each pixel encodes its own coordinate
    fn atlas(alpha: u8) -> PixelBuffer {
        let mut buf = PixelBuffer::new(4, 4);
        for y in 0..4 {
            for x in 0..4 {
                buf.set_pixel(x, y, Color::from_argb(alpha, x as u8 * 10, y as u8 * 10, 200));
            }
        }
        buf
    }

    #[test]
    fn test_draw_tile_overwrites() {
        let src = atlas(0x40);
        let mut dst = PixelBuffer::filled(6, 6, Color::WHITE);
        dst.draw_tile(3, 1, &src, Rect::new(1, 2, 2, 2));

        // No blending: alpha and RGB copied verbatim
        assert_eq!(dst.pixel(3, 1), src.pixel(1, 2));
        assert_eq!(dst.pixel(4, 1), src.pixel(2, 2));
        assert_eq!(dst.pixel(3, 2), src.pixel(1, 3));
        assert_eq!(dst.pixel(4, 2), src.pixel(2, 3));
        assert_eq!(dst.pixel(2, 1), Color::WHITE);
        assert_eq!(dst.pixel(5, 1), Color::WHITE);
        assert_eq!(dst.pixel(3, 3), Color::WHITE);
    }

    #[test]
    fn test_draw_sprite_blends() {
        let src = atlas(128);
        let mut dst = PixelBuffer::filled(4, 4, Color::BLACK);
        dst.draw_sprite(0, 0, &src, Rect::new(0, 0, 1, 1));
        // (128*200 + 127*0) / 255 = 100
        assert_eq!(dst.pixel(0, 0), Color::from_argb(0xFF, 0, 0, 100));
        assert_eq!(dst.pixel(1, 0), Color::BLACK);
    }

    #[test]
    fn test_draw_sprite_transparent_pixels_pass_through() {
        let src = atlas(0);
        let mut dst = PixelBuffer::filled(4, 4, Color::rgb(1, 2, 3));
        let before = dst.clone();
        dst.draw_sprite(0, 0, &src, Rect::new(0, 0, 4, 4));
        assert_eq!(dst, before);
    }

    #[test]
    fn test_destination_clipping() {
        let src = atlas(255);
        let mut dst = PixelBuffer::filled(3, 3, Color::BLACK);
        dst.draw_tile(2, -1, &src, Rect::new(0, 0, 3, 3));

        // Only offsets (0,1) and (0,2) land inside
        assert_eq!(dst.pixel(2, 0), src.pixel(0, 1));
        assert_eq!(dst.pixel(2, 1), src.pixel(0, 2));
        assert_eq!(dst.pixel(2, 2), Color::BLACK);
        for y in 0..3 {
            for x in 0..2 {
                assert_eq!(dst.pixel(x, y), Color::BLACK);
            }
        }
    }

    #[test]
    fn test_source_clipping_leaves_destination_untouched() {
        let src = atlas(255);
        let mut dst = PixelBuffer::filled(4, 4, Color::WHITE);
        dst.draw_tile(0, 0, &src, Rect::new(3, -1, 2, 2));

        // Only source (3, 0) exists, landing at destination (0, 1)
        assert_eq!(dst.pixel(0, 1), src.pixel(3, 0));
        assert_eq!(dst.pixel(0, 0), Color::WHITE);
        assert_eq!(dst.pixel(1, 0), Color::WHITE);
        assert_eq!(dst.pixel(1, 1), Color::WHITE);
    }

    #[test]
    fn test_empty_region_is_noop() {
        let src = atlas(255);
        let mut dst = PixelBuffer::filled(4, 4, Color::WHITE);
        let before = dst.clone();
        dst.draw_tile(0, 0, &src, Rect::new(0, 0, 0, 4));
        dst.draw_sprite(0, 0, &src, Rect::new(0, 0, 4, -2));
        assert_eq!(dst, before);
    }
}
