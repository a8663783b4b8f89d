//! Pixel storage and the drawing surface built on it
//!
//! `PixelBuffer` owns the pixels; the rasterizer (`draw_pixel`, `draw_row`,
//! `draw_col`, `draw_rect`, `draw_circle`) and the region blitter
//! (`draw_tile`, `draw_sprite`) are implemented on it in their own files.
//! None of the drawing methods can fail: anything outside the buffer is
//! clipped away pixel by pixel.

mod blit;
mod pixel_buffer;
mod raster;

pub use pixel_buffer::{BufferError, PixelBuffer};
