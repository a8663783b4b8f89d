//! pixelcomp: alpha-blended 2D raster compositing
//!
//! Draw outlines and copy image regions into an in-memory ARGB pixel buffer.
//!
//! ```
//! use pixelcomp::{Color, PixelBuffer, Rect};
//!
//! let mut canvas = PixelBuffer::filled(16, 16, Color::BLACK);
//! canvas.draw_rect(Rect::new(2, 2, 8, 6), Color::from_argb(128, 255, 0, 0));
//! canvas.draw_circle(8, 8, 5, Color::WHITE);
//!
//! let sprites = PixelBuffer::filled(4, 4, Color::rgb(0, 255, 0));
//! canvas.draw_sprite(12, 12, &sprites, Rect::new(0, 0, 4, 4));
//! assert_eq!(canvas.pixel(15, 15), Color::rgb(0, 255, 0));
//! ```

pub mod color;
pub mod compositor;
pub mod display;
pub mod geometry;
pub mod scene;

pub use color::{Channels, Color};
pub use compositor::blend;
pub use display::{BufferError, PixelBuffer};
pub use geometry::Rect;
pub use scene::{DrawCommand, DrawList, SceneError};
