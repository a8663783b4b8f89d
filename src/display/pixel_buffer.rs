use thiserror::Error;

use crate::color::Color;

// ============================================================================
// BufferError
// ============================================================================

/// Errors from adopting externally supplied pixel storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BufferError {
    /// A dimension exceeds `i32::MAX`, or `width * height` does not fit in `usize`
    #[error("buffer dimensions {width}x{height} out of range")]
    Dimensions { width: u32, height: u32 },
    /// Pixel vector length is not `width * height`
    #[error("expected {expected} pixels, got {actual}")]
    PixelCount { expected: usize, actual: usize },
}

/// Largest width or height reachable with `i32` coordinates
const MAX_DIMENSION: u32 = i32::MAX as u32;

fn pixel_count(width: u32, height: u32) -> Result<usize, BufferError> {
    if width > MAX_DIMENSION || height > MAX_DIMENSION {
        return Err(BufferError::Dimensions { width, height });
    }
    (width as usize)
        .checked_mul(height as usize)
        .ok_or(BufferError::Dimensions { width, height })
}

// ============================================================================
// PixelBuffer
// ============================================================================

/// Row-major ARGB pixel storage.
///
/// Pixel (x, y) lives at `y * width + x` with no row padding, which is the
/// layout image loaders produce and savers expect. Every read and write goes
/// through a bounds check; coordinates outside the buffer are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    pixels: Vec<Color>,
    width: u32,
    height: u32,
}

impl PixelBuffer {
    /// Create a transparent-black buffer
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, Color::TRANSPARENT)
    }

    /// Create a buffer with every pixel set to `color`.
    /// Dimensions are capped at `i32::MAX` so every pixel stays addressable.
    pub fn filled(width: u32, height: u32, color: Color) -> Self {
        let width = width.min(MAX_DIMENSION);
        let height = height.min(MAX_DIMENSION);
        Self {
            pixels: vec![color; width as usize * height as usize],
            width,
            height,
        }
    }

    /// Adopt packed `0xAARRGGBB` pixels, e.g. straight from an image loader
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<u32>) -> Result<Self, BufferError> {
        let expected = pixel_count(width, height)?;
        if pixels.len() != expected {
            return Err(BufferError::PixelCount {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            pixels: pixels.into_iter().map(Color::from_packed).collect(),
            width,
            height,
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total pixel count
    #[inline]
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Check if coordinates are within bounds
    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && (x as u32) < self.width && y >= 0 && (y as u32) < self.height
    }

    /// Row-major index for (x, y), or None if out of bounds
    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if self.in_bounds(x, y) {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Read a pixel (bounds checked)
    /// Returns None if coordinates are out of bounds
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.index(x, y).map(|idx| self.pixels[idx])
    }

    /// Read a pixel, or `Color::default()` when out of bounds
    #[inline]
    pub fn pixel(&self, x: i32, y: i32) -> Color {
        self.get_pixel(x, y).unwrap_or_default()
    }

    /// Overwrite a single pixel (bounds checked, no blending)
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if let Some(idx) = self.index(x, y) {
            self.pixels[idx] = color;
        }
    }

    /// Fill every pixel with `color`
    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    /// Pixels in row-major order
    #[inline]
    pub fn as_slice(&self) -> &[Color] {
        &self.pixels
    }

    /// Copy out packed `0xAARRGGBB` values for an image saver
    pub fn to_packed(&self) -> Vec<u32> {
        self.pixels.iter().map(|c| c.packed()).collect()
    }

    /// Give the storage back as packed `0xAARRGGBB` values
    pub fn into_packed(self) -> Vec<u32> {
        self.pixels.into_iter().map(Color::packed).collect()
    }
}
