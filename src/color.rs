//! Packed ARGB color values
//!
//! A `Color` is a 32-bit value laid out (most to least significant byte) as
//! alpha, red, green, blue. Image loaders hand us raw `u32` pixels in exactly
//! this order, so the packing is part of the public contract.

use serde::{Deserialize, Serialize};

const ALPHA_SHIFT: u32 = 24;
const RED_SHIFT: u32 = 16;
const GREEN_SHIFT: u32 = 8;
const BLUE_SHIFT: u32 = 0;

/// A color packed as `0xAARRGGBB`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(u32);

/// The four channels of a `Color`, unpacked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Channels {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Channels {
    /// Shift-and-OR the channels back into their packed positions
    #[inline]
    pub const fn pack(self) -> Color {
        Color(
            ((self.a as u32) << ALPHA_SHIFT)
                | ((self.r as u32) << RED_SHIFT)
                | ((self.g as u32) << GREEN_SHIFT)
                | ((self.b as u32) << BLUE_SHIFT),
        )
    }
}

impl Color {
    pub const TRANSPARENT: Color = Color(0x0000_0000);
    pub const BLACK: Color = Color(0xFF00_0000);
    pub const WHITE: Color = Color(0xFFFF_FFFF);

    /// Wrap an already-packed `0xAARRGGBB` value
    #[inline]
    pub const fn from_packed(value: u32) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Channels { a, r, g, b }.pack()
    }

    /// Fully opaque color
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb(255, r, g, b)
    }

    #[inline]
    pub const fn packed(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn alpha(self) -> u8 {
        (self.0 >> ALPHA_SHIFT) as u8
    }

    #[inline]
    pub const fn red(self) -> u8 {
        (self.0 >> RED_SHIFT) as u8
    }

    #[inline]
    pub const fn green(self) -> u8 {
        (self.0 >> GREEN_SHIFT) as u8
    }

    #[inline]
    pub const fn blue(self) -> u8 {
        (self.0 >> BLUE_SHIFT) as u8
    }

    /// Split into the four 8-bit channels
    #[inline]
    pub const fn channels(self) -> Channels {
        Channels {
            a: self.alpha(),
            r: self.red(),
            g: self.green(),
            b: self.blue(),
        }
    }

    /// Same RGB, different alpha
    #[inline]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self((self.0 & 0x00FF_FFFF) | ((a as u32) << ALPHA_SHIFT))
    }
}

impl From<u32> for Color {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<Color> for u32 {
    fn from(color: Color) -> Self {
        color.0
    }
}

impl From<Channels> for Color {
    fn from(channels: Channels) -> Self {
        channels.pack()
    }
}

impl From<Color> for Channels {
    fn from(color: Color) -> Self {
        color.channels()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_order_is_argb() {
        let c = Color::from_argb(0x11, 0x22, 0x33, 0x44);
        assert_eq!(c.packed(), 0x1122_3344);
        assert_eq!(c.alpha(), 0x11);
        assert_eq!(c.red(), 0x22);
        assert_eq!(c.green(), 0x33);
        assert_eq!(c.blue(), 0x44);
    }

    #[test]
    fn test_channels_pack_positionally() {
        // A zero channel must not collapse the others
        let ch = Channels { a: 0, r: 200, g: 0, b: 7 };
        assert_eq!(ch.pack().packed(), 0x00C8_0007);
        assert_eq!(Color::from_packed(0x00C8_0007).channels(), ch);
    }

    #[test]
    fn test_with_alpha_keeps_rgb() {
        let c = Color::rgb(10, 20, 30).with_alpha(0x80);
        assert_eq!(c.packed(), 0x800A_141E);
    }

    #[test]
    fn test_constants() {
        assert_eq!(Color::default(), Color::TRANSPARENT);
        assert_eq!(Color::BLACK.alpha(), 255);
        assert_eq!(u32::from(Color::WHITE), 0xFFFF_FFFF);
        assert_eq!(Color::from(0xFF00_00FFu32), Color::rgb(0, 0, 255));
    }

    #[test]
    fn test_serializes_as_packed_u32() {
        let json = serde_json::to_string(&Color::from_packed(0xFF10_2030)).unwrap();
        assert_eq!(json, (0xFF10_2030u32).to_string());
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Color::from_packed(0xFF10_2030));
    }
}
