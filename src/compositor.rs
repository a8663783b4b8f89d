//! Source-over alpha compositing
//!
//! The destination is treated as opaque background storage: its alpha channel
//! passes through untouched while RGB moves toward the incoming color in
//! proportion to the incoming alpha.

use crate::color::{Channels, Color};

/// Blend one 8-bit channel. Exact truncating division by 255.
#[inline]
fn blend_channel(incoming: u8, original: u8, alpha: u32) -> u8 {
    // alpha * 255 + (255 - alpha) * 255 == 255 * 255, so the quotient fits in u8
    ((alpha * incoming as u32 + (255 - alpha) * original as u32) / 255) as u8
}

/// Composite `incoming` over `original` using the incoming alpha
#[inline]
pub fn blend(original: Color, incoming: Color) -> Color {
    let dst = original.channels();
    let src = incoming.channels();
    let alpha = src.a as u32;

    Channels {
        a: dst.a,
        r: blend_channel(src.r, dst.r, alpha),
        g: blend_channel(src.g, dst.g, alpha),
        b: blend_channel(src.b, dst.b, alpha),
    }
    .pack()
}
