// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::color::Rgba8;

/// Opaque black, the document default text color.
pub const BLACK: Rgba8 = Rgba8 {
    r: 0,
    g: 0,
    b: 0,
    a: 255,
};

/// Unpacks a 32-bit ARGB value: alpha in bits 31..24, then red, green and blue.
///
/// ```
/// use paragraph_tree::style::color_from_argb;
///
/// let red = color_from_argb(0xFFFF_0000);
/// assert_eq!((red.r, red.g, red.b, red.a), (255, 0, 0, 255));
/// ```
pub fn color_from_argb(argb: u32) -> Rgba8 {
    let [a, r, g, b] = argb.to_be_bytes();
    Rgba8 { r, g, b, a }
}

/// Packs a color into the 32-bit ARGB layout read by [`color_from_argb`].
pub fn color_to_argb(color: Rgba8) -> u32 {
    u32::from_be_bytes([color.a, color.r, color.g, color.b])
}
