//! Luminance calculation using ITU-R BT.709 coefficients.
//!
//! The frame colour of a print is judged from the luminance of a single
//! pixel just inside the top-left corner.

use crate::decode::DecodedImage;

/// ITU-R BT.709 coefficient for red channel in luminance calculation.
pub const LUMINANCE_R: f64 = 0.2126;

/// ITU-R BT.709 coefficient for green channel in luminance calculation.
pub const LUMINANCE_G: f64 = 0.7152;

/// ITU-R BT.709 coefficient for blue channel in luminance calculation.
pub const LUMINANCE_B: f64 = 0.0722;

/// Luminance above which a frame counts as light.
pub const LIGHT_THRESHOLD: f64 = 127.0;

/// Pixel sampled to decide the frame colour. `(1, 1)` steps past any
/// antialiased edge on the outermost row and column.
pub const FRAME_PROBE: (u32, u32) = (1, 1);

/// Calculate luminance from u8 RGB values, unrounded (0.0 to 255.0).
#[inline]
pub fn calculate_luminance(r: u8, g: u8, b: u8) -> f64 {
    LUMINANCE_R * r as f64 + LUMINANCE_G * g as f64 + LUMINANCE_B * b as f64
}

/// Calculate luminance from u8 RGB values, rounded to u8.
#[inline]
pub fn calculate_luminance_u8(r: u8, g: u8, b: u8) -> u8 {
    calculate_luminance(r, g, b).clamp(0.0, 255.0).round() as u8
}

/// Whether a colour reads as light.
#[inline]
pub fn is_light(rgb: [u8; 3]) -> bool {
    calculate_luminance(rgb[0], rgb[1], rgb[2]) > LIGHT_THRESHOLD
}

/// Whether the frame of `image` is light, judged at [`FRAME_PROBE`].
///
/// Images too small to contain the probe fall back to the top-left pixel,
/// and an empty image counts as light.
pub fn frame_is_light(image: &DecodedImage) -> bool {
    let (x, y) = FRAME_PROBE;
    image
        .pixel(x, y)
        .or_else(|| image.pixel(0, 0))
        .map(is_light)
        .unwrap_or(true)
}
