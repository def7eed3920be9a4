//! Per-channel colour inversion.

use crate::decode::DecodedImage;

/// Return a copy with every channel replaced by `255 - v`.
pub fn invert(image: &DecodedImage) -> DecodedImage {
    let mut out = image.clone();
    invert_in_place(&mut out);
    out
}

/// Invert every channel of `image`.
pub fn invert_in_place(image: &mut DecodedImage) {
    for v in image.pixels.iter_mut() {
        *v = 255 - *v;
    }
}
