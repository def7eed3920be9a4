//! Masked blending of two images.
//!
//! For each pixel: `output = fg * a + bg * (1 - a)` with `a` taken from the
//! mask. The frame toggle passes an inverted copy as `fg` and the original
//! as `bg`, so only masked pixels change.

use super::{blend_channel, FrameMask};
use crate::decode::DecodedImage;

/// Blend `foreground` over `background` using `mask` as alpha.
///
/// All three must share dimensions; the output takes the background's size
/// and any pixel outside the foreground or mask keeps the background value.
pub fn composite(
    foreground: &DecodedImage,
    background: &DecodedImage,
    mask: &FrameMask,
) -> DecodedImage {
    let mut out = background.clone();
    let width = background.width;

    for (idx, chunk) in out.pixels.chunks_exact_mut(3).enumerate() {
        let px = (idx as u32) % width;
        let py = (idx as u32) / width;

        let alpha = mask.get(px, py);
        if alpha == 0 {
            continue;
        }

        let Some(fg) = foreground.pixel(px, py) else {
            continue;
        };

        for (dst, f) in chunk.iter_mut().zip(fg) {
            *dst = blend_channel(f, *dst, alpha);
        }
    }

    out
}
