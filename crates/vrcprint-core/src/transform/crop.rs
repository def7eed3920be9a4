//! Cropping and pasting rectangular pixel regions.

use crate::decode::DecodedImage;
use crate::layout::Rect;

/// Copy the pixels inside `rect` into a new image.
///
/// # Behavior
///
/// - A rectangle extending beyond the image is clamped to its bounds
/// - Minimum output dimension is 1x1 pixels
/// - A rectangle covering the whole image returns a copy
pub fn crop_rect(image: &DecodedImage, rect: Rect) -> DecodedImage {
    let covers_all =
        rect.left == 0 && rect.top == 0 && rect.right >= image.width && rect.bottom >= image.height;
    if image.is_empty() || covers_all {
        return image.clone();
    }

    // Clamp to image bounds
    let left = rect.left.min(image.width.saturating_sub(1));
    let top = rect.top.min(image.height.saturating_sub(1));
    let right = rect.right.min(image.width).max(left + 1);
    let bottom = rect.bottom.min(image.height).max(top + 1);

    let out_width = right - left;
    let out_height = bottom - top;
    let row_bytes = (out_width * 3) as usize;

    let mut output = Vec::with_capacity(row_bytes * out_height as usize);

    // Rows are contiguous in both buffers
    for y in top..bottom {
        let start = ((y * image.width + left) * 3) as usize;
        output.extend_from_slice(&image.pixels[start..start + row_bytes]);
    }

    DecodedImage {
        width: out_width,
        height: out_height,
        pixels: output,
    }
}

/// Paste `src` onto `dst` with its top-left corner at `(x, y)`.
///
/// Whatever falls outside `dst` is dropped.
pub fn paste(dst: &mut DecodedImage, src: &DecodedImage, x: u32, y: u32) {
    if x >= dst.width || y >= dst.height {
        return;
    }

    let copy_width = src.width.min(dst.width - x);
    let copy_height = src.height.min(dst.height - y);
    let row_bytes = (copy_width * 3) as usize;

    for row in 0..copy_height {
        let src_start = ((row * src.width) * 3) as usize;
        let dst_start = (((y + row) * dst.width + x) * 3) as usize;
        dst.pixels[dst_start..dst_start + row_bytes]
            .copy_from_slice(&src.pixels[src_start..src_start + row_bytes]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Create a test image where each pixel has a unique value based on position.
    fn test_image(width: u32, height: u32) -> DecodedImage {
        let mut pixels = Vec::with_capacity((width * height * 3) as usize);
        for y in 0..height {
            for x in 0..width {
                let v = ((y * width + x) % 256) as u8;
                pixels.push(v); // R
                pixels.push(v); // G
                pixels.push(v); // B
            }
        }
        DecodedImage::new(width, height, pixels)
    }

    #[test]
    fn test_full_crop() {
        let img = test_image(20, 10);
        let result = crop_rect(&img, Rect::new(0, 0, 20, 10));

        assert_eq!(result, img);
    }

    #[test]
    fn test_inner_crop_values() {
        let img = test_image(10, 10);
        let result = crop_rect(&img, Rect::new(2, 3, 6, 8));

        assert_eq!((result.width, result.height), (4, 5));
        // First pixel comes from (2, 3): 3 * 10 + 2
        assert_eq!(result.pixel(0, 0), Some([32, 32, 32]));
        // Last pixel comes from (5, 7): 7 * 10 + 5
        assert_eq!(result.pixel(3, 4), Some([75, 75, 75]));
    }

    #[test]
    fn test_crop_clamps_to_bounds() {
        let img = test_image(10, 10);
        let result = crop_rect(&img, Rect::new(8, 8, 50, 50));

        assert_eq!((result.width, result.height), (2, 2));
    }

    #[test]
    fn test_crop_minimum_dimension() {
        let img = test_image(10, 10);

        let empty = crop_rect(&img, Rect::new(4, 4, 4, 4));
        assert_eq!((empty.width, empty.height), (1, 1));

        let outside = crop_rect(&img, Rect::new(40, 40, 60, 60));
        assert_eq!((outside.width, outside.height), (1, 1));
    }

    #[test]
    fn test_paste_places_pixels() {
        let mut dst = DecodedImage::filled(6, 4, [0, 0, 0]);
        let src = DecodedImage::filled(2, 2, [9, 8, 7]);

        paste(&mut dst, &src, 3, 1);

        assert_eq!(dst.pixel(3, 1), Some([9, 8, 7]));
        assert_eq!(dst.pixel(4, 2), Some([9, 8, 7]));
        assert_eq!(dst.pixel(2, 1), Some([0, 0, 0]));
        assert_eq!(dst.pixel(5, 1), Some([0, 0, 0]));
        assert_eq!(dst.pixel(3, 3), Some([0, 0, 0]));
    }

    #[test]
    fn test_paste_clips_overhang() {
        let mut dst = DecodedImage::filled(4, 4, [0, 0, 0]);
        let src = DecodedImage::filled(3, 3, [255, 255, 255]);

        paste(&mut dst, &src, 2, 2);

        assert_eq!(dst.pixel(3, 3), Some([255, 255, 255]));
        assert_eq!(dst.pixel(1, 1), Some([0, 0, 0]));
        assert_eq!(dst.byte_size(), 4 * 4 * 3);
    }

    #[test]
    fn test_paste_outside_is_noop() {
        let mut dst = DecodedImage::filled(4, 4, [0, 0, 0]);
        let before = dst.clone();
        paste(&mut dst, &DecodedImage::filled(2, 2, [1, 1, 1]), 4, 0);

        assert_eq!(dst, before);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for an image size plus a rectangle inside it.
    fn rect_strategy() -> impl Strategy<Value = (u32, u32, Rect)> {
        (2u32..=40, 2u32..=40).prop_flat_map(|(w, h)| {
            (0..w, 0..h).prop_flat_map(move |(l, t)| {
                ((l + 1)..=w, (t + 1)..=h)
                    .prop_map(move |(r, b)| (w, h, Rect::new(l, t, r, b)))
            })
        })
    }

    fn pattern(width: u32, height: u32) -> DecodedImage {
        let pixels = (0..width * height * 3).map(|i| (i * 7 % 251) as u8).collect();
        DecodedImage::new(width, height, pixels)
    }

    proptest! {
        /// Property: an in-bounds crop has exactly the rectangle's size.
        #[test]
        fn prop_crop_matches_rect((w, h, rect) in rect_strategy()) {
            let result = crop_rect(&pattern(w, h), rect);
            prop_assert_eq!(result.width, rect.width());
            prop_assert_eq!(result.height, rect.height());
            prop_assert_eq!(result.byte_size(), (rect.width() * rect.height() * 3) as usize);
        }

        /// Property: pasting a crop back where it came from changes nothing.
        #[test]
        fn prop_crop_then_paste_is_identity((w, h, rect) in rect_strategy()) {
            let img = pattern(w, h);
            let region = crop_rect(&img, rect);

            let mut restored = img.clone();
            paste(&mut restored, &region, rect.left, rect.top);
            prop_assert_eq!(restored, img);
        }
    }
}
