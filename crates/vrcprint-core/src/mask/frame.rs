//! Mask covering the frame of a print.

use crate::layout::{
    BOTTOM_TEXT, BOTTOM_TEXT_SCALED, INNER_HEIGHT, INNER_WIDTH, LANDSCAPE_HEIGHT, LANDSCAPE_WIDTH,
    TOP_BORDER, TOP_SCALED,
};

/// Per-pixel alpha that is 255 on the frame and 0 on the photo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameMask {
    pub width: u32,
    pub height: u32,
    /// One byte per pixel, row-major.
    pub alpha: Vec<u8>,
}

impl FrameMask {
    /// Alpha at `(x, y)`; 0 outside the mask.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> u8 {
        if x >= self.width || y >= self.height {
            return 0;
        }
        self.alpha[(y * self.width + x) as usize]
    }

    /// Number of pixels with non-zero alpha.
    pub fn coverage(&self) -> usize {
        self.alpha.iter().filter(|&&a| a > 0).count()
    }

    fn fill(&mut self, left: u32, top: u32, right: u32, bottom: u32) {
        for y in top..bottom.min(self.height) {
            let row = (y * self.width) as usize;
            let start = row + left.min(self.width) as usize;
            let end = row + right.min(self.width) as usize;
            self.alpha[start..end].fill(255);
        }
    }
}

/// Border widths around the photo as `(left, right, top, bottom)`.
///
/// An exact landscape print is measured against the 1920x1080 photo and the
/// landscape border ratio; every other size is treated as portrait.
pub fn frame_borders(width: u32, height: u32) -> (u32, u32, u32, u32) {
    let (inner_w, inner_h, top_share) = if (width, height) == (LANDSCAPE_WIDTH, LANDSCAPE_HEIGHT) {
        (
            INNER_WIDTH,
            INNER_HEIGHT,
            TOP_BORDER as f64 / (TOP_BORDER + BOTTOM_TEXT) as f64,
        )
    } else {
        (
            INNER_HEIGHT,
            INNER_WIDTH,
            TOP_SCALED as f64 / (TOP_SCALED + BOTTOM_TEXT_SCALED) as f64,
        )
    };

    let pad_w = width.saturating_sub(inner_w);
    let pad_h = height.saturating_sub(inner_h);

    let left = pad_w / 2;
    let right = pad_w - left;

    let top = (pad_h as f64 * top_share).round() as u32;
    let bottom = pad_h - top;

    (left, right, top, bottom)
}

/// Build the frame mask for an image of the given size.
pub fn build_frame_mask(width: u32, height: u32) -> FrameMask {
    let (left, right, top, bottom) = frame_borders(width, height);

    let mut mask = FrameMask {
        width,
        height,
        alpha: vec![0u8; (width * height) as usize],
    };

    if left > 0 {
        mask.fill(0, 0, left, height);
    }
    if right > 0 {
        mask.fill(width - right, 0, width, height);
    }
    if top > 0 {
        mask.fill(0, 0, width, top);
    }
    if bottom > 0 {
        mask.fill(0, height - bottom, width, height);
    }

    mask
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::PrintFormat;

    #[test]
    fn test_landscape_borders() {
        assert_eq!(frame_borders(2048, 1440), (64, 64, 69, 291));
    }

    #[test]
    fn test_portrait_borders() {
        assert_eq!(frame_borders(1152, 2123), (36, 36, 39, 164));
    }

    #[test]
    fn test_undersized_image_has_no_frame() {
        assert_eq!(frame_borders(100, 100), (0, 0, 0, 0));
        let mask = build_frame_mask(100, 100);
        assert_eq!(mask.coverage(), 0);
    }

    #[test]
    fn test_mask_is_complement_of_picture_rect() {
        for format in [PrintFormat::Landscape, PrintFormat::Portrait] {
            let (w, h) = format.dimensions();
            let mask = build_frame_mask(w, h);
            let rect = format.picture_rect();

            for &(x, y) in &[
                (0, 0),
                (w - 1, h - 1),
                (rect.left, rect.top),
                (rect.right - 1, rect.bottom - 1),
                (rect.left - 1, rect.top),
                (rect.right, rect.top),
                (rect.left, rect.top - 1),
                (rect.left, rect.bottom),
                (w / 2, h / 2),
            ] {
                let expected = if rect.contains(x, y) { 0 } else { 255 };
                assert_eq!(mask.get(x, y), expected, "{} at ({}, {})", format, x, y);
            }

            let photo = (rect.width() * rect.height()) as usize;
            assert_eq!(mask.coverage(), (w * h) as usize - photo);
        }
    }

    #[test]
    fn test_odd_padding_puts_extra_column_on_right() {
        // 1083 wide portrait-like image: pad 3 -> left 1, right 2
        let (left, right, _, _) = frame_borders(1083, 1920);
        assert_eq!((left, right), (1, 2));
    }
}
