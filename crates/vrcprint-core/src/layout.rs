//! Fixed geometry of a VRChat print.
//!
//! A print is a photo surrounded by a frame: equal side borders, a thin top
//! border and a taller bottom strip carrying the caption text. Two layouts
//! exist:
//!
//! ```text
//! landscape 2048x1440            portrait 1152x2123
//! +------------------------+     +-----------+
//! |   64 / 69 / 64         |     | 36/39/36  |
//! |  +------------------+  |     | +-------+ |
//! |  |    1920x1080     |  |     | | 1080x | |
//! |  +------------------+  |     | | 1920  | |
//! |   bottom strip 291     |     | +-------+ |
//! +------------------------+     | strip 164 |
//!                                +-----------+
//! ```
//!
//! The portrait borders are the landscape borders scaled by 1080/1920.

use serde::{Deserialize, Serialize};

use crate::decode::DecodeError;

/// Landscape print width in pixels.
pub const LANDSCAPE_WIDTH: u32 = 2048;
/// Landscape print height in pixels.
pub const LANDSCAPE_HEIGHT: u32 = 1440;

/// Left and right frame border of a landscape print.
pub const SIDE_BORDER: u32 = 64;
/// Top frame border of a landscape print.
pub const TOP_BORDER: u32 = 69;
/// Height of the caption strip at the bottom of a landscape print.
pub const BOTTOM_TEXT: u32 = 291;

/// Photo width inside a landscape print.
pub const INNER_WIDTH: u32 = LANDSCAPE_WIDTH - 2 * SIDE_BORDER;
/// Photo height inside a landscape print.
pub const INNER_HEIGHT: u32 = LANDSCAPE_HEIGHT - TOP_BORDER - BOTTOM_TEXT;

/// Scale factor from landscape borders to portrait borders.
pub const PORTRAIT_SCALE: f64 = 1080.0 / 1920.0;

/// Side border of a portrait print (`round(64 * 0.5625)`).
pub const SIDE_SCALED: u32 = 36;
/// Top border of a portrait print (`round(69 * 0.5625)`).
pub const TOP_SCALED: u32 = 39;
/// Caption strip height of a portrait print (`round(291 * 0.5625)`).
pub const BOTTOM_TEXT_SCALED: u32 = 164;

/// Portrait print width in pixels.
pub const PORTRAIT_WIDTH: u32 = INNER_HEIGHT + 2 * SIDE_SCALED;
/// Portrait print height in pixels.
pub const PORTRAIT_HEIGHT: u32 = INNER_WIDTH + TOP_SCALED + BOTTOM_TEXT_SCALED;

/// Scale a landscape border length to its portrait counterpart.
pub fn scale_border(length: u32) -> u32 {
    (length as f64 * PORTRAIT_SCALE).round() as u32
}

/// Axis-aligned pixel rectangle with exclusive right and bottom edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl Rect {
    pub fn new(left: u32, top: u32, right: u32, bottom: u32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> u32 {
        self.right.saturating_sub(self.left)
    }

    pub fn height(&self) -> u32 {
        self.bottom.saturating_sub(self.top)
    }

    /// Whether the pixel at `(x, y)` lies inside the rectangle.
    #[inline]
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.left && x < self.right && y >= self.top && y < self.bottom
    }
}

/// Layout of a print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrintFormat {
    Landscape,
    Portrait,
}

impl PrintFormat {
    /// Full print dimensions as `(width, height)`.
    pub fn dimensions(self) -> (u32, u32) {
        match self {
            PrintFormat::Landscape => (LANDSCAPE_WIDTH, LANDSCAPE_HEIGHT),
            PrintFormat::Portrait => (PORTRAIT_WIDTH, PORTRAIT_HEIGHT),
        }
    }

    /// Photo dimensions as `(width, height)`.
    pub fn inner_size(self) -> (u32, u32) {
        match self {
            PrintFormat::Landscape => (INNER_WIDTH, INNER_HEIGHT),
            PrintFormat::Portrait => (INNER_HEIGHT, INNER_WIDTH),
        }
    }

    /// Height of the caption strip.
    pub fn bottom_strip_height(self) -> u32 {
        match self {
            PrintFormat::Landscape => BOTTOM_TEXT,
            PrintFormat::Portrait => BOTTOM_TEXT_SCALED,
        }
    }

    /// Location of the photo inside the print.
    pub fn picture_rect(self) -> Rect {
        match self {
            PrintFormat::Landscape => Rect::new(
                SIDE_BORDER,
                TOP_BORDER,
                SIDE_BORDER + INNER_WIDTH,
                TOP_BORDER + INNER_HEIGHT,
            ),
            PrintFormat::Portrait => Rect::new(
                SIDE_SCALED,
                TOP_SCALED,
                SIDE_SCALED + INNER_HEIGHT,
                TOP_SCALED + INNER_WIDTH,
            ),
        }
    }

    /// The layout a quarter turn produces.
    pub fn flipped(self) -> Self {
        match self {
            PrintFormat::Landscape => PrintFormat::Portrait,
            PrintFormat::Portrait => PrintFormat::Landscape,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PrintFormat::Landscape => "landscape",
            PrintFormat::Portrait => "portrait",
        }
    }
}

impl std::fmt::Display for PrintFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identify the layout of a print from its pixel dimensions.
///
/// Only the two exact print sizes are accepted.
///
/// # Errors
///
/// Returns `DecodeError::UnsupportedSize` for any other size.
pub fn detect_format(width: u32, height: u32) -> Result<PrintFormat, DecodeError> {
    match (width, height) {
        (LANDSCAPE_WIDTH, LANDSCAPE_HEIGHT) => Ok(PrintFormat::Landscape),
        (PORTRAIT_WIDTH, PORTRAIT_HEIGHT) => Ok(PrintFormat::Portrait),
        _ => Err(DecodeError::UnsupportedSize { width, height }),
    }
}

/// Location of the photo inside a print of the given layout.
pub fn picture_rect(format: PrintFormat) -> Rect {
    format.picture_rect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_constants() {
        assert_eq!(INNER_WIDTH, 1920);
        assert_eq!(INNER_HEIGHT, 1080);
        assert_eq!(PORTRAIT_WIDTH, 1152);
        assert_eq!(PORTRAIT_HEIGHT, 2123);
    }

    #[test]
    fn test_scaled_borders_match_constants() {
        assert_eq!(scale_border(SIDE_BORDER), SIDE_SCALED);
        assert_eq!(scale_border(TOP_BORDER), TOP_SCALED);
        assert_eq!(scale_border(BOTTOM_TEXT), BOTTOM_TEXT_SCALED);
    }

    #[test]
    fn test_detect_landscape() {
        assert_eq!(detect_format(2048, 1440).unwrap(), PrintFormat::Landscape);
    }

    #[test]
    fn test_detect_portrait() {
        assert_eq!(detect_format(1152, 2123).unwrap(), PrintFormat::Portrait);
    }

    #[test]
    fn test_detect_rejects_other_sizes() {
        for (w, h) in [(1440, 2048), (1920, 1080), (2123, 1152), (0, 0), (2048, 1441)] {
            assert!(detect_format(w, h).is_err(), "{}x{} should be rejected", w, h);
        }
    }

    #[test]
    fn test_unsupported_size_message() {
        let err = detect_format(800, 600).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unsupported size 800x600. Expected 2048x1440 or 1152x2123."
        );
    }

    #[test]
    fn test_picture_rect_landscape() {
        let rect = picture_rect(PrintFormat::Landscape);
        assert_eq!(rect, Rect::new(64, 69, 1984, 1149));
        assert_eq!((rect.width(), rect.height()), PrintFormat::Landscape.inner_size());
    }

    #[test]
    fn test_picture_rect_portrait() {
        let rect = picture_rect(PrintFormat::Portrait);
        assert_eq!(rect, Rect::new(36, 39, 1116, 1959));
        assert_eq!((rect.width(), rect.height()), PrintFormat::Portrait.inner_size());
    }

    #[test]
    fn test_picture_rect_leaves_bottom_strip() {
        for format in [PrintFormat::Landscape, PrintFormat::Portrait] {
            let (_, h) = format.dimensions();
            assert_eq!(h - format.picture_rect().bottom, format.bottom_strip_height());
        }
    }

    #[test]
    fn test_flipped_round_trip() {
        assert_eq!(PrintFormat::Landscape.flipped(), PrintFormat::Portrait);
        assert_eq!(PrintFormat::Portrait.flipped().flipped(), PrintFormat::Portrait);
    }

    #[test]
    fn test_rect_contains_is_exclusive() {
        let rect = Rect::new(2, 3, 5, 7);
        assert!(rect.contains(2, 3));
        assert!(rect.contains(4, 6));
        assert!(!rect.contains(5, 6));
        assert!(!rect.contains(4, 7));
        assert!(!rect.contains(1, 3));
    }

    #[test]
    fn test_format_display() {
        assert_eq!(PrintFormat::Landscape.to_string(), "landscape");
        assert_eq!(PrintFormat::Portrait.to_string(), "portrait");
    }
}
